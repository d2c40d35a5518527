pub mod keyboard_type;

pub use keyboard_type::*;

/// A Unicode scalar value produced by a layout. Zero means "no mapping".
pub type CodePoint = u32;

/// Number of parallel mapping and combination slots in a keyboard.
pub const SLOT_COUNT: usize = 4;

/// Number of raw key codes a mapping table covers.
pub const KEY_TABLE_SIZE: usize = 0x80;
