//! Keyboard layouts and jamo combination tables for Hangul input
//!
//! The composition automaton asks the [`KeyboardRegistry`] for a layout by
//! id, then maps raw key codes with [`Keyboard::map_to_char`] and joins jamo
//! with [`Keyboard::combine`].

pub mod builtin;
pub mod combination;
pub mod error;
pub mod keyboard;
pub mod loader;
pub mod paths;
pub mod registry;
pub mod types;

pub use types::*;

pub use combination::{pack_key, Combination, CombinationItem};
pub use error::{Error, Result};
pub use keyboard::{Keyboard, MappingTable};
pub use loader::{load_keyboard, KeyboardLoader, LoaderOptions};
pub use registry::{InitStatus, KeyboardRef, KeyboardRegistry};
