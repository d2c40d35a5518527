//! Keyboard definitions
//!
//! A [`Keyboard`] is one selectable layout: an identifier, a display name, a
//! [`KeyboardType`] tag, four key-code-to-code-point mapping slots and four
//! combination table slots. The composition automaton picks the slot to use
//! from its own state; nothing here relates one slot to another.
//!
//! Built-in keyboards are `static` values that point at compile-time tables.
//! They are immutable: the setters exist on every keyboard but do nothing on
//! a built-in one, including a clone of it.

use crate::combination::{combine_with, Combination, CombinationItem};
use crate::types::{CodePoint, KeyboardType, KEY_TABLE_SIZE, SLOT_COUNT};
use std::borrow::Cow;

/// A 128-entry key code to code point table.
#[derive(Debug, Clone)]
pub enum MappingTable {
    Static(&'static [CodePoint; KEY_TABLE_SIZE]),
    Owned(Box<[CodePoint; KEY_TABLE_SIZE]>),
}

impl MappingTable {
    fn zeroed() -> Self {
        MappingTable::Owned(Box::new([0; KEY_TABLE_SIZE]))
    }

    pub fn as_array(&self) -> &[CodePoint; KEY_TABLE_SIZE] {
        match self {
            MappingTable::Static(table) => *table,
            MappingTable::Owned(table) => &**table,
        }
    }

    pub fn get(&self, key: usize) -> CodePoint {
        self.as_array().get(key).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct Keyboard {
    id: Option<Cow<'static, str>>,
    name: Option<Cow<'static, str>>,
    kind: KeyboardType,
    tables: [Option<MappingTable>; SLOT_COUNT],
    combinations: [Option<Combination>; SLOT_COUNT],
    is_static: bool,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    /// Create an empty, mutable keyboard of type [`KeyboardType::Jamo`].
    pub const fn new() -> Self {
        Self {
            id: None,
            name: None,
            kind: KeyboardType::Jamo,
            tables: [None, None, None, None],
            combinations: [None, None, None, None],
            is_static: false,
        }
    }

    /// Declare a built-in keyboard with one mapping table and one
    /// combination table, both in slot 0.
    pub const fn builtin(
        id: &'static str,
        name: &'static str,
        kind: KeyboardType,
        table: &'static [CodePoint; KEY_TABLE_SIZE],
        combination: &'static [CombinationItem],
    ) -> Self {
        Self {
            id: Some(Cow::Borrowed(id)),
            name: Some(Cow::Borrowed(name)),
            kind,
            tables: [Some(MappingTable::Static(table)), None, None, None],
            combinations: [Some(Combination::from_static(combination)), None, None, None],
            is_static: true,
        }
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn keyboard_type(&self) -> KeyboardType {
        self.kind
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        if self.is_static {
            return;
        }
        self.id = Some(Cow::Owned(id.into()));
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.is_static {
            return;
        }
        self.name = Some(Cow::Owned(name.into()));
    }

    pub fn set_type(&mut self, kind: KeyboardType) {
        self.kind = kind;
    }

    /// Map a raw key code through the table in `slot`.
    ///
    /// Returns 0 when the slot or key is out of range, or when no table is
    /// bound to the slot.
    pub fn map_to_char(&self, slot: usize, key: u32) -> CodePoint {
        if slot >= SLOT_COUNT || key as usize >= KEY_TABLE_SIZE {
            return 0;
        }
        match &self.tables[slot] {
            Some(table) => table.get(key as usize),
            None => 0,
        }
    }

    /// Set one entry of the table in `slot`, creating a zeroed table on the
    /// first write to that slot. Out-of-range input is ignored, as is any
    /// write to a built-in keyboard.
    pub fn set_mapping(&mut self, slot: usize, key: u32, value: CodePoint) {
        if self.is_static || slot >= SLOT_COUNT || key as usize >= KEY_TABLE_SIZE {
            return;
        }
        let table = self.tables[slot].get_or_insert_with(MappingTable::zeroed);
        if let MappingTable::Owned(entries) = table {
            entries[key as usize] = value;
        }
    }

    /// Shorthand for `set_mapping(0, key, value)`.
    pub fn set_value(&mut self, key: u32, value: CodePoint) {
        self.set_mapping(0, key, value);
    }

    pub fn mapping(&self, slot: usize) -> Option<&MappingTable> {
        self.tables.get(slot).and_then(Option::as_ref)
    }

    /// Combine two code points with the table bound to `slot`, or return 0.
    pub fn combine(&self, slot: usize, first: CodePoint, second: CodePoint) -> CodePoint {
        combine_with(self.combination(slot), first, second)
    }

    pub fn combination(&self, slot: usize) -> Option<&Combination> {
        self.combinations.get(slot).and_then(Option::as_ref)
    }

    pub fn combination_mut(&mut self, slot: usize) -> Option<&mut Combination> {
        if self.is_static {
            return None;
        }
        self.combinations.get_mut(slot).and_then(Option::as_mut)
    }

    /// Bind `combination` to `slot` and return the table it replaces.
    ///
    /// Does nothing on a built-in keyboard or an out-of-range slot.
    pub fn replace_combination(
        &mut self,
        slot: usize,
        combination: Option<Combination>,
    ) -> Option<Combination> {
        if self.is_static || slot >= SLOT_COUNT {
            return None;
        }
        std::mem::replace(&mut self.combinations[slot], combination)
    }
}

/// [`Keyboard::map_to_char`] for a keyboard that may be missing.
pub fn map_to_char(keyboard: Option<&Keyboard>, slot: usize, key: u32) -> CodePoint {
    keyboard.map_or(0, |keyboard| keyboard.map_to_char(slot, key))
}

/// [`Keyboard::combine`] for a keyboard that may be missing.
pub fn combine(
    keyboard: Option<&Keyboard>,
    slot: usize,
    first: CodePoint,
    second: CodePoint,
) -> CodePoint {
    keyboard.map_or(0, |keyboard| keyboard.combine(slot, first, second))
}
