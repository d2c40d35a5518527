//! Combination tables
//!
//! A combination table maps an ordered pair of code points to the code point
//! they compose into (for example ㅗ + ㅏ → ㅘ). Entries are keyed by the two
//! inputs packed into one `u32` and looked up by binary search, so a table
//! must be sorted before it is queried.
//!
//! Tables come in two flavours. Static tables are built once and never
//! change; the built-in layouts share them for the whole process. Dynamic
//! tables are filled item by item while a layout file is read and are then
//! sorted once with [`Combination::finalize`].
//!
//! Duplicate keys are not removed. If the same pair is inserted twice the
//! lookup returns whichever of the entries the search lands on.

use crate::{Error, Result};
use std::borrow::Cow;

/// Capacity of the first allocation made by a dynamic table.
const INITIAL_CAPACITY: usize = 64;

/// Packs a pair of code points into a lookup key.
///
/// Only the low 16 bits of each input are kept: `first` goes into the high
/// half of the key and `second` into the low half.
pub const fn pack_key(first: u32, second: u32) -> u32 {
    ((first & 0xFFFF) << 16) | (second & 0xFFFF)
}

/// One `(first, second) -> code` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombinationItem {
    pub key: u32,
    pub code: u32,
}

impl CombinationItem {
    pub const fn new(first: u32, second: u32, code: u32) -> Self {
        Self {
            key: pack_key(first, second),
            code,
        }
    }

    pub fn first(&self) -> u32 {
        self.key >> 16
    }

    pub fn second(&self) -> u32 {
        self.key & 0xFFFF
    }
}

#[derive(Debug, Clone)]
enum Storage {
    /// Read-only entries, already sorted.
    Static(Cow<'static, [CombinationItem]>),
    /// Insert-only entries; sorted by `finalize`.
    Dynamic(Vec<CombinationItem>),
}

/// A sorted lookup table from code point pairs to composed code points.
#[derive(Debug, Clone)]
pub struct Combination {
    storage: Storage,
}

impl Default for Combination {
    fn default() -> Self {
        Self::new()
    }
}

impl Combination {
    /// Create an empty dynamic table.
    pub const fn new() -> Self {
        Self {
            storage: Storage::Dynamic(Vec::new()),
        }
    }

    /// Wrap a compile-time table. `items` must already be sorted by key.
    pub const fn from_static(items: &'static [CombinationItem]) -> Self {
        Self {
            storage: Storage::Static(Cow::Borrowed(items)),
        }
    }

    /// Build an immutable table from three parallel sequences.
    ///
    /// Entry `i` combines `firsts[i]` and `seconds[i]` into `results[i]`.
    pub fn from_slices(firsts: &[u32], seconds: &[u32], results: &[u32]) -> Result<Self> {
        let n = firsts.len();
        if n == 0 {
            return Err(Error::InvalidArgument(
                "combination table needs at least one entry".to_string(),
            ));
        }
        if seconds.len() != n || results.len() != n {
            return Err(Error::InvalidArgument(format!(
                "combination sequences differ in length: {}, {}, {}",
                n,
                seconds.len(),
                results.len()
            )));
        }
        if n > isize::MAX as usize / std::mem::size_of::<CombinationItem>() {
            return Err(Error::InvalidArgument(format!(
                "combination table too large: {} entries",
                n
            )));
        }

        let mut items: Vec<CombinationItem> = firsts
            .iter()
            .zip(seconds)
            .zip(results)
            .map(|((&first, &second), &code)| CombinationItem::new(first, second, code))
            .collect();
        items.sort_unstable_by_key(|item| item.key);

        Ok(Self {
            storage: Storage::Static(Cow::Owned(items)),
        })
    }

    pub fn is_static(&self) -> bool {
        matches!(self.storage, Storage::Static(_))
    }

    /// Append one entry to a dynamic table.
    ///
    /// Storage doubles when full, starting at 64 entries. If the allocation
    /// fails the table keeps its previous contents.
    pub fn insert(&mut self, first: u32, second: u32, result: u32) -> Result<()> {
        let items = match &mut self.storage {
            Storage::Static(_) => {
                return Err(Error::InvalidArgument(
                    "cannot insert into a static combination table".to_string(),
                ))
            }
            Storage::Dynamic(items) => items,
        };

        if items.len() == items.capacity() {
            let target = match items.capacity() {
                0 => INITIAL_CAPACITY,
                cap => cap.checked_mul(2).ok_or(Error::OutOfMemory)?,
            };
            items
                .try_reserve_exact(target - items.len())
                .map_err(|_| Error::OutOfMemory)?;
        }

        items.push(CombinationItem::new(first, second, result));
        Ok(())
    }

    /// Sort a dynamic table by key. Static tables are left alone.
    pub fn finalize(&mut self) {
        if let Storage::Dynamic(items) = &mut self.storage {
            items.sort_unstable_by_key(|item| item.key);
        }
    }

    /// Look up the code point composed from `first` and `second`, or 0.
    pub fn combine(&self, first: u32, second: u32) -> u32 {
        let key = pack_key(first, second);
        let items = self.items();
        match items.binary_search_by_key(&key, |item| item.key) {
            Ok(index) => items[index].code,
            Err(_) => 0,
        }
    }

    pub fn items(&self) -> &[CombinationItem] {
        match &self.storage {
            Storage::Static(items) => &items[..],
            Storage::Dynamic(items) => &items[..],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Allocated entry slots. Always equal to `len` for static tables.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Static(items) => items.len(),
            Storage::Dynamic(items) => items.capacity(),
        }
    }
}

/// Combine through an optional table. A missing table combines nothing.
pub fn combine_with(table: Option<&Combination>, first: u32, second: u32) -> u32 {
    table.map_or(0, |table| table.combine(first, second))
}
