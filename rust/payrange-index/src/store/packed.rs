//! Packed-array storage: entries kept in original id order.

use payrange_common::Result;

use crate::bounds::NormalizedBounds;
use crate::store::ValueStore;

/// One (value, id) association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub value: i64,
    pub id: i16,
}

/// Entries in construction order; every query is a full linear scan against
/// the range predicate.
///
/// No value is ever used as a lookup key, so duplicate values cost nothing
/// special. Backing storage grows only during construction, by doubling (or
/// to the exact requested size when doubling is insufficient); queries never
/// allocate inside the store.
pub struct PackedValueStore {
    entries: Vec<Entry>,
}

impl PackedValueStore {
    /// Builds the store from the dense value array; the array position is the
    /// record id.
    ///
    /// Fails with `CapacityExceeded` when the dataset is longer than
    /// [`MAX_RECORD_COUNT`](crate::MAX_RECORD_COUNT).
    pub fn new(values: &[i64]) -> Result<PackedValueStore> {
        crate::verify_capacity(values.len())?;
        let mut store = PackedValueStore {
            entries: Vec::new(),
        };
        for (id, &value) in values.iter().enumerate() {
            store.push(Entry {
                value,
                id: id as i16,
            });
        }
        Ok(store)
    }

    fn push(&mut self, entry: Entry) {
        if self.entries.len() == self.capacity() {
            self.grow(1);
        }
        self.entries.push(entry);
    }

    fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Grows the backing storage to accommodate at least `additional` more
    /// entries.
    #[cold]
    fn grow(&mut self, additional: usize) {
        let required = self.entries.len().checked_add(additional).expect("add");
        let new_cap = std::cmp::max(self.capacity() * 2, required);
        let mut entries = Vec::with_capacity(new_cap);
        entries.extend_from_slice(&self.entries);
        self.entries = entries;
    }
}

impl ValueStore for PackedValueStore {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn scan(&self, bounds: NormalizedBounds, out: &mut Vec<i16>) {
        for entry in &self.entries {
            if bounds.contains(entry.value) {
                out.push(entry.id);
            }
        }
    }
}
