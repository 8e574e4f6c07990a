//! Value storage strategies behind the range-query engine.
//!
//! A [`ValueStore`] owns the (value, id) associations built once from the
//! construction array and answers half-open range scans. Two interchangeable
//! strategies implement the seam:
//!
//! - [`PackedValueStore`]: entries in original id order, linear predicate
//!   scan per query. Minimal build cost, preferred for the ≤32K datasets
//!   this container accepts.
//! - [`SortedValueStore`]: a sorted map keyed by value, sub-range scan in
//!   O(log N + K). Preferred when queries dominate and ranges are narrow.
//!
//! Both stores keep every id when values repeat (ids sharing a value are
//! bucketed, never overwritten), so for any normalized range the two
//! strategies return the same id set.

use crate::bounds::NormalizedBounds;

pub mod packed;
pub mod sorted;

pub use packed::PackedValueStore;
pub use sorted::SortedValueStore;

/// Read-only store of (value, id) associations supporting range scans.
///
/// Stores are immutable after construction and hold no per-query state:
/// scratch buffers are owned by the caller and passed in, so concurrent
/// scans never contend.
pub trait ValueStore: Send + Sync {
    /// Number of records held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends to `out` the ids of all records whose value lies in `bounds`.
    /// Ids are unordered at this layer; the engine orders them.
    fn scan(&self, bounds: NormalizedBounds, out: &mut Vec<i16>);
}
