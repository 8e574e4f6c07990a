//! Sorted-map storage: values become keys, ids become payload.

use std::collections::BTreeMap;

use payrange_common::Result;

use crate::bounds::NormalizedBounds;
use crate::store::ValueStore;

/// A value-keyed ordered map; a range scan is a sub-range view over the keys
/// in `[low, high)`, amortized O(log N + K) for K matches.
///
/// Duplicate-value policy: retain-all-as-bucket. Every id sharing a value is
/// kept in that value's bucket, so no id is ever silently lost and the store
/// answers exactly like [`PackedValueStore`](crate::store::PackedValueStore)
/// for any normalized range. This policy is part of the published contract.
pub struct SortedValueStore {
    data: BTreeMap<i64, Vec<i16>>,
    record_count: usize,
}

impl SortedValueStore {
    /// Builds the store from the dense value array; the array position is the
    /// record id.
    ///
    /// Fails with `CapacityExceeded` when the dataset is longer than
    /// [`MAX_RECORD_COUNT`](crate::MAX_RECORD_COUNT).
    pub fn new(values: &[i64]) -> Result<SortedValueStore> {
        crate::verify_capacity(values.len())?;
        let mut data: BTreeMap<i64, Vec<i16>> = BTreeMap::new();
        for (id, &value) in values.iter().enumerate() {
            data.entry(value).or_default().push(id as i16);
        }
        Ok(SortedValueStore {
            data,
            record_count: values.len(),
        })
    }

    /// Number of distinct values among the records.
    pub fn distinct_value_count(&self) -> usize {
        self.data.len()
    }
}

impl ValueStore for SortedValueStore {
    fn len(&self) -> usize {
        self.record_count
    }

    fn scan(&self, bounds: NormalizedBounds, out: &mut Vec<i16>) {
        for bucket in self.data.range(bounds.low..bounds.high).map(|(_, b)| b) {
            out.extend_from_slice(bucket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_sub_range() {
        let store = SortedValueStore::new(&[10, 12, 17, 21, 2, 15, 16]).unwrap();
        assert_eq!(store.len(), 7);
        assert_eq!(store.distinct_value_count(), 7);

        let mut out = Vec::new();
        store.scan(NormalizedBounds { low: 14, high: 18 }, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![2, 5, 6]);
    }

    #[test]
    fn test_duplicate_values_are_bucketed() {
        let store = SortedValueStore::new(&[5, 5, 7, 5]).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.distinct_value_count(), 2);

        let mut out = Vec::new();
        store.scan(NormalizedBounds { low: 5, high: 6 }, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![0, 1, 3]);
    }

    #[test]
    fn test_capacity_limit_enforced() {
        let too_long = vec![1i64; crate::MAX_RECORD_COUNT + 1];
        assert!(SortedValueStore::new(&too_long).is_err());
    }
}
