//! Container construction, decoupled from the storage strategy.

use std::sync::Arc;

use payrange_common::Result;

use crate::RangeContainer;
use crate::engine::RangeQueryEngine;
use crate::store::{PackedValueStore, SortedValueStore};

/// Chooses the backing storage for a new container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreStrategy {
    /// Entries kept in id order and scanned linearly per query. Minimal
    /// build cost; the default for the ≤32K datasets this container accepts.
    #[default]
    PackedArray,
    /// Values keyed in a sorted map; sub-range scans in O(log N + K).
    /// Preferred when queries dominate and matched ranges are narrow.
    SortedMap,
}

/// Builds immutable containers optimized for range queries.
///
/// The data is expected to be 32k items or less. The position in the `values`
/// array represents the id of that record. For a payroll dataset, the id
/// might be a worker's employee number and the value the corresponding net
/// pay: `values[5] = 2000` means employee #6 has net pay of 2000.
///
/// Consumers depend only on this trait; how a conforming instance is chosen
/// (directly, or through the [`registry`](crate::registry)) is not their
/// concern.
pub trait ContainerFactory: Send + Sync {
    /// Returns the unique, stable name of this factory, used to register and
    /// look it up (e.g. `"payroll-packed-v1"`).
    fn name(&self) -> &str;

    /// Builds a container from the dense value array.
    ///
    /// # Errors
    ///
    /// Fails with `CapacityExceeded` when `values` is longer than
    /// [`MAX_RECORD_COUNT`](crate::MAX_RECORD_COUNT): ids would otherwise
    /// alias the end-of-sequence sentinel.
    fn create_container(&self, values: &[i64]) -> Result<Arc<dyn RangeContainer>>;
}

/// Default factory: one engine per storage strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayrollContainerFactory {
    strategy: StoreStrategy,
}

impl PayrollContainerFactory {
    pub fn new(strategy: StoreStrategy) -> PayrollContainerFactory {
        PayrollContainerFactory { strategy }
    }

    pub fn strategy(&self) -> StoreStrategy {
        self.strategy
    }
}

impl ContainerFactory for PayrollContainerFactory {
    fn name(&self) -> &str {
        match self.strategy {
            StoreStrategy::PackedArray => "payroll-packed-v1",
            StoreStrategy::SortedMap => "payroll-sorted-v1",
        }
    }

    fn create_container(&self, values: &[i64]) -> Result<Arc<dyn RangeContainer>> {
        match self.strategy {
            StoreStrategy::PackedArray => Ok(Arc::new(RangeQueryEngine::new(
                PackedValueStore::new(values)?,
            ))),
            StoreStrategy::SortedMap => Ok(Arc::new(RangeQueryEngine::new(SortedValueStore::new(
                values,
            )?))),
        }
    }
}
