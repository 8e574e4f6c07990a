//! Query orchestration over a value store.

use std::time::Instant;

use crate::RangeContainer;
use crate::bounds::QueryBounds;
use crate::ids::IdSequence;
use crate::store::ValueStore;

/// Drives a range query end to end: validate the request, normalize the
/// bounds, scan the store, order the matches by id and wrap them for
/// consumption.
///
/// The engine is generic over the storage strategy so that both store kinds
/// share one query path. It holds no mutable state: the match buffer is
/// allocated per call, never shared across concurrent queries.
pub struct RangeQueryEngine<S: ValueStore> {
    store: S,
}

impl<S: ValueStore> RangeQueryEngine<S> {
    pub fn new(store: S) -> RangeQueryEngine<S> {
        RangeQueryEngine { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ValueStore> RangeContainer for RangeQueryEngine<S> {
    fn find_ids_in_range(
        &self,
        from_value: i64,
        to_value: i64,
        from_inclusive: bool,
        to_inclusive: bool,
    ) -> IdSequence {
        let bounds = QueryBounds::new(from_value, to_value, from_inclusive, to_inclusive);
        if bounds.is_invalid() || bounds.is_degenerate() {
            return IdSequence::empty();
        }
        let Some(normalized) = bounds.normalize() else {
            return IdSequence::empty();
        };

        // Timing events are observational only and never gate the result.
        let started = Instant::now();
        log::debug!("range query started: [{from_value}, {to_value}]");

        let mut matches = Vec::new();
        self.store.scan(normalized, &mut matches);
        matches.sort_unstable();

        log::debug!(
            "range query finished: {} id(s) in {:?}",
            matches.len(),
            started.elapsed()
        );
        IdSequence::new(matches)
    }

    fn record_count(&self) -> usize {
        self.store.len()
    }
}
