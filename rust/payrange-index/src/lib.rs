//! Immutable range-query container for payroll record ids.
//!
//! This crate indexes a fixed array of numeric attribute values (e.g. worker
//! net-pay amounts) so that all records whose value falls in an arbitrary,
//! possibly-exclusive range can be retrieved quickly. The position of a value
//! in the construction array is the record's id, and ids — not values — are
//! what queries return.
//!
//! # Overview
//!
//! The container is built around the [`RangeContainer`] trait. A container is
//! constructed exactly once from the complete dataset (via a
//! [`ContainerFactory`], typically [`PayrollContainerFactory`]) and is then
//! shared read-only by arbitrarily many concurrent callers. Each query yields
//! an [`IdSequence`]: a single-use cursor that produces matching ids in
//! ascending id order and terminates with the [`END_OF_IDS`] sentinel.
//!
//! # Architecture
//!
//! - **Bounds**: [`bounds`] converts a `(from, to, from_inclusive,
//!   to_inclusive)` request into a canonical half-open range, or reports that
//!   the request can match nothing.
//! - **Stores**: [`store`] holds the (value, id) associations behind the
//!   [`store::ValueStore`] seam, with two interchangeable strategies
//!   (id-ordered packed array, value-keyed sorted map).
//! - **Engine**: [`engine::RangeQueryEngine`] orchestrates a query:
//!   validate, normalize, scan, order by id, wrap.
//! - **Factory**: [`factory`] and [`registry`] decouple container
//!   construction from the concrete storage strategy.

use payrange_common::Result;

pub mod bounds;
pub mod engine;
pub mod factory;
pub mod ids;
pub mod registry;
pub mod store;

pub use engine::RangeQueryEngine;
pub use factory::{ContainerFactory, PayrollContainerFactory, StoreStrategy};
pub use ids::{END_OF_IDS, IdSequence};

/// Largest number of records a container accepts.
///
/// Ids travel through a signed 16-bit channel where `-1` is reserved as the
/// end-of-sequence sentinel, which caps the id space at 15 bits. Construction
/// fails with `CapacityExceeded` for longer datasets rather than letting ids
/// alias the sentinel.
pub const MAX_RECORD_COUNT: usize = i16::MAX as usize;

/// A specialized container of records optimized for efficient range queries
/// on one numeric attribute of the data.
///
/// Implementations are immutable after construction: the full dataset is
/// supplied up front and no insert, update or delete is supported afterwards.
/// Because no mutation occurs, a single container can serve concurrent
/// queries from many threads without locking; the trait requires
/// `Send + Sync` for this reason.
///
/// Malformed or degenerate requests never produce an error: they yield an
/// empty, well-formed [`IdSequence`], consistent with "no match" semantics.
pub trait RangeContainer: Send + Sync {
    /// Returns the ids of all records whose attribute value lies between
    /// `from_value` and `to_value`, honoring the inclusivity flags.
    ///
    /// The order of `from_value` and `to_value` is not significant; reversed
    /// bounds are corrected before scanning. Returned ids are emitted in
    /// strictly ascending id order, regardless of internal storage order.
    ///
    /// Two requests short-circuit to an empty sequence:
    /// - both bounds negative;
    /// - `from_value == to_value` with at least one exclusive side
    ///   (a zero-width exclusive range matches nothing).
    fn find_ids_in_range(
        &self,
        from_value: i64,
        to_value: i64,
        from_inclusive: bool,
        to_inclusive: bool,
    ) -> IdSequence;

    /// Returns the number of records held by this container.
    fn record_count(&self) -> usize;
}

/// Verifies that a dataset fits the 15-bit id space.
pub(crate) fn verify_capacity(len: usize) -> Result<()> {
    if len > MAX_RECORD_COUNT {
        return Err(payrange_common::error::Error::capacity_exceeded(
            len,
            MAX_RECORD_COUNT,
        ));
    }
    Ok(())
}
