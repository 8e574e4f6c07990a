//! Boundary normalization for range requests.
//!
//! A caller supplies `(from, to, from_inclusive, to_inclusive)` in any order.
//! Before a store is scanned, the request is reduced to a canonical half-open
//! interval `[low, high)`, which unifies all four inclusivity combinations
//! into a single comparator. Requests that cannot match anything normalize to
//! `None` and never reach a scan.

/// A caller-supplied range request, consumed per query and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBounds {
    pub from_value: i64,
    pub to_value: i64,
    pub from_inclusive: bool,
    pub to_inclusive: bool,
}

/// A canonical half-open interval `[low, high)`, low-inclusive and
/// high-exclusive, computed fresh for every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedBounds {
    pub low: i64,
    pub high: i64,
}

impl QueryBounds {
    pub fn new(from_value: i64, to_value: i64, from_inclusive: bool, to_inclusive: bool) -> Self {
        QueryBounds {
            from_value,
            to_value,
            from_inclusive,
            to_inclusive,
        }
    }

    /// True when both bounds are negative. Such a request is rejected before
    /// normalization. A single negative bound is deliberately not rejected;
    /// it scans normally.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.from_value < 0 && self.to_value < 0
    }

    /// True for the zero-width exclusive case: equal bounds with at least one
    /// exclusive side match nothing and short-circuit before any scan.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from_value == self.to_value && (!self.from_inclusive || !self.to_inclusive)
    }

    /// Reduces the request to half-open form, or `None` when the interval is
    /// empty.
    ///
    /// The value pair is ordered first (swap when `to < from`); the
    /// inclusivity flags stay attached to their positions, so after a swap
    /// `from_inclusive` governs the low end. Conversion is then per side:
    ///
    /// - inclusive low keeps `low`; exclusive low raises it by one step
    ///   (`value > low` and `value >= low + 1` agree over the integers);
    /// - inclusive high raises `high` by one step; exclusive high keeps it.
    ///
    /// Both `+1` steps saturate at `i64::MAX` so the maximum representable
    /// value never wraps into a bogus bound. The saturation on the high side
    /// means a record valued exactly `i64::MAX` is not reachable through an
    /// inclusive upper bound; this mirrors the published clamping behavior.
    pub fn normalize(&self) -> Option<NormalizedBounds> {
        let (low_value, high_value) = if self.to_value < self.from_value {
            (self.to_value, self.from_value)
        } else {
            (self.from_value, self.to_value)
        };
        let low = if self.from_inclusive {
            low_value
        } else {
            low_value.saturating_add(1)
        };
        let high = if self.to_inclusive {
            high_value.saturating_add(1)
        } else {
            high_value
        };
        (low < high).then_some(NormalizedBounds { low, high })
    }
}

impl NormalizedBounds {
    /// Membership test against the half-open interval.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value < self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(from: i64, to: i64, from_inc: bool, to_inc: bool) -> Option<NormalizedBounds> {
        QueryBounds::new(from, to, from_inc, to_inc).normalize()
    }

    #[test]
    fn test_inclusive_both_sides() {
        let b = normalized(14, 17, true, true).unwrap();
        assert_eq!(b, NormalizedBounds { low: 14, high: 18 });
        assert!(b.contains(14));
        assert!(b.contains(17));
        assert!(!b.contains(18));
    }

    #[test]
    fn test_exclusive_both_sides() {
        let b = normalized(14, 17, false, false).unwrap();
        assert_eq!(b, NormalizedBounds { low: 15, high: 17 });
        assert!(!b.contains(14));
        assert!(b.contains(15));
        assert!(b.contains(16));
        assert!(!b.contains(17));
    }

    #[test]
    fn test_mixed_inclusivity() {
        assert_eq!(
            normalized(14, 17, true, false),
            Some(NormalizedBounds { low: 14, high: 17 })
        );
        assert_eq!(
            normalized(14, 17, false, true),
            Some(NormalizedBounds { low: 15, high: 18 })
        );
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        assert_eq!(
            normalized(17, 14, true, true),
            normalized(14, 17, true, true)
        );
        // After the swap, from_inclusive still governs the low end.
        assert_eq!(
            normalized(17, 14, false, true),
            Some(NormalizedBounds { low: 15, high: 18 })
        );
    }

    #[test]
    fn test_zero_width_exclusive_is_empty() {
        assert_eq!(normalized(17, 17, false, false), None);
        assert_eq!(normalized(17, 17, true, false), None);
        assert_eq!(normalized(17, 17, false, true), None);
        assert!(normalized(17, 17, true, true).is_some());
    }

    #[test]
    fn test_degenerate_flag() {
        assert!(QueryBounds::new(17, 17, false, true).is_degenerate());
        assert!(QueryBounds::new(17, 17, true, false).is_degenerate());
        assert!(!QueryBounds::new(17, 17, true, true).is_degenerate());
        assert!(!QueryBounds::new(16, 17, false, false).is_degenerate());
    }

    #[test]
    fn test_invalid_flag_requires_both_negative() {
        assert!(QueryBounds::new(-1, -1, true, true).is_invalid());
        assert!(QueryBounds::new(-5, -2, false, false).is_invalid());
        assert!(!QueryBounds::new(-5, 10, true, true).is_invalid());
        assert!(!QueryBounds::new(10, -5, true, true).is_invalid());
    }

    #[test]
    fn test_max_value_does_not_wrap() {
        // Inclusive top at i64::MAX clamps instead of overflowing.
        let b = normalized(20, i64::MAX, false, true).unwrap();
        assert_eq!(b.low, 21);
        assert_eq!(b.high, i64::MAX);
        assert!(b.contains(21));
        assert!(b.contains(i64::MAX - 1));

        // Exclusive low at i64::MAX leaves nothing to match.
        assert_eq!(normalized(i64::MAX, i64::MAX, false, true), None);
    }

    #[test]
    fn test_min_value_low_end() {
        let b = normalized(i64::MIN, 0, true, true).unwrap();
        assert_eq!(b.low, i64::MIN);
        assert!(b.contains(i64::MIN));

        let b = normalized(i64::MIN, 0, false, true).unwrap();
        assert_eq!(b.low, i64::MIN + 1);
        assert!(!b.contains(i64::MIN));
    }
}
