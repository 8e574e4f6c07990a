//! Sentinel-terminated iteration over query results.

/// Signals the end of an id sequence. Ids are capped at 15 bits precisely so
/// that `-1` can never collide with a real id.
pub const END_OF_IDS: i16 = -1;

/// A finite, single-use cursor over the ids matched by one range query.
///
/// The ids are produced in strictly ascending order (lower to higher) to
/// facilitate distributing a query across multiple containers. Once the
/// cursor runs past the last id, [`next_id`](Self::next_id) returns
/// [`END_OF_IDS`] and keeps returning it: exhaustion is terminal.
///
/// A sequence belongs to exactly one query and one consumer. The full result
/// is computed eagerly before the sequence is handed out, so production is
/// never interleaved with consumption and there is nothing to cancel.
#[derive(Debug, Clone)]
pub struct IdSequence {
    ids: Vec<i16>,
    cursor: usize,
}

impl IdSequence {
    /// Wraps a buffer of ids sorted in ascending order.
    pub(crate) fn new(ids: Vec<i16>) -> IdSequence {
        debug_assert!(ids.is_sorted());
        debug_assert!(ids.iter().all(|&id| id >= 0));
        IdSequence { ids, cursor: 0 }
    }

    /// A sequence that yields the sentinel immediately.
    pub fn empty() -> IdSequence {
        IdSequence {
            ids: Vec::new(),
            cursor: 0,
        }
    }

    /// Returns the next id in sequence, or [`END_OF_IDS`] at end of data.
    pub fn next_id(&mut self) -> i16 {
        match self.ids.get(self.cursor) {
            Some(&id) => {
                self.cursor += 1;
                id
            }
            None => END_OF_IDS,
        }
    }

    /// Total number of ids matched by the query, drained or not.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Iterator over the remaining ids; yields `None` instead of the sentinel.
impl Iterator for IdSequence {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        match self.next_id() {
            END_OF_IDS => None,
            id => Some(id),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ids.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_in_order_then_sentinel() {
        let mut ids = IdSequence::new(vec![2, 5, 6]);
        assert_eq!(ids.len(), 3);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 5);
        assert_eq!(ids.next_id(), 6);
        assert_eq!(ids.next_id(), END_OF_IDS);
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut ids = IdSequence::new(vec![0]);
        assert_eq!(ids.next_id(), 0);
        for _ in 0..5 {
            assert_eq!(ids.next_id(), END_OF_IDS);
        }
    }

    #[test]
    fn test_empty_sequence() {
        let mut ids = IdSequence::empty();
        assert!(ids.is_empty());
        assert_eq!(ids.next_id(), END_OF_IDS);
        assert_eq!(ids.next_id(), END_OF_IDS);
    }

    #[test]
    fn test_iterator_stops_before_sentinel() {
        let ids = IdSequence::new(vec![1, 3, 8]);
        assert_eq!(ids.collect::<Vec<_>>(), vec![1, 3, 8]);
    }

    #[test]
    fn test_iterator_after_partial_drain() {
        let mut ids = IdSequence::new(vec![1, 3, 8]);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.size_hint(), (2, Some(2)));
        assert_eq!(ids.collect::<Vec<_>>(), vec![3, 8]);
    }
}
