//! Row descriptors.
//!
//! A [`RowSpan`] records where one row lives inside the shared buffer. It
//! is a plain offset triple: it knows nothing about other rows and holds
//! no reference to the buffer it indexes, so buffer growth never
//! invalidates it.

use std::fmt;
use std::ops::Range;

/// Location of one row within the shared buffer.
///
/// Slots `[start, start + len)` hold the row's live elements. Slots
/// `[start + len, start + capacity)` are spare capacity reserved for this
/// row alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct RowSpan {
    /// Buffer offset of the row's first slot.
    pub start: usize,
    /// Number of live elements.
    pub len: usize,
    /// Number of reserved slots, always `>= len`.
    pub capacity: usize,
}

impl RowSpan {
    /// Create a span whose capacity equals its length.
    pub fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            len,
            capacity: len,
        }
    }

    /// Create a span with explicit spare capacity.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity`.
    pub fn with_capacity(start: usize, len: usize, capacity: usize) -> Self {
        assert!(len <= capacity, "span len {len} exceeds capacity {capacity}");
        Self {
            start,
            len,
            capacity,
        }
    }

    /// Whether the row has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of spare slots after the live elements.
    pub fn spare(&self) -> usize {
        self.capacity - self.len
    }

    /// Buffer offset one past the last live element.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Buffer offset one past the last reserved slot.
    pub fn reserved_end(&self) -> usize {
        self.start + self.capacity
    }

    /// Buffer range of the live elements.
    pub fn live(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Buffer range of all reserved slots.
    pub fn reserved(&self) -> Range<usize> {
        self.start..self.reserved_end()
    }

    /// Whether this span's reservation ends exactly at `buffer_len`, i.e.
    /// the row can grow in place by extending the buffer.
    pub fn is_tail_of(&self, buffer_len: usize) -> bool {
        self.reserved_end() == buffer_len
    }

    /// Whether the reserved ranges of two spans share any slot.
    pub fn overlaps(&self, other: &RowSpan) -> bool {
        self.capacity > 0
            && other.capacity > 0
            && self.start < other.reserved_end()
            && other.start < self.reserved_end()
    }
}

impl fmt::Display for RowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RowSpan(start={}, len={}, cap={})",
            self.start, self.len, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_span_has_no_spare() {
        let span = RowSpan::new(10, 4);
        assert_eq!(span.capacity, 4);
        assert_eq!(span.spare(), 0);
        assert_eq!(span.live(), 10..14);
        assert_eq!(span.reserved(), 10..14);
    }

    #[test]
    fn tail_check_uses_reserved_end() {
        let span = RowSpan::with_capacity(3, 2, 5);
        assert_eq!(span.end(), 5);
        assert!(span.is_tail_of(8));
        assert!(!span.is_tail_of(5));
    }

    #[test]
    fn zero_capacity_spans_never_overlap() {
        let a = RowSpan::new(4, 0);
        let b = RowSpan::new(2, 4);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn adjacent_spans_do_not_overlap() {
        let a = RowSpan::with_capacity(0, 1, 3);
        let b = RowSpan::new(3, 2);
        let c = RowSpan::new(2, 2);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn len_above_capacity_panics() {
        let _ = RowSpan::with_capacity(0, 3, 2);
    }

    #[test]
    fn display_lists_all_fields() {
        let span = RowSpan::with_capacity(7, 1, 2);
        assert_eq!(span.to_string(), "RowSpan(start=7, len=1, cap=2)");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_span() -> impl Strategy<Value = RowSpan> {
            (0usize..64, 0usize..16, 0usize..16)
                .prop_map(|(start, len, extra)| RowSpan::with_capacity(start, len, len + extra))
        }

        proptest! {
            #[test]
            fn overlap_is_symmetric(a in arb_span(), b in arb_span()) {
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn live_range_is_inside_reserved_range(span in arb_span()) {
                let live = span.live();
                let reserved = span.reserved();
                prop_assert!(reserved.start <= live.start);
                prop_assert!(live.end <= reserved.end);
                prop_assert_eq!(reserved.len() - live.len(), span.spare());
            }
        }
    }
}
