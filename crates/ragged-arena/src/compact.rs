//! Defragmentation and layout accounting.
//!
//! Relocation and erasure leave slots behind that no row reserves.
//! [`RaggedVec::compact`] rebuilds the shared buffer so that every row's
//! elements are packed back to back in row order, dropping both dead
//! space and spare capacity.

use ragged_core::RowSpan;
use tracing::debug;

use crate::buffer::SharedBuffer;
use crate::ragged::RaggedVec;

/// A snapshot of how the shared buffer's slots are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Number of rows.
    pub rows: usize,
    /// Total slots in the shared buffer.
    pub buffer_len: usize,
    /// Slots holding row elements.
    pub live: usize,
    /// Reserved but unused slots (sum of `capacity - len`).
    pub spare: usize,
    /// Slots no row reserves.
    pub dead: usize,
}

impl LayoutStats {
    /// Fraction of the buffer that is dead space, in `0.0..=1.0`.
    pub fn fragmentation(&self) -> f64 {
        if self.buffer_len == 0 {
            0.0
        } else {
            self.dead as f64 / self.buffer_len as f64
        }
    }

    /// Slots a call to `compact()` would give back.
    pub fn reclaimable(&self) -> usize {
        self.buffer_len - self.live
    }
}

impl<T> RaggedVec<T> {
    /// Count live, spare and dead slots.
    pub fn stats(&self) -> LayoutStats {
        let (live, reserved) = self
            .rows
            .iter()
            .fold((0, 0), |(live, reserved), span| {
                (live + span.len, reserved + span.capacity)
            });
        let buffer_len = self.buffer.len();
        LayoutStats {
            rows: self.rows.len(),
            buffer_len,
            live,
            spare: reserved - live,
            dead: buffer_len.saturating_sub(reserved),
        }
    }
}

impl<T: Default> RaggedVec<T> {
    /// Pack every row's elements contiguously in row order.
    ///
    /// Afterwards row 0 starts at offset 0, each row starts where the
    /// previous one ends, every row's capacity equals its length, and the
    /// buffer length equals [`element_count`](Self::element_count). Empty
    /// rows get a zero-capacity span at the current packing position.
    /// Logical content is unchanged.
    pub fn compact(&mut self) {
        let before = self.buffer.len();
        let live = self.element_count();
        let mut old = std::mem::replace(&mut self.buffer, SharedBuffer::with_capacity(live));
        for span in &mut self.rows {
            let start = self.buffer.len();
            if !span.is_empty() {
                self.buffer.extend_from(span.live().map(|index| old.take(index)));
            }
            *span = RowSpan::new(start, span.len);
        }
        debug!(
            rows = self.rows.len(),
            live,
            reclaimed = before - live,
            "compacted shared buffer"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragmented() -> RaggedVec<i32> {
        let mut grid = RaggedVec::from(vec![vec![21; 3], vec![22; 2], vec![], vec![24]]);
        grid.row_mut(0).unwrap().push(1);
        grid.row_mut(1).unwrap().reserve(6);
        grid.erase_row(2).unwrap();
        grid
    }

    #[test]
    fn compact_packs_rows_in_order() {
        let mut grid = fragmented();
        let before = grid.to_nested();
        grid.compact();
        assert_eq!(grid.to_nested(), before);
        let spans: Vec<RowSpan> = grid.spans().collect();
        assert_eq!(
            spans,
            vec![RowSpan::new(0, 4), RowSpan::new(4, 2), RowSpan::new(6, 1)]
        );
        assert_eq!(grid.buffer_len(), grid.element_count());
    }

    #[test]
    fn compact_puts_empty_rows_at_packing_position() {
        let mut grid = RaggedVec::from(vec![vec![1, 2], vec![], vec![3]]);
        grid.row_mut(0).unwrap().push(9);
        grid.compact();
        assert_eq!(grid.span(1).unwrap(), RowSpan::new(3, 0));
        assert_eq!(grid.span(2).unwrap(), RowSpan::new(3, 1));
    }

    #[test]
    fn compact_is_idempotent() {
        let mut grid = fragmented();
        grid.compact();
        let spans: Vec<RowSpan> = grid.spans().collect();
        grid.compact();
        assert_eq!(grid.spans().collect::<Vec<_>>(), spans);
        assert_eq!(grid.stats().reclaimable(), 0);
    }

    #[test]
    fn compact_empty_structure() {
        let mut grid: RaggedVec<i32> = RaggedVec::with_rows(3).unwrap();
        grid.compact();
        assert_eq!(grid.buffer_len(), 0);
        assert!(grid.spans().all(|span| span == RowSpan::new(0, 0)));
    }

    #[test]
    fn compacted_rows_grow_again() {
        let mut grid = fragmented();
        grid.compact();
        grid.row_mut(2).unwrap().push(5);
        assert_eq!(grid.span(2).unwrap(), RowSpan::new(6, 2));
        grid.row_mut(0).unwrap().push(6);
        assert_eq!(&grid[0], &[21, 21, 21, 1, 6]);
    }

    #[test]
    fn stats_account_for_every_slot() {
        let grid = fragmented();
        let stats = grid.stats();
        assert_eq!(stats.rows, 3);
        assert_eq!(stats.live, 7);
        assert_eq!(stats.spare, 4);
        assert_eq!(stats.buffer_len, 6 + 4 + 6);
        assert_eq!(stats.dead, stats.buffer_len - stats.live - stats.spare);
        assert!(stats.fragmentation() > 0.0);
        assert_eq!(LayoutStats::default().fragmentation(), 0.0);
    }

    #[test]
    fn stats_after_compact_have_no_waste() {
        let mut grid = fragmented();
        grid.compact();
        let stats = grid.stats();
        assert_eq!(stats.spare, 0);
        assert_eq!(stats.dead, 0);
        assert_eq!(stats.buffer_len, stats.live);
    }
}
