//! Per-row growth, relocation and editing.
//!
//! Every row-level mutation ends up here. Each one picks between three
//! strategies:
//!
//! - **In span:** the row's spare capacity absorbs the change; elements
//!   only shift within the row's own slots.
//! - **Tail growth:** the row's reservation ends at the buffer end, so
//!   the buffer grows and the span extends in place without moving
//!   anything.
//! - **Relocation:** the buffer grows by a fresh span, the row's elements
//!   move there, and the old span becomes dead space until the next
//!   `compact()`.
//!
//! Growth reserves exactly what the operation needs; there is no
//! per-row doubling.
//!
//! All row indices passed in are valid: they come from a live `RowMut`,
//! which holds the structure exclusively.

use std::ops::RangeBounds;

use ragged_core::{RaggedError, RowSpan};
use smallvec::SmallVec;
use tracing::trace;

use crate::ragged::{resolve_range, RaggedVec};

/// Inserted ranges up to this many elements are staged on the stack.
const INLINE_INSERT: usize = 8;

impl<T: Default> RaggedVec<T> {
    /// Move `row` into `capacity` fresh slots at the buffer tail.
    fn relocate(&mut self, row: usize, capacity: usize) {
        let span = self.rows[row];
        debug_assert!(capacity >= span.len);
        let new_start = self.buffer.len();
        self.buffer.extend_default(capacity);
        self.buffer.shift_descending(span.live(), new_start);
        trace!(
            row,
            from = span.start,
            to = new_start,
            len = span.len,
            capacity,
            abandoned = span.capacity,
            "relocated row to buffer tail"
        );
        self.rows[row] = RowSpan::with_capacity(new_start, span.len, capacity);
    }

    pub(crate) fn row_reserve(&mut self, row: usize, capacity: usize) {
        let span = self.rows[row];
        if capacity <= span.capacity {
            return;
        }
        if span.is_tail_of(self.buffer.len()) {
            self.buffer.extend_default(capacity - span.capacity);
            self.rows[row].capacity = capacity;
        } else {
            self.relocate(row, capacity);
        }
    }

    pub(crate) fn row_push(&mut self, row: usize, value: T) {
        let span = self.rows[row];
        if span.len < span.capacity {
            self.buffer.set(span.end(), value);
            self.rows[row].len += 1;
        } else if span.is_tail_of(self.buffer.len()) {
            self.buffer.push(value);
            self.rows[row] = RowSpan::new(span.start, span.len + 1);
        } else {
            self.relocate(row, span.len + 1);
            let moved = &mut self.rows[row];
            self.buffer.set(moved.end(), value);
            moved.len += 1;
        }
    }

    pub(crate) fn row_pop(&mut self, row: usize) -> Option<T> {
        let span = self.rows[row];
        if span.is_empty() {
            return None;
        }
        let value = self.buffer.take(span.end() - 1);
        self.rows[row].len -= 1;
        Some(value)
    }

    pub(crate) fn row_insert<I: IntoIterator<Item = T>>(
        &mut self,
        row: usize,
        pos: usize,
        items: I,
    ) -> Result<usize, RaggedError> {
        let len = self.rows[row].len;
        if pos > len {
            return Err(RaggedError::ElementOutOfRange {
                row,
                index: pos,
                len,
            });
        }
        self.row_splice(row, pos, items);
        Ok(pos)
    }

    /// Insert `items` at offset `pos`, which must be `<= len`.
    pub(crate) fn row_splice<I: IntoIterator<Item = T>>(&mut self, row: usize, pos: usize, items: I) {
        let items: SmallVec<[T; INLINE_INSERT]> = items.into_iter().collect();
        let count = items.len();
        if count == 0 {
            return;
        }
        let span = self.rows[row];
        let new_len = span.len + count;
        let suffix = span.start + pos..span.end();

        let dst = if new_len <= span.capacity {
            self.buffer.shift_descending(suffix, span.start + pos + count);
            self.rows[row].len = new_len;
            span.start + pos
        } else if span.is_tail_of(self.buffer.len()) {
            // Existing spare slots count toward the new elements; only the
            // shortfall is appended, so a row with no spare grows by `count`.
            self.buffer.extend_default(new_len - span.capacity);
            self.buffer.shift_descending(suffix, span.start + pos + count);
            self.rows[row] = RowSpan::new(span.start, new_len);
            span.start + pos
        } else {
            let new_start = self.buffer.len();
            self.buffer.extend_default(new_len);
            self.buffer.shift_descending(span.start..span.start + pos, new_start);
            self.buffer.shift_descending(suffix, new_start + pos + count);
            trace!(
                row,
                from = span.start,
                to = new_start,
                len = new_len,
                abandoned = span.capacity,
                "relocated row for insert"
            );
            self.rows[row] = RowSpan::new(new_start, new_len);
            new_start + pos
        };

        for (offset, value) in items.into_iter().enumerate() {
            self.buffer.set(dst + offset, value);
        }
    }

    pub(crate) fn row_erase<R: RangeBounds<usize>>(
        &mut self,
        row: usize,
        range: R,
    ) -> Result<usize, RaggedError> {
        let span = self.rows[row];
        let range = resolve_range(&range, span.len, |index| RaggedError::ElementOutOfRange {
            row,
            index,
            len: span.len,
        })?;
        if range.is_empty() {
            return Ok(range.end);
        }
        let first = span.start + range.start;
        let last = span.start + range.end;
        self.buffer.release(first..last);
        self.buffer.shift_ascending(last..span.end(), first);
        self.rows[row].len -= range.len();
        Ok(range.start)
    }

    pub(crate) fn row_remove(&mut self, row: usize, index: usize) -> Result<T, RaggedError> {
        let span = self.rows[row];
        if index >= span.len {
            return Err(RaggedError::ElementOutOfRange {
                row,
                index,
                len: span.len,
            });
        }
        let slot = span.start + index;
        let value = self.buffer.take(slot);
        self.buffer.shift_ascending(slot + 1..span.end(), slot);
        self.rows[row].len -= 1;
        Ok(value)
    }

    pub(crate) fn row_resize_with<F: FnMut() -> T>(&mut self, row: usize, len: usize, fill: F) {
        let span = self.rows[row];
        if len <= span.len {
            self.buffer.release(span.start + len..span.end());
            self.rows[row].len = len;
            return;
        }
        if len > span.capacity {
            self.relocate(row, len);
        }
        let grown = self.rows[row];
        self.buffer.fill_with(grown.end()..grown.start + len, fill);
        self.rows[row].len = len;
    }

    pub(crate) fn row_clear(&mut self, row: usize) {
        let span = self.rows[row];
        self.buffer.release(span.live());
        self.rows[row].len = 0;
    }

    pub(crate) fn row_shrink_to_fit(&mut self, row: usize) {
        let span = &mut self.rows[row];
        span.capacity = span.len;
    }
}
