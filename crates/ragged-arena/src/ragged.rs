//! The two-dimensional buffer manager.
//!
//! [`RaggedVec`] owns the [`SharedBuffer`] and the ordered row sequence.
//! This module holds construction, access, and whole-structure (row
//! sequence) operations. Per-row growth and relocation live in
//! `layout.rs`; defragmentation lives in `compact.rs`.
//!
//! Row order is defined by the row sequence alone. Buffer placement is
//! independent of it: inserting a row at position 0 appends its elements
//! at the buffer tail and splices a descriptor into the sequence without
//! touching any other row's offsets.

use std::fmt;
use std::ops::{Bound, Index, IndexMut, Range, RangeBounds};

use ragged_core::{RaggedError, RowSpan};

use crate::buffer::SharedBuffer;
use crate::config::RaggedConfig;
use crate::row::{Row, RowMut, RowSlices};

/// A jagged two-dimensional array whose rows share one contiguous buffer.
///
/// Each row is described by a [`RowSpan`] into the shared buffer. Rows can
/// grow, shrink and be edited independently; a row that outgrows its span
/// is relocated to the buffer tail and its old slots become dead space,
/// reclaimed only by [`RaggedVec::compact`].
///
/// Row views ([`Row`], [`RowMut`]) borrow the whole structure, so element
/// references can never outlive a buffer reallocation.
///
/// ```
/// use ragged_arena::RaggedVec;
///
/// let mut grid: RaggedVec<u32> = RaggedVec::with_rows(2).unwrap();
/// grid.row_mut(0).unwrap().push(1);
/// grid.push_row([7, 8, 9]);
/// assert_eq!(&grid[2], &[7, 8, 9]);
/// assert_eq!(grid.element_count(), 4);
/// ```
#[derive(Clone)]
pub struct RaggedVec<T> {
    pub(crate) buffer: SharedBuffer<T>,
    pub(crate) rows: Vec<RowSpan>,
}

impl<T> RaggedVec<T> {
    /// Create an empty structure with no rows.
    pub fn new() -> Self {
        Self {
            buffer: SharedBuffer::new(),
            rows: Vec::new(),
        }
    }

    /// Create an empty structure using the allocation hints in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::CapacityOverflow`] if a hint is too large.
    pub fn with_config(config: &RaggedConfig) -> Result<Self, RaggedError> {
        config.validate::<T>()?;
        Ok(Self {
            buffer: SharedBuffer::with_capacity(config.element_capacity),
            rows: Vec::with_capacity(config.row_capacity),
        })
    }

    /// Create `rows` empty rows.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::InvalidShape`] if `rows == 0`.
    pub fn with_rows(rows: usize) -> Result<Self, RaggedError> {
        if rows == 0 {
            return Err(RaggedError::InvalidShape { rows, cols: None });
        }
        Ok(Self {
            buffer: SharedBuffer::new(),
            rows: vec![RowSpan::default(); rows],
        })
    }

    // ── Introspection ───────────────────────────────────────────────

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of live elements across all rows.
    pub fn element_count(&self) -> usize {
        self.rows.iter().map(|span| span.len).sum()
    }

    /// Number of slots in the shared buffer, including spare and dead ones.
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Number of row descriptors the row sequence can hold without growing.
    pub fn row_capacity(&self) -> usize {
        self.rows.capacity()
    }

    /// Reserve room for at least `additional` more row descriptors.
    pub fn reserve_rows(&mut self, additional: usize) {
        self.rows.reserve(additional);
    }

    /// The descriptor of row `index`.
    pub fn span(&self, index: usize) -> Result<RowSpan, RaggedError> {
        self.check_row(index)?;
        Ok(self.rows[index])
    }

    /// Descriptors of every row, in row order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = RowSpan> + '_ {
        self.rows.iter().copied()
    }

    // ── Row access ──────────────────────────────────────────────────

    /// A read-only view of row `index`.
    pub fn row(&self, index: usize) -> Result<Row<'_, T>, RaggedError> {
        self.check_row(index)?;
        Ok(self.row_view(index))
    }

    /// A mutable view of row `index`.
    pub fn row_mut(&mut self, index: usize) -> Result<RowMut<'_, T>, RaggedError> {
        self.check_row(index)?;
        Ok(RowMut::new(self, index))
    }

    /// A mutable view of the last row, if any.
    pub fn last_row_mut(&mut self) -> Option<RowMut<'_, T>> {
        let index = self.rows.len().checked_sub(1)?;
        Some(RowMut::new(self, index))
    }

    /// Iterate over read-only row views in row order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Row<'_, T>> + '_ {
        (0..self.rows.len()).map(move |index| self.row_view(index))
    }

    /// Iterate over each row's live elements as a slice.
    pub fn rows_as_slices(&self) -> RowSlices<'_, T> {
        RowSlices::new(self.buffer.as_slice(), &self.rows)
    }

    // ── Element access ──────────────────────────────────────────────

    /// Bounds-checked access to element `col` of row `row`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, RaggedError> {
        let span = self.span(row)?;
        if col >= span.len {
            return Err(RaggedError::ElementOutOfRange {
                row,
                index: col,
                len: span.len,
            });
        }
        Ok(&self.buffer.as_slice()[span.start + col])
    }

    /// Bounds-checked mutable access to element `col` of row `row`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, RaggedError> {
        let span = self.span(row)?;
        if col >= span.len {
            return Err(RaggedError::ElementOutOfRange {
                row,
                index: col,
                len: span.len,
            });
        }
        Ok(&mut self.buffer.slice_mut(span.live())[col])
    }

    /// Element `col` of row `row`, or `None` if either is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.at(row, col).ok()
    }

    /// Mutable element `col` of row `row`, or `None` if either is out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.at_mut(row, col).ok()
    }

    // ── Row-sequence operations ─────────────────────────────────────

    /// Append a row holding `items`, placed in fresh slots at the buffer tail.
    pub fn push_row<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let start = self.buffer.len();
        let len = self.buffer.extend_from(items);
        self.rows.push(RowSpan::new(start, len));
    }

    /// Insert a row holding `items` at row position `pos`.
    ///
    /// The elements are appended at the buffer tail; only the row sequence
    /// is spliced. Returns `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::RowOutOfRange`] if `pos > row_count()`.
    pub fn insert_row<I: IntoIterator<Item = T>>(
        &mut self,
        pos: usize,
        items: I,
    ) -> Result<usize, RaggedError> {
        self.check_row_position(pos)?;
        let start = self.buffer.len();
        let len = self.buffer.extend_from(items);
        self.rows.insert(pos, RowSpan::new(start, len));
        Ok(pos)
    }

    /// Insert several rows at row position `pos`, preserving their order.
    ///
    /// Rows are inserted one at a time at the fixed position, last row
    /// first, so the buffer holds their elements in reverse order. Returns
    /// `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::RowOutOfRange`] if `pos > row_count()`.
    pub fn insert_rows<R, I>(&mut self, pos: usize, rows: R) -> Result<usize, RaggedError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        self.check_row_position(pos)?;
        let pending: Vec<I> = rows.into_iter().collect();
        for items in pending.into_iter().rev() {
            self.insert_row(pos, items)?;
        }
        Ok(pos)
    }

    /// Copy every row into an independent `Vec<Vec<T>>`.
    pub fn to_nested(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows_as_slices().map(<[T]>::to_vec).collect()
    }

    // ── Internal helpers ────────────────────────────────────────────

    pub(crate) fn row_view(&self, index: usize) -> Row<'_, T> {
        let span = self.rows[index];
        Row::new(index, span, self.buffer.slice(span.live()))
    }

    pub(crate) fn row_slice(&self, index: usize) -> &[T] {
        self.buffer.slice(self.rows[index].live())
    }

    pub(crate) fn row_slice_mut(&mut self, index: usize) -> &mut [T] {
        let live = self.rows[index].live();
        self.buffer.slice_mut(live)
    }

    fn check_row(&self, index: usize) -> Result<(), RaggedError> {
        if index >= self.rows.len() {
            return Err(RaggedError::RowOutOfRange {
                index,
                row_count: self.rows.len(),
            });
        }
        Ok(())
    }

    fn check_row_position(&self, pos: usize) -> Result<(), RaggedError> {
        if pos > self.rows.len() {
            return Err(RaggedError::RowOutOfRange {
                index: pos,
                row_count: self.rows.len(),
            });
        }
        Ok(())
    }
}

impl<T: Default> RaggedVec<T> {
    /// Create `rows` rows of `cols` default-valued elements each.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::InvalidShape`] if either count is zero.
    pub fn with_shape(rows: usize, cols: usize) -> Result<Self, RaggedError> {
        if rows == 0 || cols == 0 {
            return Err(RaggedError::InvalidShape {
                rows,
                cols: Some(cols),
            });
        }
        let total = rows
            .checked_mul(cols)
            .ok_or(RaggedError::CapacityOverflow { requested: usize::MAX })?;
        let config = RaggedConfig::new()
            .row_capacity(rows)
            .element_capacity(total);
        let mut grid = Self::with_config(&config)?;
        for row in 0..rows {
            grid.buffer.extend_default(cols);
            grid.rows.push(RowSpan::new(row * cols, cols));
        }
        Ok(grid)
    }

    /// Remove row `pos`, dropping its elements. Returns `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::RowOutOfRange`] if `pos >= row_count()`.
    pub fn erase_row(&mut self, pos: usize) -> Result<usize, RaggedError> {
        self.check_row(pos)?;
        self.erase_rows(pos..pos + 1)
    }

    /// Remove a range of rows, dropping their elements.
    ///
    /// The removed rows' slots become dead space. Returns the position of
    /// the first row after the removed range, which is the range start.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::RowOutOfRange`] if an endpoint exceeds
    /// `row_count()`, or [`RaggedError::InvalidRange`] if the end precedes
    /// the start.
    pub fn erase_rows<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, RaggedError> {
        let row_count = self.rows.len();
        let range = resolve_range(&range, row_count, |index| RaggedError::RowOutOfRange {
            index,
            row_count,
        })?;
        if range.is_empty() {
            return Ok(range.end);
        }
        for span in self.rows.drain(range.clone()) {
            self.buffer.release(span.live());
        }
        Ok(range.start)
    }

    /// Remove the last row and return its elements.
    pub fn pop_row(&mut self) -> Option<Vec<T>> {
        let span = self.rows.pop()?;
        Some(span.live().map(|index| self.buffer.take(index)).collect())
    }

    /// Change the number of rows, appending empty rows when growing.
    ///
    /// Truncated rows' elements are dropped and their slots become dead
    /// space.
    pub fn resize_rows(&mut self, rows: usize) {
        if rows <= self.rows.len() {
            self.truncate_rows(rows);
            return;
        }
        let start = self.buffer.len();
        self.rows.resize(rows, RowSpan::new(start, 0));
    }

    /// Change the number of rows, appending copies of `template` when growing.
    ///
    /// Each appended row gets its own fresh slots at the buffer tail.
    pub fn resize_rows_with(&mut self, rows: usize, template: &[T])
    where
        T: Clone,
    {
        if rows <= self.rows.len() {
            self.truncate_rows(rows);
            return;
        }
        let added = rows - self.rows.len();
        self.rows.reserve(added);
        for _ in 0..added {
            self.push_row(template.iter().cloned());
        }
    }

    /// Remove every row and drop every slot of the shared buffer.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.buffer.clear();
    }

    fn truncate_rows(&mut self, rows: usize) {
        for span in self.rows.drain(rows..) {
            self.buffer.release(span.live());
        }
    }
}

/// Turn `range` into a concrete `start..end` within `0..=len`.
///
/// Endpoints past `len` are reported through `out_of_range`; an end that
/// precedes its start is [`RaggedError::InvalidRange`].
pub(crate) fn resolve_range<R, E>(
    range: &R,
    len: usize,
    out_of_range: E,
) -> Result<Range<usize>, RaggedError>
where
    R: RangeBounds<usize>,
    E: Fn(usize) -> RaggedError,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or_else(|| out_of_range(start))?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or_else(|| out_of_range(end))?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    if start > len {
        return Err(out_of_range(start));
    }
    if end > len {
        return Err(out_of_range(end));
    }
    if start > end {
        return Err(RaggedError::InvalidRange { start, end });
    }
    Ok(start..end)
}

impl<T> Default for RaggedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for RaggedVec<T> {
    type Output = [T];

    /// The live elements of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= row_count()`.
    fn index(&self, index: usize) -> &[T] {
        self.row_slice(index)
    }
}

impl<T> IndexMut<usize> for RaggedVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut [T] {
        self.row_slice_mut(index)
    }
}

impl<T> Index<(usize, usize)> for RaggedVec<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.row_slice(row)[col]
    }
}

impl<T> IndexMut<(usize, usize)> for RaggedVec<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.row_slice_mut(row)[col]
    }
}

impl<T: PartialEq> PartialEq for RaggedVec<T> {
    /// Logical equality: same rows with the same elements, regardless of
    /// buffer layout, spare capacity or dead space.
    fn eq(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows_as_slices()
                .zip(other.rows_as_slices())
                .all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RaggedVec<T> {}

impl<T: fmt::Debug> fmt::Debug for RaggedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows_as_slices()).finish()
    }
}

impl<T, I> FromIterator<I> for RaggedVec<T>
where
    I: IntoIterator<Item = T>,
{
    fn from_iter<R: IntoIterator<Item = I>>(rows: R) -> Self {
        let mut ragged = Self::new();
        for items in rows {
            ragged.push_row(items);
        }
        ragged
    }
}

impl<T> From<Vec<Vec<T>>> for RaggedVec<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        let total = rows.iter().map(Vec::len).sum();
        let mut ragged = Self {
            buffer: SharedBuffer::with_capacity(total),
            rows: Vec::with_capacity(rows.len()),
        };
        for items in rows {
            ragged.push_row(items);
        }
        ragged
    }
}

impl<'a, T> IntoIterator for &'a RaggedVec<T> {
    type Item = &'a [T];
    type IntoIter = RowSlices<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows_as_slices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RaggedVec<i32> {
        RaggedVec::from(vec![vec![21, 21, 21], vec![22, 22], vec![], vec![24]])
    }

    #[test]
    fn with_rows_creates_empty_rows() {
        let grid: RaggedVec<i32> = RaggedVec::with_rows(5).unwrap();
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.element_count(), 0);
        assert_eq!(grid.buffer_len(), 0);
        assert!(grid.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn zero_rows_is_a_shape_error() {
        let err = RaggedVec::<i32>::with_rows(0).unwrap_err();
        assert_eq!(err, RaggedError::InvalidShape { rows: 0, cols: None });
    }

    #[test]
    fn with_shape_fills_default_values() {
        let grid: RaggedVec<u8> = RaggedVec::with_shape(3, 4).unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.element_count(), 12);
        assert_eq!(grid.buffer_len(), 12);
        assert_eq!(grid.span(2).unwrap(), RowSpan::new(8, 4));
        assert!(grid.rows_as_slices().all(|row| row == [0, 0, 0, 0]));
    }

    #[test]
    fn with_shape_rejects_zero_columns() {
        let err = RaggedVec::<u8>::with_shape(3, 0).unwrap_err();
        assert_eq!(
            err,
            RaggedError::InvalidShape {
                rows: 3,
                cols: Some(0)
            }
        );
    }

    #[test]
    fn with_config_preallocates() {
        let config = RaggedConfig::new().row_capacity(16).element_capacity(256);
        let grid: RaggedVec<u32> = RaggedVec::with_config(&config).unwrap();
        assert!(grid.is_empty());
        assert!(grid.row_capacity() >= 16);
        assert!(grid.buffer.allocated() >= 256);
    }

    #[test]
    fn push_row_appends_at_tail() {
        let mut grid: RaggedVec<i32> = RaggedVec::with_rows(5).unwrap();
        grid.push_row([7, 8, 9]);
        assert_eq!(grid.row_count(), 6);
        assert_eq!(&grid[5], &[7, 8, 9]);
        assert_eq!(grid.span(5).unwrap(), RowSpan::new(0, 3));
    }

    #[test]
    fn at_checks_row_and_column() {
        let grid = sample();
        assert_eq!(grid.at(1, 1), Ok(&22));
        assert_eq!(
            grid.at(4, 0),
            Err(RaggedError::RowOutOfRange {
                index: 4,
                row_count: 4
            })
        );
        assert_eq!(
            grid.at(2, 0),
            Err(RaggedError::ElementOutOfRange {
                row: 2,
                index: 0,
                len: 0
            })
        );
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn index_operators_address_rows_and_elements() {
        let mut grid = sample();
        grid[(0, 1)] = 5;
        grid[3][0] = 9;
        assert_eq!(&grid[0], &[21, 5, 21]);
        assert_eq!(grid[(3, 0)], 9);
    }

    #[test]
    #[should_panic]
    fn index_past_last_row_panics() {
        let grid = sample();
        let _ = &grid[4];
    }

    #[test]
    fn last_row_mut_edits_final_row() {
        let mut grid = sample();
        grid.last_row_mut().unwrap().push(25);
        assert_eq!(&grid[3], &[24, 25]);
        let mut empty: RaggedVec<i32> = RaggedVec::new();
        assert!(empty.last_row_mut().is_none());
    }

    #[test]
    fn insert_row_splices_sequence_only() {
        let mut grid = sample();
        let before: Vec<RowSpan> = grid.spans().collect();
        assert_eq!(grid.insert_row(1, [5, 5]), Ok(1));
        assert_eq!(&grid[1], &[5, 5]);
        assert_eq!(grid.span(1).unwrap().start, 6);
        assert_eq!(grid.span(0).unwrap(), before[0]);
        assert_eq!(grid.span(2).unwrap(), before[1]);
    }

    #[test]
    fn insert_row_past_end_fails_without_mutation() {
        let mut grid = sample();
        let err = grid.insert_row(5, [1]).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.buffer_len(), 6);
    }

    #[test]
    fn insert_rows_keeps_order_and_reverses_placement() {
        let mut grid = sample();
        grid.insert_rows(2, vec![vec![1], vec![2, 2], vec![3, 3, 3]])
            .unwrap();
        assert_eq!(&grid[2], &[1]);
        assert_eq!(&grid[3], &[2, 2]);
        assert_eq!(&grid[4], &[3, 3, 3]);
        // Last row is inserted first, so it sits lowest in the buffer.
        assert!(grid.span(4).unwrap().start < grid.span(2).unwrap().start);
        assert_eq!(grid.row_count(), 7);
    }

    #[test]
    fn erase_rows_leaves_dead_space() {
        let mut grid = sample();
        assert_eq!(grid.erase_rows(0..2), Ok(0));
        assert_eq!(grid.row_count(), 2);
        assert_eq!(&grid[1], &[24]);
        assert_eq!(grid.buffer_len(), 6);
        assert_eq!(grid.element_count(), 1);
    }

    #[test]
    fn erase_rows_validates_range() {
        let mut grid = sample();
        assert_eq!(
            grid.erase_rows(2..5),
            Err(RaggedError::RowOutOfRange {
                index: 5,
                row_count: 4
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = grid.erase_rows(3..1);
        assert_eq!(reversed, Err(RaggedError::InvalidRange { start: 3, end: 1 }));
        assert_eq!(grid.erase_rows(2..2), Ok(2));
        assert_eq!(grid.row_count(), 4);
    }

    #[test]
    fn erase_row_rejects_past_end() {
        let mut grid = sample();
        assert!(grid.erase_row(4).unwrap_err().is_out_of_range());
        assert_eq!(grid.erase_row(3), Ok(3));
        assert_eq!(grid.row_count(), 3);
    }

    #[test]
    fn pop_row_returns_elements() {
        let mut grid = sample();
        assert_eq!(grid.pop_row(), Some(vec![24]));
        assert_eq!(grid.pop_row(), Some(vec![]));
        assert_eq!(grid.row_count(), 2);
        let mut empty: RaggedVec<i32> = RaggedVec::new();
        assert_eq!(empty.pop_row(), None);
    }

    #[test]
    fn resize_rows_grows_with_empty_rows_and_truncates() {
        let mut grid = sample();
        grid.resize_rows(6);
        assert_eq!(grid.row_count(), 6);
        assert!(grid[5].is_empty());
        grid.resize_rows(1);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.element_count(), 3);
        assert_eq!(grid.buffer_len(), 6);
    }

    #[test]
    fn resize_rows_with_copies_template() {
        let mut grid = sample();
        grid.resize_rows_with(6, &[1, 2]);
        assert_eq!(&grid[4], &[1, 2]);
        assert_eq!(&grid[5], &[1, 2]);
        assert_ne!(grid.span(4).unwrap().start, grid.span(5).unwrap().start);
        assert_eq!(grid.buffer_len(), 10);
    }

    #[test]
    fn clear_drops_everything() {
        let mut grid = sample();
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.buffer_len(), 0);
    }

    #[test]
    fn equality_ignores_layout() {
        let a = sample();
        let mut b = RaggedVec::new();
        b.push_row([21, 21, 21]);
        b.push_row([9, 22, 22]);
        b.push_row(Vec::new());
        b.push_row([24]);
        b.row_mut(1).unwrap().remove(0).unwrap();
        assert_ne!(a.spans().collect::<Vec<_>>(), b.spans().collect::<Vec<_>>());
        assert_eq!(a, b);
    }

    #[test]
    fn clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.row_mut(0).unwrap().push(99);
        assert_eq!(original[0].len(), 3);
        assert_eq!(copy[0].len(), 4);
        assert_eq!(&copy[1], &original[1]);
    }

    #[test]
    fn moved_structure_keeps_addressing() {
        let grid = sample();
        let moved = grid;
        assert_eq!(&moved[0], &[21, 21, 21]);
        assert_eq!(moved.to_nested()[3], vec![24]);
    }

    #[test]
    fn debug_prints_rows_as_lists() {
        let grid = RaggedVec::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(format!("{grid:?}"), "[[1, 2], [3]]");
    }

    #[test]
    fn from_iterator_builds_rows() {
        let grid: RaggedVec<usize> = (1..4).map(|n| 0..n).collect();
        assert_eq!(grid.to_nested(), vec![vec![0], vec![0, 1], vec![0, 1, 2]]);
        let lens: Vec<usize> = (&grid).into_iter().map(<[usize]>::len).collect();
        assert_eq!(lens, vec![1, 2, 3]);
    }

    #[test]
    fn resolve_range_handles_all_bound_kinds() {
        let oor = |index| RaggedError::RowOutOfRange {
            index,
            row_count: 5,
        };
        assert_eq!(resolve_range(&(..), 5, oor), Ok(0..5));
        assert_eq!(resolve_range(&(1..=2), 5, oor), Ok(1..3));
        assert_eq!(resolve_range(&(3..), 5, oor), Ok(3..5));
        assert_eq!(
            resolve_range(&(..=5), 5, oor),
            Err(RaggedError::RowOutOfRange {
                index: 6,
                row_count: 5
            })
        );
        let excluded = (Bound::Excluded(1), Bound::Excluded(4));
        assert_eq!(resolve_range(&excluded, 5, oor), Ok(2..4));
    }
}
