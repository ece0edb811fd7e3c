//! Row views.
//!
//! Row descriptors hold plain offsets; only these views borrow the owner.
//! [`Row`] is a read-only snapshot of one row's descriptor and elements;
//! [`RowMut`] pairs an exclusive borrow of the [`RaggedVec`] with a row
//! index and forwards every mutation to it, so the buffer manager stays
//! the only code that moves elements.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Deref, DerefMut, RangeBounds};
use std::slice;

use ragged_core::{RaggedError, RowSpan};

use crate::ragged::RaggedVec;

/// A read-only view of one row.
///
/// Dereferences to the row's live elements.
pub struct Row<'a, T> {
    index: usize,
    span: RowSpan,
    elements: &'a [T],
}

impl<'a, T> Row<'a, T> {
    pub(crate) fn new(index: usize, span: RowSpan, elements: &'a [T]) -> Self {
        Self {
            index,
            span,
            elements,
        }
    }

    /// Position of this row in the row sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// This row's descriptor.
    pub fn span(&self) -> RowSpan {
        self.span
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.span.len
    }

    /// Whether the row has no live elements.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Number of reserved slots.
    pub fn capacity(&self) -> usize {
        self.span.capacity
    }

    /// Buffer offset of the row's first slot. Diagnostic only.
    pub fn start_offset(&self) -> usize {
        self.span.start
    }

    /// The live elements, borrowed for the lifetime of the structure.
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }

    /// Bounds-checked access to element `index`.
    pub fn at(&self, index: usize) -> Result<&'a T, RaggedError> {
        self.elements
            .get(index)
            .ok_or(RaggedError::ElementOutOfRange {
                row: self.index,
                index,
                len: self.span.len,
            })
    }
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<T> Deref for Row<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for Row<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements).finish()
    }
}

impl<'a, T> IntoIterator for Row<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A mutable view of one row.
///
/// Holds the owning [`RaggedVec`] exclusively for its lifetime, which
/// keeps the row index valid and rules out stale element references
/// across buffer growth. Dereferences to the row's live elements.
pub struct RowMut<'a, T> {
    owner: &'a mut RaggedVec<T>,
    index: usize,
}

impl<'a, T> RowMut<'a, T> {
    pub(crate) fn new(owner: &'a mut RaggedVec<T>, index: usize) -> Self {
        Self { owner, index }
    }

    /// Position of this row in the row sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// This row's current descriptor.
    pub fn span(&self) -> RowSpan {
        self.owner.rows[self.index]
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.span().len
    }

    /// Whether the row has no live elements.
    pub fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    /// Number of reserved slots.
    pub fn capacity(&self) -> usize {
        self.span().capacity
    }

    /// Buffer offset of the row's first slot. Diagnostic only.
    pub fn start_offset(&self) -> usize {
        self.span().start
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        self.owner.row_slice(self.index)
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.owner.row_slice_mut(self.index)
    }

    /// Bounds-checked access to element `index`.
    pub fn at(&self, index: usize) -> Result<&T, RaggedError> {
        self.owner.at(self.index, index)
    }

    /// Bounds-checked mutable access to element `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, RaggedError> {
        self.owner.at_mut(self.index, index)
    }

    /// Downgrade to a read-only view that borrows for the full lifetime.
    pub fn into_row(self) -> Row<'a, T> {
        let owner: &'a RaggedVec<T> = self.owner;
        owner.row_view(self.index)
    }
}

impl<T: Default> RowMut<'_, T> {
    /// Grow the reserved span to exactly `capacity` slots.
    ///
    /// No-op if the row already has that much capacity. Otherwise the span
    /// is extended in place when the row is the tail occupant, or the row
    /// is relocated to a fresh span at the buffer tail.
    pub fn reserve(&mut self, capacity: usize) {
        self.owner.row_reserve(self.index, capacity);
    }

    /// Append one element.
    pub fn push(&mut self, value: T) {
        self.owner.row_push(self.index, value);
    }

    /// Remove and return the last element. Capacity is kept.
    pub fn pop(&mut self) -> Option<T> {
        self.owner.row_pop(self.index)
    }

    /// Insert `value` at offset `pos`, returning `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::ElementOutOfRange`] if `pos > len()`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, RaggedError> {
        self.owner.row_insert(self.index, pos, [value])
    }

    /// Insert every item of `items` at offset `pos`, returning the offset of
    /// the first inserted element.
    ///
    /// An empty iterator is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::ElementOutOfRange`] if `pos > len()`.
    pub fn insert_iter<I: IntoIterator<Item = T>>(
        &mut self,
        pos: usize,
        items: I,
    ) -> Result<usize, RaggedError> {
        self.owner.row_insert(self.index, pos, items)
    }

    /// Remove the elements in `range`, returning the offset that now holds
    /// the first element after the removed range.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::ElementOutOfRange`] if an endpoint exceeds
    /// `len()`, or [`RaggedError::InvalidRange`] if the end precedes the
    /// start.
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, RaggedError> {
        self.owner.row_erase(self.index, range)
    }

    /// Remove and return the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::ElementOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, RaggedError> {
        self.owner.row_remove(self.index, index)
    }

    /// Resize to `len` elements, filling new slots with clones of `value`.
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.owner.row_resize_with(self.index, len, || value.clone());
    }

    /// Resize to `len` elements, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, len: usize) {
        self.owner.row_resize_with(self.index, len, T::default);
    }

    /// Resize to `len` elements, filling new slots from `fill`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, fill: F) {
        self.owner.row_resize_with(self.index, len, fill);
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.owner.row_clear(self.index);
    }

    /// Give up spare capacity. The released slots become dead space.
    pub fn shrink_to_fit(&mut self) {
        self.owner.row_shrink_to_fit(self.index);
    }
}

impl<T: Default> Extend<T> for RowMut<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let end = self.len();
        self.owner.row_splice(self.index, end, items);
    }
}

impl<T> Deref for RowMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for RowMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for RowMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Iterator over each row's live elements, in row order.
///
/// Created by [`RaggedVec::rows_as_slices`].
pub struct RowSlices<'a, T> {
    buffer: &'a [T],
    spans: slice::Iter<'a, RowSpan>,
}

impl<'a, T> RowSlices<'a, T> {
    pub(crate) fn new(buffer: &'a [T], spans: &'a [RowSpan]) -> Self {
        Self {
            buffer,
            spans: spans.iter(),
        }
    }
}

impl<'a, T> Iterator for RowSlices<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        let span = self.spans.next()?;
        Some(&self.buffer[span.live()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl<T> DoubleEndedIterator for RowSlices<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let span = self.spans.next_back()?;
        Some(&self.buffer[span.live()])
    }
}

impl<T> ExactSizeIterator for RowSlices<'_, T> {}

impl<T> FusedIterator for RowSlices<'_, T> {}
