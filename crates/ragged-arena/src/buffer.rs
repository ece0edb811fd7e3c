//! The shared element buffer.
//!
//! A [`SharedBuffer`] is a single growable `Vec<T>` that backs every row of
//! a `RaggedVec`. It only knows about slots: which slots belong to which
//! row is tracked by the row sequence. Slots that hold no live element
//! (spare capacity and dead space) contain `T::default()`.

use std::ops::Range;

/// Contiguous storage for all rows' elements.
///
/// Growth is delegated to `Vec`'s amortized doubling. Elements are moved
/// between slots with [`SharedBuffer::shift_descending`] and
/// [`SharedBuffer::shift_ascending`], which leave `T::default()` behind in
/// every vacated source slot.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer<T> {
    data: Vec<T>,
}

impl<T> SharedBuffer<T> {
    /// Create an empty buffer without allocating.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots (live, spare and dead).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has no slots.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of slots the current allocation can hold without growing.
    pub fn allocated(&self) -> usize {
        self.data.capacity()
    }

    /// All slots as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A sub-range of slots.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past the end of the buffer.
    pub fn slice(&self, range: Range<usize>) -> &[T] {
        &self.data[range]
    }

    /// A mutable sub-range of slots.
    ///
    /// # Panics
    ///
    /// Panics if `range` extends past the end of the buffer.
    pub fn slice_mut(&mut self, range: Range<usize>) -> &mut [T] {
        &mut self.data[range]
    }

    /// Overwrite slot `index`, dropping its previous value.
    pub fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    /// Append one slot holding `value`.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Append every item of `items`, returning how many slots were added.
    pub fn extend_from<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let before = self.data.len();
        self.data.extend(items);
        self.data.len() - before
    }

    /// Append `count` slots, each initialised by `fill`.
    pub fn extend_with<F: FnMut() -> T>(&mut self, count: usize, fill: F) {
        let new_len = self.data.len() + count;
        self.data.resize_with(new_len, fill);
    }

    /// Overwrite every slot in `range` with values produced by `fill`.
    pub fn fill_with<F: FnMut() -> T>(&mut self, range: Range<usize>, fill: F) {
        self.data[range].fill_with(fill);
    }

    /// Drop every slot, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consume the buffer, returning every slot.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Default> SharedBuffer<T> {
    /// Append `count` default-valued slots.
    pub fn extend_default(&mut self, count: usize) {
        self.extend_with(count, T::default);
    }

    /// Move the value out of slot `index`, leaving `T::default()` behind.
    pub fn take(&mut self, index: usize) -> T {
        std::mem::take(&mut self.data[index])
    }

    /// Drop the values in `range`, leaving `T::default()` in each slot.
    pub fn release(&mut self, range: Range<usize>) {
        for slot in &mut self.data[range] {
            drop(std::mem::take(slot));
        }
    }

    /// Move `src` so that it starts at `dst`, walking from the high end down.
    ///
    /// Correct for overlapping ranges as long as `dst >= src.start`; used
    /// when content moves rightward (growth, insertion, relocation).
    pub fn shift_descending(&mut self, src: Range<usize>, dst: usize) {
        debug_assert!(dst >= src.start, "descending shift must move rightward");
        debug_assert!(dst + src.len() <= self.data.len());
        if dst == src.start {
            return;
        }
        for i in (0..src.len()).rev() {
            self.data[dst + i] = std::mem::take(&mut self.data[src.start + i]);
        }
    }

    /// Move `src` so that it starts at `dst`, walking from the low end up.
    ///
    /// Correct for overlapping ranges as long as `dst <= src.start`; used
    /// when content moves leftward (erase, compaction).
    pub fn shift_ascending(&mut self, src: Range<usize>, dst: usize) {
        debug_assert!(dst <= src.start, "ascending shift must move leftward");
        debug_assert!(src.end <= self.data.len());
        if dst == src.start {
            return;
        }
        for i in 0..src.len() {
            self.data[dst + i] = std::mem::take(&mut self.data[src.start + i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(values: &[i32]) -> SharedBuffer<i32> {
        let mut buf = SharedBuffer::new();
        buf.extend_from(values.iter().copied());
        buf
    }

    #[test]
    fn extend_default_appends_zeroed_slots() {
        let mut buf = buffer_of(&[1, 2]);
        buf.extend_default(3);
        assert_eq!(buf.as_slice(), &[1, 2, 0, 0, 0]);
    }

    #[test]
    fn extend_with_uses_fill_value() {
        let mut buf = SharedBuffer::new();
        buf.extend_with(2, || 7);
        assert_eq!(buf.as_slice(), &[7, 7]);
    }

    #[test]
    fn shift_descending_handles_overlap() {
        let mut buf = buffer_of(&[1, 2, 3, 0, 0]);
        buf.shift_descending(0..3, 2);
        assert_eq!(buf.as_slice(), &[0, 0, 1, 2, 3]);
    }

    #[test]
    fn shift_ascending_handles_overlap() {
        let mut buf = buffer_of(&[0, 0, 1, 2, 3]);
        buf.shift_ascending(2..5, 0);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 0, 0]);
    }

    #[test]
    fn shift_to_same_position_is_noop() {
        let mut buf = buffer_of(&[4, 5, 6]);
        buf.shift_descending(0..3, 0);
        buf.shift_ascending(0..3, 0);
        assert_eq!(buf.as_slice(), &[4, 5, 6]);
    }

    #[test]
    fn empty_shift_moves_nothing() {
        let mut buf = buffer_of(&[4, 5, 6]);
        buf.shift_descending(1..1, 2);
        assert_eq!(buf.as_slice(), &[4, 5, 6]);
    }

    #[test]
    fn take_and_release_leave_defaults() {
        let mut buf = buffer_of(&[9, 8, 7, 6]);
        assert_eq!(buf.take(0), 9);
        buf.release(2..4);
        assert_eq!(buf.as_slice(), &[0, 8, 0, 0]);
    }

    #[test]
    fn release_drops_owned_values() {
        let mut buf: SharedBuffer<String> = SharedBuffer::new();
        buf.extend_from(["a".to_string(), "b".to_string()]);
        buf.release(0..1);
        assert_eq!(buf.as_slice(), &[String::new(), "b".to_string()]);
    }

    #[test]
    fn fill_with_overwrites_range() {
        let mut buf = buffer_of(&[1, 2, 3, 4]);
        buf.fill_with(1..3, || 0);
        assert_eq!(buf.as_slice(), &[1, 0, 0, 4]);
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut buf: SharedBuffer<i32> = SharedBuffer::with_capacity(16);
        buf.extend_default(4);
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.allocated() >= 16);
    }

    #[test]
    fn into_vec_returns_every_slot() {
        let mut buf = buffer_of(&[3, 4]);
        buf.extend_default(2);
        assert_eq!(buf.into_vec(), vec![3, 4, 0, 0]);
    }
}
