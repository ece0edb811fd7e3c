//! A `Vec<Vec<i64>>` reference model.
//!
//! Mirrors the observable behaviour of `RaggedVec<i64>`: the same row
//! contents, the same return values and the same errors in the same
//! precedence. Layout (offsets, capacity, dead space) is not modelled.

use ragged_arena::RaggedVec;
use ragged_core::RaggedError;

/// The reference model: one independent `Vec` per row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelRows {
    pub rows: Vec<Vec<i64>>,
}

impl ModelRows {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows: vec![Vec::new(); rows],
        }
    }

    /// Build a real structure holding the same rows.
    pub fn to_ragged(&self) -> RaggedVec<i64> {
        RaggedVec::from(self.rows.clone())
    }

    /// Whether `grid` holds exactly the model's rows.
    pub fn matches(&self, grid: &RaggedVec<i64>) -> bool {
        grid.row_count() == self.rows.len()
            && grid
                .rows_as_slices()
                .zip(&self.rows)
                .all(|(real, model)| real == model.as_slice())
    }

    pub fn element_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Mutable access to one row, failing like `RaggedVec::row_mut`.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut Vec<i64>, RaggedError> {
        let row_count = self.rows.len();
        self.rows
            .get_mut(row)
            .ok_or(RaggedError::RowOutOfRange {
                index: row,
                row_count,
            })
    }

    pub fn insert_row(&mut self, pos: usize, items: Vec<i64>) -> Result<usize, RaggedError> {
        if pos > self.rows.len() {
            return Err(RaggedError::RowOutOfRange {
                index: pos,
                row_count: self.rows.len(),
            });
        }
        self.rows.insert(pos, items);
        Ok(pos)
    }

    pub fn erase_rows(&mut self, start: usize, end: usize) -> Result<usize, RaggedError> {
        let row_count = self.rows.len();
        check_range(start, end, row_count, |index| RaggedError::RowOutOfRange {
            index,
            row_count,
        })?;
        self.rows.drain(start..end);
        Ok(start)
    }

    pub fn insert(&mut self, row: usize, pos: usize, items: &[i64]) -> Result<usize, RaggedError> {
        let target = self.row_mut(row)?;
        if pos > target.len() {
            return Err(RaggedError::ElementOutOfRange {
                row,
                index: pos,
                len: target.len(),
            });
        }
        target.splice(pos..pos, items.iter().copied());
        Ok(pos)
    }

    pub fn erase(&mut self, row: usize, start: usize, end: usize) -> Result<usize, RaggedError> {
        let target = self.row_mut(row)?;
        let len = target.len();
        check_range(start, end, len, |index| RaggedError::ElementOutOfRange {
            row,
            index,
            len,
        })?;
        if start == end {
            return Ok(end);
        }
        target.drain(start..end);
        Ok(start)
    }
}

/// Validate `start..end` against `len` the way `RaggedVec` does: endpoints
/// first, then ordering.
pub fn check_range<E>(start: usize, end: usize, len: usize, out_of_range: E) -> Result<(), RaggedError>
where
    E: Fn(usize) -> RaggedError,
{
    if start > len {
        return Err(out_of_range(start));
    }
    if end > len {
        return Err(out_of_range(end));
    }
    if start > end {
        return Err(RaggedError::InvalidRange { start, end });
    }
    Ok(())
}
