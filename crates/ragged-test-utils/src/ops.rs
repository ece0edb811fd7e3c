//! Scripted operations applied to both the model and a real structure.

use proptest::prelude::*;
use ragged_arena::RaggedVec;
use ragged_core::RaggedError;

use crate::model::ModelRows;

/// One operation on a jagged array.
///
/// Indices are not constrained to the current shape, so applying an
/// operation may legitimately fail; the model and the real structure must
/// then fail identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOp {
    PushRow(Vec<i64>),
    InsertRow { pos: usize, items: Vec<i64> },
    EraseRows { start: usize, end: usize },
    PopRow,
    ResizeRows(usize),
    Push { row: usize, value: i64 },
    Pop { row: usize },
    Insert { row: usize, pos: usize, items: Vec<i64> },
    Erase { row: usize, start: usize, end: usize },
    Resize { row: usize, len: usize, value: i64 },
    Reserve { row: usize, capacity: usize },
    Clear { row: usize },
    ShrinkToFit { row: usize },
    Compact,
}

/// What an operation returned: a position, removed values, or nothing.
pub type Outcome = Result<Vec<i64>, RaggedError>;

impl RowOp {
    /// Apply to the real structure.
    pub fn apply(&self, grid: &mut RaggedVec<i64>) -> Outcome {
        match self {
            RowOp::PushRow(items) => {
                grid.push_row(items.iter().copied());
                Ok(Vec::new())
            }
            RowOp::InsertRow { pos, items } => grid
                .insert_row(*pos, items.iter().copied())
                .map(|at| vec![at as i64]),
            RowOp::EraseRows { start, end } => {
                grid.erase_rows(*start..*end).map(|at| vec![at as i64])
            }
            RowOp::PopRow => Ok(grid.pop_row().unwrap_or_default()),
            RowOp::ResizeRows(rows) => {
                grid.resize_rows(*rows);
                Ok(Vec::new())
            }
            RowOp::Push { row, value } => {
                grid.row_mut(*row)?.push(*value);
                Ok(Vec::new())
            }
            RowOp::Pop { row } => Ok(grid.row_mut(*row)?.pop().into_iter().collect()),
            RowOp::Insert { row, pos, items } => grid
                .row_mut(*row)?
                .insert_iter(*pos, items.iter().copied())
                .map(|at| vec![at as i64]),
            RowOp::Erase { row, start, end } => grid
                .row_mut(*row)?
                .erase(*start..*end)
                .map(|at| vec![at as i64]),
            RowOp::Resize { row, len, value } => {
                grid.row_mut(*row)?.resize(*len, *value);
                Ok(Vec::new())
            }
            RowOp::Reserve { row, capacity } => {
                grid.row_mut(*row)?.reserve(*capacity);
                Ok(Vec::new())
            }
            RowOp::Clear { row } => {
                grid.row_mut(*row)?.clear();
                Ok(Vec::new())
            }
            RowOp::ShrinkToFit { row } => {
                grid.row_mut(*row)?.shrink_to_fit();
                Ok(Vec::new())
            }
            RowOp::Compact => {
                grid.compact();
                Ok(Vec::new())
            }
        }
    }

    /// Apply to the reference model.
    pub fn apply_model(&self, model: &mut ModelRows) -> Outcome {
        match self {
            RowOp::PushRow(items) => {
                model.rows.push(items.clone());
                Ok(Vec::new())
            }
            RowOp::InsertRow { pos, items } => model
                .insert_row(*pos, items.clone())
                .map(|at| vec![at as i64]),
            RowOp::EraseRows { start, end } => {
                model.erase_rows(*start, *end).map(|at| vec![at as i64])
            }
            RowOp::PopRow => Ok(model.rows.pop().unwrap_or_default()),
            RowOp::ResizeRows(rows) => {
                model.rows.resize(*rows, Vec::new());
                Ok(Vec::new())
            }
            RowOp::Push { row, value } => {
                model.row_mut(*row)?.push(*value);
                Ok(Vec::new())
            }
            RowOp::Pop { row } => Ok(model.row_mut(*row)?.pop().into_iter().collect()),
            RowOp::Insert { row, pos, items } => {
                model.insert(*row, *pos, items).map(|at| vec![at as i64])
            }
            RowOp::Erase { row, start, end } => {
                model.erase(*row, *start, *end).map(|at| vec![at as i64])
            }
            RowOp::Resize { row, len, value } => {
                model.row_mut(*row)?.resize(*len, *value);
                Ok(Vec::new())
            }
            RowOp::Reserve { row, .. } | RowOp::Clear { row } | RowOp::ShrinkToFit { row } => {
                let target = model.row_mut(*row)?;
                if matches!(self, RowOp::Clear { .. }) {
                    target.clear();
                }
                Ok(Vec::new())
            }
            RowOp::Compact => Ok(Vec::new()),
        }
    }
}

fn arb_items() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-100i64..100, 0..6)
}

/// Operations over a structure of up to about eight rows.
///
/// Row and element indices run slightly past typical sizes so that
/// out-of-range failures are exercised too.
pub fn arb_row_op() -> impl Strategy<Value = RowOp> {
    let row = 0usize..8;
    prop_oneof![
        arb_items().prop_map(RowOp::PushRow),
        (0usize..8, arb_items()).prop_map(|(pos, items)| RowOp::InsertRow { pos, items }),
        (0usize..8, 0usize..8).prop_map(|(start, end)| RowOp::EraseRows { start, end }),
        Just(RowOp::PopRow),
        (0usize..8).prop_map(RowOp::ResizeRows),
        (row.clone(), -100i64..100).prop_map(|(row, value)| RowOp::Push { row, value }),
        row.clone().prop_map(|row| RowOp::Pop { row }),
        (row.clone(), 0usize..10, arb_items())
            .prop_map(|(row, pos, items)| RowOp::Insert { row, pos, items }),
        (row.clone(), 0usize..10, 0usize..10)
            .prop_map(|(row, start, end)| RowOp::Erase { row, start, end }),
        (row.clone(), 0usize..12, -100i64..100)
            .prop_map(|(row, len, value)| RowOp::Resize { row, len, value }),
        (row.clone(), 0usize..16).prop_map(|(row, capacity)| RowOp::Reserve { row, capacity }),
        row.clone().prop_map(|row| RowOp::Clear { row }),
        row.prop_map(|row| RowOp::ShrinkToFit { row }),
        Just(RowOp::Compact),
    ]
}
