//! Test utilities for Ragged development.
//!
//! Provides a `Vec<Vec<_>>` reference model ([`ModelRows`]), a scripted
//! operation type ([`RowOp`]) that drives the model and a real
//! [`RaggedVec`] side by side, and [`assert_layout`], which checks the
//! buffer-level invariants a `RaggedVec` must keep after every operation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod ops;

pub use model::ModelRows;
pub use ops::{arb_row_op, RowOp};

use ragged_arena::RaggedVec;
use ragged_core::RowSpan;

/// Assert the structural invariants of `grid`'s buffer layout.
///
/// - Every row's reserved span lies inside the buffer.
/// - Every row's length is at most its capacity.
/// - No two rows reserve a common slot.
/// - The layout statistics add up to the buffer length.
///
/// # Panics
///
/// Panics with a description of the first violated invariant.
pub fn assert_layout<T>(grid: &RaggedVec<T>) {
    let buffer_len = grid.buffer_len();
    let mut spans: Vec<(usize, RowSpan)> = grid.spans().enumerate().collect();
    for (row, span) in &spans {
        assert!(
            span.len <= span.capacity,
            "row {row}: {span} holds more elements than it reserves"
        );
        assert!(
            span.reserved_end() <= buffer_len,
            "row {row}: {span} extends past buffer length {buffer_len}"
        );
    }

    spans.retain(|(_, span)| span.capacity > 0);
    spans.sort_by_key(|(_, span)| span.start);
    for pair in spans.windows(2) {
        let (a_row, a) = pair[0];
        let (b_row, b) = pair[1];
        assert!(
            !a.overlaps(&b),
            "row {a_row} {a} overlaps row {b_row} {b}"
        );
    }

    let stats = grid.stats();
    assert_eq!(stats.rows, grid.row_count());
    assert_eq!(stats.live, grid.element_count());
    assert_eq!(
        stats.live + stats.spare + stats.dead,
        buffer_len,
        "slot accounting does not cover the buffer: {stats:?}"
    );
}

/// Assert that `grid` is packed: rows back to back in row order with no
/// spare or dead slots.
pub fn assert_compacted<T>(grid: &RaggedVec<T>) {
    let mut expected_start = 0;
    for (row, span) in grid.spans().enumerate() {
        assert_eq!(
            span,
            RowSpan::new(expected_start, span.len),
            "row {row} is not packed"
        );
        expected_start += span.len;
    }
    assert_eq!(grid.buffer_len(), expected_start);
}
