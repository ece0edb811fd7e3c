//! Error types for the Ragged workspace.
//!
//! Every fallible operation is a contract check performed before the
//! shared buffer is touched, so an `Err` always leaves the structure in
//! its previous state.

use std::error::Error;
use std::fmt;

/// Errors returned by `RaggedVec` construction, row and element access,
/// and range-based mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaggedError {
    /// A shaped constructor was given a zero row or column count.
    InvalidShape {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns, if the constructor takes one.
        cols: Option<usize>,
    },
    /// A row index or row-sequence position past the valid bound.
    RowOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of rows at the time of the call.
        row_count: usize,
    },
    /// An element offset or range endpoint past the end of a row.
    ElementOutOfRange {
        /// Row the access was addressed to.
        row: usize,
        /// The offending offset within the row.
        index: usize,
        /// Length of the row at the time of the call.
        len: usize,
    },
    /// A range whose end precedes its start.
    InvalidRange {
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        end: usize,
    },
    /// A capacity hint that cannot be represented as an allocation.
    CapacityOverflow {
        /// Number of elements requested.
        requested: usize,
    },
}

impl RaggedError {
    /// Whether this error reports an index outside a row or the row sequence.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::RowOutOfRange { .. } | Self::ElementOutOfRange { .. }
        )
    }
}

impl fmt::Display for RaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { rows, cols: None } => {
                write!(f, "invalid shape: row count {rows} must be non-zero")
            }
            Self::InvalidShape {
                rows,
                cols: Some(cols),
            } => {
                write!(
                    f,
                    "invalid shape: row count {rows} and column count {cols} must be non-zero"
                )
            }
            Self::RowOutOfRange { index, row_count } => {
                write!(f, "row index {index} out of range for {row_count} rows")
            }
            Self::ElementOutOfRange { row, index, len } => {
                write!(
                    f,
                    "element offset {index} out of range for row {row} of length {len}"
                )
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: end {end} precedes start {start}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements requested")
            }
        }
    }
}

impl Error for RaggedError {}
