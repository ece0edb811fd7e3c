//! Ragged: jagged two-dimensional arrays backed by one shared buffer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Ragged sub-crates. For most users, adding `ragged` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ragged::prelude::*;
//!
//! // Five empty rows, then a sixth built from a slice.
//! let mut grid: RaggedVec<f64> = RaggedVec::with_rows(5).unwrap();
//! grid.push_row([7.0, 8.0, 9.0]);
//! assert_eq!(&grid[5], &[7.0, 8.0, 9.0]);
//!
//! // Rows grow independently; a full row moves to the buffer tail.
//! grid.row_mut(0).unwrap().push(1.0);
//! grid.row_mut(0).unwrap().insert_iter(0, [-2.0, -1.0]).unwrap();
//! assert_eq!(&grid[0], &[-2.0, -1.0, 1.0]);
//!
//! // Edits leave dead slots behind until the buffer is compacted.
//! grid.row_mut(5).unwrap().erase(..2).unwrap();
//! let before = grid.stats();
//! grid.compact();
//! assert_eq!(grid.buffer_len(), grid.element_count());
//! assert!(grid.stats().buffer_len <= before.buffer_len);
//!
//! // Out-of-range access is an error, not a panic.
//! assert!(matches!(grid.row(6), Err(RaggedError::RowOutOfRange { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `ragged-arena` | `RaggedVec`, row views, shared buffer, compaction |
//! | [`types`] | `ragged-core` | `RowSpan` descriptors and `RaggedError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared-buffer storage and row editing (`ragged-arena`).
///
/// [`arena::RaggedVec`] is the container; [`arena::Row`] and
/// [`arena::RowMut`] are the per-row views. Both are also available in the
/// [`prelude`].
pub use ragged_arena as arena;

/// Row descriptors and errors (`ragged-core`).
pub use ragged_core as types;

/// Common imports for typical Ragged usage.
///
/// ```rust
/// use ragged::prelude::*;
/// ```
pub mod prelude {
    // Container and views
    pub use ragged_arena::{RaggedVec, Row, RowMut};

    // Configuration and accounting
    pub use ragged_arena::{LayoutStats, RaggedConfig};

    // Core types
    pub use ragged_core::{RaggedError, RowSpan};
}
