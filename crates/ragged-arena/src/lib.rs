//! Shared-buffer storage for jagged two-dimensional arrays.
//!
//! A [`RaggedVec`] stores every row's elements in one contiguous
//! [`SharedBuffer`]. Each row is a [`RowSpan`] (start offset, length,
//! reserved capacity) into that buffer, so rows of different lengths live
//! side by side without a separate allocation per row.
//!
//! # Architecture
//!
//! ```text
//! RaggedVec (buffer manager)
//! ├── SharedBuffer<T>      one Vec<T>: live, spare and dead slots
//! └── Vec<RowSpan>         row order; independent of buffer placement
//!
//! Row / RowMut             views borrowing the RaggedVec; RowMut
//!                          forwards every edit to the manager
//! ```
//!
//! # Growth
//!
//! - **In span:** spare capacity absorbs the new elements.
//! - **Tail growth:** a row whose reservation ends at the buffer end
//!   extends in place.
//! - **Relocation:** any other row moves to fresh slots at the buffer
//!   tail; its old slots become dead space.
//!
//! Dead space is only reclaimed by [`RaggedVec::compact`].
//!
//! # Element requirements
//!
//! Unused slots hold `T::default()`, so every operation that can leave a
//! slot vacant requires `T: Default`. Read access has no bounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod compact;
pub mod config;
mod layout;
pub mod ragged;
pub mod row;

// Public re-exports for the primary API surface.
pub use buffer::SharedBuffer;
pub use compact::LayoutStats;
pub use config::RaggedConfig;
pub use ragged::RaggedVec;
pub use ragged_core::{RaggedError, RowSpan};
pub use row::{Row, RowMut, RowSlices};
