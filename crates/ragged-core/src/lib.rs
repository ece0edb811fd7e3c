//! Core types for the Ragged jagged-array workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the row descriptor ([`RowSpan`]) and the error type shared by every
//! other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod span;

pub use error::RaggedError;
pub use span::RowSpan;
