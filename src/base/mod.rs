//! Foundation types for the vcobra classifier.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`DocumentId`], [`Revision`] - Identity of one immutable text version
//! - [`TextSnapshot`], [`Snapshot`], [`Document`] - Text access for classification
//! - [`TextRange`], [`TextSize`] - Half-open byte ranges into a revision's text
//! - Domain constants (file extension, comment delimiter)
//!
//! This module has NO dependencies on other vcobra modules.

pub mod constants;
mod document;

pub use document::{Document, DocumentId, Revision, Snapshot, TextSnapshot};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
