//! # vcobra-base
//!
//! Lexical classification (syntax highlighting) for the Cobra language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Range classification, comment cache, styles, per-document host
//!   ↓
//! parser    → Tokenizer contract, logos-based Cobra tokenizer, resilient adapter
//!   ↓
//! base      → Primitives (DocumentId, Revision, snapshots, TextRange)
//! ```
//!
//! ## Usage
//!
//! ```
//! use vcobra::base::{Document, DocumentId, TextRange, TextSize};
//! use vcobra::ide::{ClassificationKind, RangeClassifier};
//!
//! let doc = Document::new(DocumentId(0), "\"\"\"doc\"\"\"\nclass Foo\n");
//! let mut classifier = RangeClassifier::default();
//!
//! let whole = TextRange::up_to(TextSize::of(doc.text()));
//! let spans = classifier.classify(&doc.snapshot(), whole);
//!
//! assert!(spans.iter().any(|s| s.kind == ClassificationKind::Keyword));
//! assert!(spans.iter().any(|s| s.kind == ClassificationKind::ClassName));
//! assert!(spans.iter().any(|s| s.kind == ClassificationKind::Comment));
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → ide)
// ============================================================================

/// Foundation types: DocumentId, Revision, snapshots, TextRange
pub mod base;

/// Parser: tokenizer contract, logos lexer, resilient adapter
pub mod parser;

/// IDE features: range classification, comment cache, styles
pub mod ide;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{Document, DocumentId, Revision, Snapshot, TextRange, TextSize, TextSnapshot};
