//! IDE features: lexical classification for the editor's rendering layer.
//!
//! This module turns revisions of a Cobra document into classified spans
//! (keyword, comment, string, class name, indent error).
//!
//! ## Design Principles
//!
//! 1. **Whole-revision work is cached**: multi-line comments are found once per
//!    revision and shared through [`CommentCache`]
//! 2. **Ranges are re-tokenized**: each request lexes only the requested text
//! 3. **Nothing fails**: tokenizer errors degrade highlighting, never the caller
//!
//! ## Usage
//!
//! The recommended way to use this module is through `ClassifierHost`:
//!
//! ```ignore
//! use vcobra::ide::ClassifierHost;
//!
//! let mut host = ClassifierHost::default();
//! let id = host.open(Path::new("hello.cobra")).unwrap();
//!
//! let spans = host.classify(&snapshot, visible_range);
//! ```

mod classification;
mod classifier;
mod comments;
mod host;
mod indent;
mod styles;

pub use classification::{ClassificationKind, ClassifiedSpan};
pub use classifier::{
    ClassifierConfig, RangeClassifier, classify_tokens, remove_spans_in_comments,
};
pub use comments::{CacheStats, CommentCache, comments_intersecting, find_comments};
pub use host::ClassifierHost;
pub use indent::indent_error_spans;
pub use styles::{ClassificationStyles, LinePattern, Rgb, Style, Underline};
