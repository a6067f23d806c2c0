//! Language constants shared across the crate.

use std::path::Path;

/// Content type name the classifier is registered under.
pub const CONTENT_TYPE: &str = "cobra";

/// File extension (without the dot) of Cobra source files.
pub const FILE_EXTENSION: &str = "cobra";

/// Delimiter that opens and closes a multi-line comment (three double quotes).
pub const COMMENT_DELIMITER: &str = "\"\"\"";

/// Number of spaces that make up one level of space-based indentation.
pub const SPACES_PER_INDENT: usize = 4;

/// Returns true if `path` names a Cobra source file.
///
/// The extension comparison is ASCII case-insensitive, so `Main.COBRA` matches.
pub fn is_cobra_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
}
