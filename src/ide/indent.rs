//! Detection of mixed tab/space indentation.

use text_size::{TextRange, TextSize};

use super::{ClassificationKind, ClassifiedSpan};

/// Mark every tab/space transition in `text` as an indent error.
///
/// A tab directly followed by a space, or a space directly followed by a tab,
/// marks the second character of the pair. Runs made of a single kind of
/// whitespace are never marked. `base` is the absolute offset of `text`.
///
/// Pairs overlap, so every transition is reported: `" \t x"` marks both the
/// tab and the space after it. A leftmost, non-overlapping match of
/// `\t+ | +\t` would stop at the tab and report one span only.
pub fn indent_error_spans(text: &str, base: TextSize) -> Vec<ClassifiedSpan> {
    text.as_bytes()
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| matches!(pair, [b'\t', b' '] | [b' ', b'\t']))
        .map(|(i, _)| {
            let at = base + TextSize::from(i as u32 + 1);
            ClassifiedSpan::new(
                TextRange::at(at, TextSize::from(1)),
                ClassificationKind::IndentError,
            )
        })
        .collect()
}
