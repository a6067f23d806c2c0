//! Classification kinds and classified spans.

use text_size::TextRange;

/// What a span of text is highlighted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassificationKind {
    Keyword,
    Comment,
    String,
    ClassName,
    IndentError,
}

impl ClassificationKind {
    pub const ALL: [ClassificationKind; 5] = [
        ClassificationKind::Keyword,
        ClassificationKind::Comment,
        ClassificationKind::String,
        ClassificationKind::ClassName,
        ClassificationKind::IndentError,
    ];

    /// Name the classification is registered under in the rendering layer.
    pub fn name(self) -> &'static str {
        match self {
            ClassificationKind::Keyword => "CobraKeyword",
            ClassificationKind::Comment => "CobraComment",
            ClassificationKind::String => "CobraString",
            ClassificationKind::ClassName => "CobraClass",
            ClassificationKind::IndentError => "CobraIndentError",
        }
    }

    /// Inverse of [`ClassificationKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A range of the revision's text together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifiedSpan {
    /// Absolute range in the revision's text
    pub range: TextRange,
    pub kind: ClassificationKind,
}

impl ClassifiedSpan {
    pub fn new(range: TextRange, kind: ClassificationKind) -> Self {
        Self { range, kind }
    }
}
