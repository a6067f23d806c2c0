//! Range classification, the entry point used by the rendering layer.
//!
//! A request names a revision and a range of it, typically the lines being
//! repainted. The range's text is tokenized from scratch; multi-line comments
//! come from a whole-revision scan cached in [`CommentCache`]. Tokens that fall
//! inside a comment are dropped in favour of the comment itself.

use std::ops::Range;
use std::sync::Arc;

use text_size::{TextRange, TextSize};
use tracing::{trace, warn};

use super::comments::{CommentCache, comments_intersecting};
use super::indent::indent_error_spans;
use super::{ClassificationKind, ClassificationStyles, ClassifiedSpan};
use crate::base::TextSnapshot;
use crate::parser::{
    CobraTokenizer, ResilientTokenizer, Token, TokenCategory, Tokenizer, TokenizerOptions,
};

/// Construction-time settings of a [`RangeClassifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifierConfig {
    pub styles: ClassificationStyles,
    pub tokenizer: TokenizerOptions,
    /// Clip comment spans to the requested range instead of emitting whole comments.
    pub clip_comments: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            styles: ClassificationStyles::default(),
            tokenizer: TokenizerOptions::default(),
            clip_comments: false,
        }
    }
}

/// Classify a token stream scanned from text starting at `base`.
///
/// Runs strictly in stream order: the `?` rule looks at the token right
/// before it, and every non-keyword token becomes the new previous token
/// whether or not it produced a span.
pub fn classify_tokens(tokens: &[Token], base: TextSize) -> Vec<ClassifiedSpan> {
    let mut spans = Vec::new();
    let mut previous: Option<&Token> = None;

    for tok in tokens {
        if tok.is_keyword {
            spans.push(ClassifiedSpan::new(tok.range(base), ClassificationKind::Keyword));
            continue;
        }

        let kind = match tok.category {
            category if category.is_string_like() => Some(ClassificationKind::String),
            TokenCategory::Identifier if tok.is_class_name() => {
                Some(ClassificationKind::ClassName)
            }
            TokenCategory::Question if previous.is_some_and(Token::is_class_name) => {
                // only the `?` of a nilable class
                spans.push(ClassifiedSpan::new(
                    tok.prefix_range(base, 1),
                    ClassificationKind::ClassName,
                ));
                None
            }
            TokenCategory::Comment => Some(ClassificationKind::Comment),
            _ => None,
        };
        if let Some(kind) = kind {
            spans.push(ClassifiedSpan::new(tok.range(base), kind));
        }
        previous = Some(tok);
    }

    spans
}

/// Drop every span that lies wholly inside one of `comments`.
///
/// `comments` must be sorted and non-overlapping. Spans only partly covered by
/// a comment are kept.
pub fn remove_spans_in_comments(spans: &mut Vec<ClassifiedSpan>, comments: &[TextRange]) {
    if comments.is_empty() {
        return;
    }
    spans.retain(|span| {
        let idx = comments.partition_point(|c| c.start() <= span.range.start());
        idx == 0 || !comments[idx - 1].contains_range(span.range)
    });
}

/// Classifies ranges of one document's revisions.
///
/// Holds the tokenizer it reuses between requests, so requests for one
/// document run one at a time (`&mut self`). The comment cache may be shared
/// with classifiers of other documents.
#[derive(Debug)]
pub struct RangeClassifier<T = CobraTokenizer> {
    config: ClassifierConfig,
    comments: Arc<CommentCache>,
    tokenizer: T,
}

impl RangeClassifier<CobraTokenizer> {
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_tokenizer(config, Arc::new(CommentCache::new()), CobraTokenizer::new())
    }
}

impl Default for RangeClassifier<CobraTokenizer> {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl<T: Tokenizer> RangeClassifier<T> {
    pub fn with_tokenizer(
        config: ClassifierConfig,
        comments: Arc<CommentCache>,
        tokenizer: T,
    ) -> Self {
        Self {
            config,
            comments,
            tokenizer,
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn styles(&self) -> &ClassificationStyles {
        &self.config.styles
    }

    pub fn comment_cache(&self) -> &Arc<CommentCache> {
        &self.comments
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Classify `range` of `snapshot`.
    ///
    /// Spans come back sorted by start offset. Comment spans cover whole
    /// comments and may reach outside `range` unless `clip_comments` is set.
    /// A range that is out of bounds or splits a character is treated as
    /// empty text; nothing here fails.
    pub fn classify<S: TextSnapshot + ?Sized>(
        &mut self,
        snapshot: &S,
        range: TextRange,
    ) -> Vec<ClassifiedSpan> {
        let comments = self.comments.comments_for(snapshot);
        let in_range = comments_intersecting(&comments, range);

        // skip the tail of a comment the range starts in, so its closing
        // delimiter is not lexed as an opening one
        let scan_start = in_range
            .first()
            .filter(|comment| comment.start() < range.start())
            .map_or(range.start(), |comment| comment.end().min(range.end()));
        let scan = TextRange::new(scan_start, range.end());

        let text = snapshot.text().get(Range::<usize>::from(scan)).unwrap_or_else(|| {
            warn!(?range, len = snapshot.text().len(), "classification range outside text");
            ""
        });

        let mut spans = {
            let mut tokenizer = ResilientTokenizer::new(&mut self.tokenizer);
            tokenizer.start_source(text, &self.config.tokenizer);
            classify_tokens(&tokenizer.tokens(), scan.start())
        };
        spans.extend(indent_error_spans(text, scan.start()));

        remove_spans_in_comments(&mut spans, in_range);

        spans.extend(in_range.iter().map(|&comment| {
            let comment = if self.config.clip_comments {
                comment.intersect(range).unwrap_or(comment)
            } else {
                comment
            };
            ClassifiedSpan::new(comment, ClassificationKind::Comment)
        }));

        spans.sort_by_key(|span| (span.range.start(), span.range.end()));
        trace!(?range, count = spans.len(), "classified range");
        spans
    }
}
