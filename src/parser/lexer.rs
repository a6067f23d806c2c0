//! Logos-based tokenizer for Cobra
//!
//! Fast tokenization using the logos crate, plus the line-start bookkeeping
//! needed to report indentation.

use std::ops::Range;

use logos::Logos;
use smol_str::SmolStr;
use tracing::trace;

use super::keywords::is_keyword;
use super::tokenizer::{Lexeme, NumberStyle, Tokenizer, TokenizerError, TokenizerOptions};
use super::{Token, TokenCategory};
use crate::base::constants::{COMMENT_DELIMITER, SPACES_PER_INDENT};

/// Logos token enum - maps to TokenCategory
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"#[^\n]*", priority = 2)]
    Comment,

    #[regex(r"%%[^\n]*")]
    Directive,

    #[regex(r"@[\p{XID_Start}_]\p{XID_Continue}*")]
    AtDirective,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Opens a doc string; the driver extends it to the closing `"""`.
    #[token("\"\"\"")]
    DocStringDelimiter,

    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    Ident,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    StringSingle,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringDouble,

    #[regex(r"c'([^'\\\n]|\\.)'")]
    CharSingle,

    #[regex(r#"c"([^"\\\n]|\\.)""#)]
    Char,

    #[regex(r"[0-9][0-9_]*")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    Fractional,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("?")]
    Question,

    #[token("**")]
    #[token("//")]
    #[token("==")]
    #[token("<>")]
    #[token("<=")]
    #[token(">=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("->")]
    #[token("<<")]
    #[token(">>")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("=")]
    #[token("<")]
    #[token(">")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("~")]
    #[token("!")]
    #[token(".")]
    #[token(",")]
    #[token(":")]
    #[token(";")]
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("{")]
    #[token("}")]
    Punct,
}

impl LogosToken {
    fn category(self, number_style: NumberStyle) -> TokenCategory {
        match self {
            LogosToken::Whitespace => TokenCategory::Indent,
            LogosToken::Newline => TokenCategory::Eol,
            LogosToken::Comment => TokenCategory::Comment,
            LogosToken::Directive | LogosToken::AtDirective => TokenCategory::Directive,
            LogosToken::DocStringDelimiter => TokenCategory::DocString,
            LogosToken::Ident => TokenCategory::Identifier,
            LogosToken::StringSingle => TokenCategory::StringSingle,
            LogosToken::StringDouble => TokenCategory::StringDouble,
            LogosToken::CharSingle => TokenCategory::CharSingle,
            LogosToken::Char => TokenCategory::Char,
            LogosToken::Integer => TokenCategory::IntegerLit,
            LogosToken::Fractional => match number_style {
                NumberStyle::Decimal => TokenCategory::DecimalLit,
                NumberStyle::Float => TokenCategory::FloatLit,
            },
            LogosToken::Question => TokenCategory::Question,
            LogosToken::Punct => TokenCategory::Operator,
        }
    }
}

/// A raw logos match: `None` for text no token rule accepts.
type RawToken = (Option<LogosToken>, Range<usize>);

/// The stock Cobra tokenizer.
///
/// Leading whitespace of a non-blank line is reported as an indentation event:
/// tabs only become an [`TokenCategory::Indent`] token directly, spaces only
/// and mixtures go through the indentation hooks, which reject mixtures and
/// space indents that are not a multiple of four.
///
/// A `"""` doc string is one opaque token. Text no rule accepts becomes an
/// [`TokenCategory::Unknown`] token, so only the indentation hooks ever fail.
#[derive(Debug, Default)]
pub struct CobraTokenizer {
    source: String,
    raw: Vec<RawToken>,
    next: usize,
    line: u32,
    at_line_start: bool,
    options: TokenizerOptions,
}

impl CobraTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_token(&self, category: TokenCategory, span: &Range<usize>) -> Token {
        let text = SmolStr::new(&self.source[span.clone()]);
        Token {
            category,
            is_keyword: category == TokenCategory::Keyword,
            length: text.len() as u32,
            text,
            line: self.line,
            column: span.start as u32 + 1,
        }
    }

    /// True if the raw token after `index` ends the line without code.
    fn rest_of_line_is_blank(&self, index: usize) -> bool {
        match self.raw.get(index + 1) {
            None => true,
            Some((Some(LogosToken::Newline | LogosToken::Comment), _)) => true,
            Some(_) => false,
        }
    }

    /// The doc string opened by the `"""` at `open`, through its closing
    /// delimiter or to the end of the source. Raw tokens inside it are skipped.
    fn doc_string(&mut self, open: Range<usize>) -> Token {
        let end = self.source[open.end..]
            .find(COMMENT_DELIMITER)
            .map_or(self.source.len(), |close| open.end + close + COMMENT_DELIMITER.len());
        while self.raw.get(self.next).is_some_and(|(_, span)| span.start < end) {
            self.next += 1;
        }
        let token = self.make_token(TokenCategory::DocString, &(open.start..end));
        self.line += token.text.matches('\n').count() as u32;
        token
    }

    fn indentation(&self, index: usize, span: &Range<usize>) -> Option<Lexeme> {
        if self.rest_of_line_is_blank(index) {
            return None;
        }
        let text = &self.source[span.clone()];
        let token = self.make_token(TokenCategory::Indent, span);
        let has_tab = text.contains('\t');
        let has_space = text.contains(' ');
        Some(match (has_tab, has_space) {
            (true, true) => Lexeme::MixedIndent(token),
            (false, true) => Lexeme::AllSpaceIndent(token),
            _ => Lexeme::Token(token),
        })
    }
}

impl Tokenizer for CobraTokenizer {
    fn start_source(&mut self, source: &str, options: &TokenizerOptions) {
        self.source = source.to_owned();
        self.raw = LogosToken::lexer(source)
            .spanned()
            .map(|(token, span)| (token.ok(), span))
            .collect();
        self.next = 0;
        self.line = 1;
        self.at_line_start = true;
        self.options = *options;
    }

    fn next_lexeme(&mut self) -> Option<Result<Lexeme, TokenizerError>> {
        loop {
            let index = self.next;
            let (kind, span) = self.raw.get(index).cloned()?;
            self.next += 1;

            let at_line_start = std::mem::replace(&mut self.at_line_start, false);
            let Some(kind) = kind else {
                trace!(line = self.line, ?span, "no token rule matches");
                let token = self.make_token(TokenCategory::Unknown, &span);
                return Some(Ok(Lexeme::Token(token)));
            };

            let lexeme = match kind {
                LogosToken::Whitespace if at_line_start => self.indentation(index, &span),
                LogosToken::Whitespace => None,
                LogosToken::Newline => {
                    let token = self.make_token(TokenCategory::Eol, &span);
                    self.line += 1;
                    self.at_line_start = true;
                    Some(Lexeme::Token(token))
                }
                LogosToken::DocStringDelimiter => Some(Lexeme::Token(self.doc_string(span))),
                LogosToken::Comment if !self.options.return_comments => None,
                LogosToken::Directive | LogosToken::AtDirective
                    if !self.options.return_directives =>
                {
                    None
                }
                LogosToken::Ident if is_keyword(&self.source[span.clone()]) => Some(
                    Lexeme::Token(self.make_token(TokenCategory::Keyword, &span)),
                ),
                other => Some(Lexeme::Token(
                    self.make_token(other.category(self.options.number_style), &span),
                )),
            };

            if let Some(lexeme) = lexeme {
                return Some(Ok(lexeme));
            }
        }
    }

    fn on_mixed_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        Err(TokenizerError::MixedIndent { line: token.line })
    }

    fn on_all_space_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        let spaces = token.text.len();
        if spaces % SPACES_PER_INDENT != 0 {
            return Err(TokenizerError::SpaceIndentWidth {
                line: token.line,
                spaces,
                per_level: SPACES_PER_INDENT,
            });
        }
        Ok(Some(token))
    }
}

/// Tokenize an entire string with default options, stopping at the first error.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
    let mut tokenizer = CobraTokenizer::new();
    tokenizer.start_source(input, &TokenizerOptions::default());
    tokenizer.all_tokens()
}
