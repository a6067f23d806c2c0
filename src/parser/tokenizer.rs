//! The tokenizer contract the classifier depends on.

use thiserror::Error;

use super::Token;

/// How fractional number literals without a suffix are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NumberStyle {
    Decimal,
    #[default]
    Float,
}

/// Options applied when a tokenizer starts a new source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerOptions {
    /// Emit `#` comment tokens instead of skipping them.
    pub return_comments: bool,
    /// Emit directive tokens instead of skipping them.
    pub return_directives: bool,
    pub number_style: NumberStyle,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            return_comments: true,
            return_directives: true,
            number_style: NumberStyle::Float,
        }
    }
}

/// Errors a tokenizer may raise while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// A line is indented with both tabs and spaces.
    #[error("line {line}: cannot mix tabs and spaces in indentation")]
    MixedIndent { line: u32 },

    /// A space-only indent is not a whole number of indent levels.
    #[error("line {line}: space-based indentation must be a multiple of {per_level}, found {spaces}")]
    SpaceIndentWidth {
        line: u32,
        spaces: usize,
        per_level: usize,
    },

    /// Any other failure inside the tokenizer.
    #[error("tokenizer failure: {0}")]
    Internal(String),
}

/// One step of a tokenizer's output.
///
/// Indentation anomalies are reported as events so that the driver can route
/// them through [`Tokenizer::on_mixed_indent`] and
/// [`Tokenizer::on_all_space_indent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    Token(Token),
    /// Leading whitespace mixing tabs and spaces.
    MixedIndent(Token),
    /// Leading whitespace made only of spaces.
    AllSpaceIndent(Token),
}

/// A stream tokenizer for Cobra source text.
pub trait Tokenizer {
    /// Reset the tokenizer and start scanning `source` from its first byte.
    fn start_source(&mut self, source: &str, options: &TokenizerOptions);

    /// The next lexeme, or `None` once the source is exhausted.
    fn next_lexeme(&mut self) -> Option<Result<Lexeme, TokenizerError>>;

    /// Handle an indentation that mixes tabs and spaces.
    ///
    /// `Ok(None)` means the line contributes no indentation token.
    fn on_mixed_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError>;

    /// Handle an indentation made only of spaces.
    fn on_all_space_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError>;

    /// Drain the whole source into tokens.
    ///
    /// Indentation events go through the two hooks above. The first error
    /// aborts the scan and is returned.
    fn all_tokens(&mut self) -> Result<Vec<Token>, TokenizerError> {
        let mut tokens = Vec::new();
        while let Some(lexeme) = self.next_lexeme() {
            let token = match lexeme? {
                Lexeme::Token(token) => Some(token),
                Lexeme::MixedIndent(token) => self.on_mixed_indent(token)?,
                Lexeme::AllSpaceIndent(token) => self.on_all_space_indent(token)?,
            };
            tokens.extend(token);
        }
        Ok(tokens)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &mut T {
    fn start_source(&mut self, source: &str, options: &TokenizerOptions) {
        (**self).start_source(source, options)
    }

    fn next_lexeme(&mut self) -> Option<Result<Lexeme, TokenizerError>> {
        (**self).next_lexeme()
    }

    fn on_mixed_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        (**self).on_mixed_indent(token)
    }

    fn on_all_space_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        (**self).on_all_space_indent(token)
    }

    fn all_tokens(&mut self) -> Result<Vec<Token>, TokenizerError> {
        (**self).all_tokens()
    }
}
