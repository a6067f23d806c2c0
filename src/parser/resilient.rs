//! A tokenizer adapter that never fails.
//!
//! Editors must keep highlighting a file even when one line of it is badly
//! indented or otherwise unlexable. [`ResilientTokenizer`] wraps any
//! [`Tokenizer`] and turns its failures into missing tokens: a rejected
//! indentation contributes no token, and an error while draining ends the scan
//! but keeps every token produced before it.

use tracing::warn;

use super::Token;
use super::tokenizer::{Lexeme, Tokenizer, TokenizerError, TokenizerOptions};

/// Decorator that logs and absorbs the errors of the wrapped tokenizer.
///
/// Usually built over a borrowed tokenizer, `ResilientTokenizer::new(&mut inner)`,
/// so the inner tokenizer can be reused for the next request.
#[derive(Debug)]
pub struct ResilientTokenizer<T> {
    inner: T,
}

impl<T: Tokenizer> ResilientTokenizer<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Drain the source, returning every token produced before the first
    /// unrecoverable error.
    pub fn tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(lexeme) = self.inner.next_lexeme() {
            let token = match lexeme {
                Ok(Lexeme::Token(token)) => Some(token),
                Ok(Lexeme::MixedIndent(token)) => self.mixed_indent(token),
                Ok(Lexeme::AllSpaceIndent(token)) => self.all_space_indent(token),
                Err(err) => {
                    // just log it and keep what we have
                    warn!(error = %err, kept = tokens.len(), "tokenizer failed mid-stream");
                    break;
                }
            };
            tokens.extend(token);
        }
        tokens
    }

    fn mixed_indent(&mut self, token: Token) -> Option<Token> {
        match self.inner.on_mixed_indent(token) {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "tokenizer error in mixed tab/space indent");
                None
            }
        }
    }

    fn all_space_indent(&mut self, token: Token) -> Option<Token> {
        match self.inner.on_all_space_indent(token) {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "tokenizer error in all-space indent");
                None
            }
        }
    }
}

impl<T: Tokenizer> Tokenizer for ResilientTokenizer<T> {
    fn start_source(&mut self, source: &str, options: &TokenizerOptions) {
        self.inner.start_source(source, options);
    }

    fn next_lexeme(&mut self) -> Option<Result<Lexeme, TokenizerError>> {
        self.inner.next_lexeme()
    }

    fn on_mixed_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        Ok(self.mixed_indent(token))
    }

    fn on_all_space_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        Ok(self.all_space_indent(token))
    }

    fn all_tokens(&mut self) -> Result<Vec<Token>, TokenizerError> {
        Ok(self.tokens())
    }
}
