//! Tokenization for Cobra source text
//!
//! The classifier consumes tokens through the narrow [`Tokenizer`] contract
//! rather than depending on a concrete lexer:
//!
//! ```text
//! Source Text
//!     ↓
//! Tokenizer (CobraTokenizer, logos) → Lexemes (tokens + indentation events)
//!     ↓
//! ResilientTokenizer → best-effort Vec<Token>, errors logged and absorbed
//!     ↓
//! ide::RangeClassifier → classified spans
//! ```

pub mod keywords;
mod lexer;
mod resilient;
mod token;
mod tokenizer;

pub use lexer::{CobraTokenizer, LogosToken, tokenize};
pub use resilient::ResilientTokenizer;
pub use token::{Token, TokenCategory};
pub use tokenizer::{Lexeme, NumberStyle, Tokenizer, TokenizerError, TokenizerOptions};
