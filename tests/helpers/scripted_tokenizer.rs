//! A tokenizer that replays a fixed script, for driving the classifier with
//! exactly the tokens a test needs.

use vcobra::parser::{Lexeme, Token, TokenCategory, Tokenizer, TokenizerError, TokenizerOptions};

pub struct ScriptedTokenizer {
    script: Vec<Result<Lexeme, TokenizerError>>,
    next: usize,
    /// Every source passed to `start_source`, in order
    pub sources: Vec<String>,
}

impl ScriptedTokenizer {
    pub fn new(script: Vec<Result<Lexeme, TokenizerError>>) -> Self {
        Self {
            script,
            next: 0,
            sources: Vec::new(),
        }
    }

    /// A script made only of plain tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self::new(tokens.into_iter().map(|t| Ok(Lexeme::Token(t))).collect())
    }
}

impl Tokenizer for ScriptedTokenizer {
    fn start_source(&mut self, source: &str, _options: &TokenizerOptions) {
        self.sources.push(source.to_string());
        self.next = 0;
    }

    fn next_lexeme(&mut self) -> Option<Result<Lexeme, TokenizerError>> {
        let lexeme = self.script.get(self.next).cloned();
        self.next += 1;
        lexeme
    }

    fn on_mixed_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        Err(TokenizerError::MixedIndent { line: token.line })
    }

    fn on_all_space_indent(&mut self, token: Token) -> Result<Option<Token>, TokenizerError> {
        Err(TokenizerError::Internal(format!(
            "rejecting indent of width {}",
            token.length
        )))
    }
}

pub fn keyword(text: &str, column: u32) -> Token {
    Token::new(TokenCategory::Keyword, text, column)
}

pub fn ident(text: &str, column: u32) -> Token {
    Token::new(TokenCategory::Identifier, text, column)
}

pub fn string(text: &str, column: u32) -> Token {
    Token::new(TokenCategory::StringDouble, text, column)
}

pub fn question(column: u32) -> Token {
    Token::new(TokenCategory::Question, "?", column)
}

pub fn indent(text: &str, column: u32) -> Token {
    Token::new(TokenCategory::Indent, text, column)
}
