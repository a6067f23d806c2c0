//! Tokens produced by a [`Tokenizer`](super::Tokenizer).

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// A reserved word. Keyword tokens also carry `is_keyword == true`.
    Keyword,
    /// Identifier, e.g. `foo` or `String`.
    Identifier,
    /// `'single quoted'` string.
    StringSingle,
    /// `"double quoted"` string.
    StringDouble,
    /// `c"x"` character literal.
    Char,
    /// `c'x'` character literal.
    CharSingle,
    IntegerLit,
    DecimalLit,
    FloatLit,
    /// `?`, the nilable-type suffix.
    Question,
    /// `# ...` single-line comment.
    Comment,
    /// `%% ...` compiler directive or `@name` directive.
    Directive,
    /// `"""doc string"""`, delimiters included. An unclosed doc string runs
    /// to the end of the scanned text.
    DocString,
    /// Leading indentation of a line.
    Indent,
    /// End of a line.
    Eol,
    /// Any other operator or punctuation.
    Operator,
    /// Text no token rule accepts, such as a stray quote. Scanning resumes
    /// right after it.
    Unknown,
}

impl TokenCategory {
    /// Stable tag for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::StringSingle => "string_single",
            TokenCategory::StringDouble => "string_double",
            TokenCategory::Char => "char",
            TokenCategory::CharSingle => "char_single",
            TokenCategory::IntegerLit => "integer_lit",
            TokenCategory::DecimalLit => "decimal_lit",
            TokenCategory::FloatLit => "float_lit",
            TokenCategory::Question => "question",
            TokenCategory::Comment => "comment",
            TokenCategory::Directive => "directive",
            TokenCategory::DocString => "doc_string",
            TokenCategory::Indent => "indent",
            TokenCategory::Eol => "eol",
            TokenCategory::Operator => "operator",
            TokenCategory::Unknown => "unknown",
        }
    }

    /// String and character literal categories.
    pub fn is_string_like(self) -> bool {
        matches!(
            self,
            TokenCategory::StringSingle
                | TokenCategory::StringDouble
                | TokenCategory::Char
                | TokenCategory::CharSingle
        )
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical unit with its position inside the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub is_keyword: bool,
    pub text: SmolStr,
    /// 1-based line number within the scanned text
    pub line: u32,
    /// 1-based offset of the first byte within the scanned text
    pub column: u32,
    /// Length in bytes, including any quote characters
    pub length: u32,
}

impl Token {
    /// Create a token on line 1 whose length is the length of `text`.
    pub fn new(category: TokenCategory, text: impl Into<SmolStr>, column: u32) -> Self {
        let text = text.into();
        Self {
            category,
            is_keyword: category == TokenCategory::Keyword,
            length: text.len() as u32,
            text,
            line: 1,
            column,
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Absolute range of this token when the scanned text started at `base`.
    pub fn range(&self, base: TextSize) -> TextRange {
        self.prefix_range(base, self.length)
    }

    /// Absolute range of the first `length` bytes of this token.
    pub fn prefix_range(&self, base: TextSize, length: u32) -> TextRange {
        let start = base + TextSize::from(self.column.saturating_sub(1));
        TextRange::at(start, TextSize::from(length))
    }

    /// True for identifiers whose first character is uppercase, which Cobra
    /// uses for class and other type names.
    pub fn is_class_name(&self) -> bool {
        self.category == TokenCategory::Identifier
            && self.text.chars().next().is_some_and(char::is_uppercase)
    }
}
