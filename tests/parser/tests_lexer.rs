//! Stock tokenizer tests.

use rstest::rstest;
use vcobra::keywords::{KEYWORDS, is_keyword};
use vcobra::parser::{
    CobraTokenizer, TokenCategory, Tokenizer, TokenizerError, TokenizerOptions, tokenize,
};

// =============================================================================
// TOKENS
// =============================================================================

#[rstest]
#[case("class", TokenCategory::Keyword)]
#[case("Foo", TokenCategory::Identifier)]
#[case("'s'", TokenCategory::StringSingle)]
#[case("\"s\"", TokenCategory::StringDouble)]
#[case("c'x'", TokenCategory::CharSingle)]
#[case("c\"x\"", TokenCategory::Char)]
#[case("42", TokenCategory::IntegerLit)]
#[case("4.2", TokenCategory::FloatLit)]
#[case("?", TokenCategory::Question)]
#[case("# note", TokenCategory::Comment)]
#[case("%% args -x", TokenCategory::Directive)]
#[case("\"\"\"doc\"\"\"", TokenCategory::DocString)]
#[case("$", TokenCategory::Unknown)]
#[case("==", TokenCategory::Operator)]
fn test_single_token_category(#[case] source: &str, #[case] expected: TokenCategory) {
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.len(), 1, "{source:?} gave {tokens:?}");
    assert_eq!(tokens[0].category, expected);
    assert_eq!(tokens[0].column, 1);
    assert_eq!(tokens[0].length as usize, source.len());
}

#[test]
fn test_columns_are_offsets_into_scanned_text() {
    let tokens = tokenize("pass\nclass Bar").unwrap();
    let bar = tokens.iter().find(|t| t.text == "Bar").unwrap();
    assert_eq!(bar.line, 2);
    assert_eq!(bar.column, 12);
}

#[rstest]
#[case("\"\"\"\nDon't use this.\n\"\"\"\nclass Foo\n")]
#[case("\"\"\"Café\"\"\"\nclass Foo\n")]
#[case("\"\"\" \"quoted\" and 'odd \"\"\"\nclass Foo\n")]
fn test_doc_string_body_is_opaque(#[case] source: &str) {
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens[0].category, TokenCategory::DocString);
    assert!(tokens.iter().all(|t| t.category != TokenCategory::Unknown));

    let class = tokens.iter().find(|t| t.is_keyword).unwrap();
    assert_eq!(class.text, "class");
    assert_eq!(class.line, source.matches('\n').count() as u32);
}

#[test]
fn test_line_numbers_advance_on_newlines() {
    let tokens = tokenize("a\r\nb\nc").unwrap();
    let lines: Vec<_> = tokens
        .iter()
        .filter(|t| t.category == TokenCategory::Identifier)
        .map(|t| t.line)
        .collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn test_tokenizer_is_reusable() {
    let mut tokenizer = CobraTokenizer::new();
    let options = TokenizerOptions::default();

    tokenizer.start_source("class A", &options);
    assert_eq!(tokenizer.all_tokens().unwrap().len(), 2);

    tokenizer.start_source("x", &options);
    let tokens = tokenizer.all_tokens().unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].line, 1);
}

// =============================================================================
// INDENTATION
// =============================================================================

#[rstest]
#[case("if x\n\tpass\n")]
#[case("if x\n    pass\n")]
#[case("if x\n        pass\n")]
#[case("if x\n  \n    pass\n")]
fn test_valid_indentation(#[case] source: &str) {
    assert!(tokenize(source).is_ok());
}

#[rstest]
#[case("if x\n \tpass\n", TokenizerError::MixedIndent { line: 2 })]
#[case(
    "if x\n      pass\n",
    TokenizerError::SpaceIndentWidth { line: 2, spaces: 6, per_level: 4 }
)]
fn test_invalid_indentation(#[case] source: &str, #[case] expected: TokenizerError) {
    assert_eq!(tokenize(source), Err(expected));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TokenizerError::MixedIndent { line: 3 }.to_string(),
        "line 3: cannot mix tabs and spaces in indentation"
    );
    assert_eq!(
        TokenizerError::SpaceIndentWidth {
            line: 1,
            spaces: 2,
            per_level: 4
        }
        .to_string(),
        "line 1: space-based indentation must be a multiple of 4, found 2"
    );
}

// =============================================================================
// KEYWORDS
// =============================================================================

#[test]
fn test_every_keyword_lexes_as_keyword() {
    for word in KEYWORDS {
        assert!(is_keyword(word));
        let tokens = tokenize(word).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_keyword, "{word} should be a keyword");
    }
}

#[rstest]
#[case("String")]
#[case("classy")]
#[case("_def")]
fn test_keyword_lookalikes_are_identifiers(#[case] word: &str) {
    let tokens = tokenize(word).unwrap();
    assert_eq!(tokens[0].category, TokenCategory::Identifier);
    assert!(!tokens[0].is_keyword);
}
