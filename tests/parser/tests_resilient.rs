//! Error-absorbing tokenizer adapter tests.

use vcobra::parser::{
    CobraTokenizer, Lexeme, ResilientTokenizer, TokenCategory, Tokenizer, TokenizerError,
    TokenizerOptions,
};

use crate::helpers::classify_helpers::init_tracing;
use crate::helpers::scripted_tokenizer::{ScriptedTokenizer, indent, keyword};

fn resilient_tokens(source: &str) -> Vec<(TokenCategory, String)> {
    let mut inner = CobraTokenizer::new();
    let mut tokenizer = ResilientTokenizer::new(&mut inner);
    tokenizer.start_source(source, &TokenizerOptions::default());
    tokenizer
        .tokens()
        .into_iter()
        .map(|t| (t.category, t.text.to_string()))
        .collect()
}

#[test]
fn test_mixed_indent_dropped_line_kept() {
    init_tracing();
    let tokens = resilient_tokens("if x\n \tpass\n");
    assert!(tokens.iter().all(|(c, _)| *c != TokenCategory::Indent));
    assert!(tokens.contains(&(TokenCategory::Keyword, "pass".to_string())));
}

#[test]
fn test_odd_space_indent_dropped_line_kept() {
    init_tracing();
    let tokens = resilient_tokens("if x\n   pass\n");
    assert!(tokens.iter().all(|(c, _)| *c != TokenCategory::Indent));
    assert!(tokens.contains(&(TokenCategory::Keyword, "pass".to_string())));
}

#[test]
fn test_valid_space_indent_passes_through() {
    let tokens = resilient_tokens("if x\n    pass\n");
    assert!(tokens.contains(&(TokenCategory::Indent, "    ".to_string())));
}

#[test]
fn test_unlexable_text_is_skipped() {
    let tokens = resilient_tokens("class A $ pass");
    assert_eq!(
        tokens,
        vec![
            (TokenCategory::Keyword, "class".to_string()),
            (TokenCategory::Identifier, "A".to_string()),
            (TokenCategory::Unknown, "$".to_string()),
            (TokenCategory::Keyword, "pass".to_string()),
        ]
    );
}

#[test]
fn test_all_tokens_never_fails() {
    init_tracing();
    let mut tokenizer = ResilientTokenizer::new(ScriptedTokenizer::new(vec![
        Ok(Lexeme::MixedIndent(indent("\t ", 1))),
        Ok(Lexeme::Token(keyword("pass", 3))),
        Err(TokenizerError::Internal("boom".into())),
    ]));
    tokenizer.start_source("\t pass", &TokenizerOptions::default());

    let tokens = tokenizer.all_tokens().unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "pass");

    let inner = tokenizer.into_inner();
    assert_eq!(inner.sources, vec!["\t pass".to_string()]);
}

#[test]
fn test_inner_tokenizer_still_strict() {
    let mut inner = CobraTokenizer::new();
    inner.start_source("if x\n \tpass\n", &TokenizerOptions::default());
    assert_eq!(inner.all_tokens(), Err(TokenizerError::MixedIndent { line: 2 }));
}
