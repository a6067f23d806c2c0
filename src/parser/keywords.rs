//! Reserved words of the Cobra language.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// All Cobra keywords, in alphabetical order.
pub const KEYWORDS: &[&str] = &[
    "abstract", "adds", "all", "and", "any", "as", "assert", "base", "be", "body", "bool",
    "branch", "break", "callable", "catch", "char", "class", "const", "continue", "cue",
    "decimal", "def", "do", "dynamic", "each", "else", "end", "ensure", "enum", "event",
    "every", "except", "expect", "extend", "extern", "false", "finally", "float", "for",
    "from", "get", "has", "if", "ignore", "implements", "implies", "import", "in",
    "inherits", "inlined", "int", "interface", "internal", "invariant", "is", "listen",
    "lock", "mixin", "must", "namespace", "new", "nil", "nonvirtual", "not", "number", "of",
    "off", "old", "on", "or", "out", "override", "partial", "pass", "passthrough", "post",
    "print", "private", "pro", "protected", "public", "raise", "ref", "require", "result",
    "return", "same", "set", "shared", "sig", "stop", "struct", "success", "test", "this",
    "throw", "to", "trace", "true", "try", "uint", "use", "using", "var", "vari", "virtual",
    "where", "while", "yield",
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Returns true if `word` is a reserved word.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}
