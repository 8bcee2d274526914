//! PHP language definition

use super::{word_set, WORD_BOUNDARY};
use crate::error::Result;
use crate::syntax::classify::{Classifier, Predicate};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Grammar;
use crate::syntax::tokens::TokenClass;

/// Reserved words, matched case-sensitively as whole words
const KEYWORDS: &[&str] = &[
    "abstract", "array", "as", "break", "case", "catch", "class", "const", "continue",
    "declare", "default", "do", "echo", "else", "elseif", "enum", "extends", "false",
    "final", "finally", "fn", "for", "foreach", "function", "if", "implements", "interface",
    "match", "namespace", "new", "null", "private", "protected", "public", "readonly",
    "return", "static", "switch", "throw", "trait", "true", "try", "use", "while",
];

const OPERATORS: &[&str] = &["->", "=>", "::"];

/// Create PHP language definition
pub fn php_language() -> Result<LanguageDefinition> {
    let keywords = word_set(KEYWORDS);
    let number = format!(r"{WORD_BOUNDARY}[0-9]+(?:\.[0-9]+)?{WORD_BOUNDARY}");
    let grammar = Grammar::from_rules(&[
        ("tag", r"<\?(?:php)?|\?>"),
        ("block_comment", r"/\*[\s\S]*?\*/"),
        // Both `//` and shell-style `#` comments run to end of line
        ("line_comment", r"//[^\n]*|#[^\n]*"),
        ("string", r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#),
        ("variable", r"\$[A-Za-z_][A-Za-z0-9_]*"),
        ("keyword", keywords.as_str()),
        ("operator", r"->|=>|::"),
        ("number", number.as_str()),
    ])?;

    // Anything left over can only have come from the keyword category
    let classifier = Classifier::new(Some(TokenClass::Keyword))
        .rule(Predicate::StartsWith("<?"), TokenClass::Tag)
        .rule(Predicate::Equals("?>"), TokenClass::Tag)
        .rule(Predicate::StartsWithAny(&["/*", "//", "#"]), TokenClass::Comment)
        .rule(Predicate::StartsWithAny(&["\"", "'"]), TokenClass::String)
        .rule(Predicate::StartsWith("$"), TokenClass::Var)
        .rule(Predicate::OneOf(OPERATORS), TokenClass::Op)
        .rule(Predicate::StartsWithDigit, TokenClass::Number);

    let mut lang = LanguageDefinition::new("PHP", grammar, classifier);
    lang.add_tag("php");
    Ok(lang)
}
