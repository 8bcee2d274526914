//! Bash language definition

use super::word_set;
use crate::error::Result;
use crate::syntax::classify::{Classifier, Predicate};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Grammar;
use crate::syntax::tokens::TokenClass;

const KEYWORDS: &[&str] = &[
    "if", "then", "fi", "for", "in", "do", "done", "case", "esac", "while", "function",
];

/// Commands the documentation's shell samples invoke
const COMMANDS: &[&str] = &["composer", "php", "cp", "vendor/bin/readalizer"];

/// Create Bash language definition
pub fn bash_language() -> Result<LanguageDefinition> {
    let keywords = word_set(KEYWORDS);
    let commands = word_set(COMMANDS);
    let grammar = Grammar::from_rules(&[
        ("comment", r"#[^\n]*"),
        ("string", r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#),
        ("expansion", r"\$\{[^}]+\}|\$[A-Za-z_][A-Za-z0-9_]*"),
        ("flag", r"--[A-Za-z0-9-]+"),
        ("keyword", keywords.as_str()),
        ("command", commands.as_str()),
    ])?;

    let classifier = Classifier::new(Some(TokenClass::Func))
        .rule(Predicate::StartsWith("#"), TokenClass::Comment)
        .rule(Predicate::StartsWithAny(&["\"", "'"]), TokenClass::String)
        .rule(Predicate::StartsWith("$"), TokenClass::Var)
        .rule(Predicate::StartsWith("--"), TokenClass::Flag)
        .rule(Predicate::OneOf(KEYWORDS), TokenClass::Keyword);

    let mut lang = LanguageDefinition::new("Bash", grammar, classifier);
    lang.add_tag("bash");
    Ok(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::engine::{tokenize, Segment};

    fn classes(source: &str) -> Vec<(String, Option<TokenClass>)> {
        let lang = bash_language().unwrap();
        tokenize(source, &lang.grammar, &lang.classifier)
            .into_iter()
            .filter(|s| matches!(s, Segment::Token { .. }))
            .map(|s| (s.text(source).to_string(), s.class()))
            .collect()
    }

    #[test]
    fn test_command_allow_list() {
        let html = bash_language()
            .unwrap()
            .highlight("composer install --no-dev", "tok-");
        assert_eq!(
            html,
            "<span class=\"tok-func\">composer</span> install \
             <span class=\"tok-flag\">--no-dev</span>"
        );
    }

    #[test]
    fn test_hash_inside_string_is_not_comment() {
        let tokens = classes(r#"echo "a # b" # trailing"#);
        assert_eq!(
            tokens,
            vec![
                (r#""a # b""#.to_string(), Some(TokenClass::String)),
                ("# trailing".to_string(), Some(TokenClass::Comment)),
            ]
        );
    }

    #[test]
    fn test_expansions() {
        let tokens = classes("cp ${SRC}/x $HOME/y");
        assert_eq!(
            tokens,
            vec![
                ("cp".to_string(), Some(TokenClass::Func)),
                ("${SRC}".to_string(), Some(TokenClass::Var)),
                ("$HOME".to_string(), Some(TokenClass::Var)),
            ]
        );
    }

    #[test]
    fn test_keywords_and_long_command() {
        let source = "for f in *.php; do vendor/bin/readalizer \"$f\"; done";
        let tokens = classes(source);
        assert_eq!(
            tokens,
            vec![
                ("for".to_string(), Some(TokenClass::Keyword)),
                ("in".to_string(), Some(TokenClass::Keyword)),
                // The extension in `*.php` is a whole word too
                ("php".to_string(), Some(TokenClass::Func)),
                ("do".to_string(), Some(TokenClass::Keyword)),
                ("vendor/bin/readalizer".to_string(), Some(TokenClass::Func)),
                ("\"$f\"".to_string(), Some(TokenClass::String)),
                ("done".to_string(), Some(TokenClass::Keyword)),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_of_word() {
        // `php` is a command but `phpunit` is not; `in` inside `install` is not a keyword
        assert!(classes("phpunit install").is_empty());
    }

    #[test]
    fn test_command_after_non_ascii_letter() {
        assert_eq!(
            classes("ücp"),
            vec![("cp".to_string(), Some(TokenClass::Func))]
        );
    }

    #[test]
    fn test_short_flag_is_plain() {
        assert_eq!(
            classes("php -d memory_limit=-1 --version"),
            vec![
                ("php".to_string(), Some(TokenClass::Func)),
                ("--version".to_string(), Some(TokenClass::Flag)),
            ]
        );
    }
}
