//! Token classes for syntax highlighting
//!
//! This module defines the semantic classes a classifier can assign to
//! a matched token. Each class renders as a `<span>` whose class
//! attribute is the configured prefix followed by the class name.

/// Default prefix placed before every class name in the output
pub const DEFAULT_CLASS_PREFIX: &str = "tok-";

/// Semantic token classes for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Open/close tag delimiters (`<?php`, `?>`)
    Tag,
    /// Block and line comments
    Comment,
    /// String literals in either quote style
    String,
    /// Variables and parameter expansions
    Var,
    /// Member, static-access and arrow operators
    Op,
    /// Numeric literals
    Number,
    /// Reserved words
    Keyword,
    /// Long-form command-line flags (`--name`)
    Flag,
    /// Command or function names
    Func,
}

impl TokenClass {
    /// Every class, in declaration order
    pub const ALL: [TokenClass; 9] = [
        TokenClass::Tag,
        TokenClass::Comment,
        TokenClass::String,
        TokenClass::Var,
        TokenClass::Op,
        TokenClass::Number,
        TokenClass::Keyword,
        TokenClass::Flag,
        TokenClass::Func,
    ];

    /// Get the bare class name used in markup
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Tag => "tag",
            TokenClass::Comment => "comment",
            TokenClass::String => "string",
            TokenClass::Var => "var",
            TokenClass::Op => "op",
            TokenClass::Number => "number",
            TokenClass::Keyword => "keyword",
            TokenClass::Flag => "flag",
            TokenClass::Func => "func",
        }
    }

    /// Parse a class from its bare name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    /// Full class tag for the span wrapper, e.g. `tok-string`
    pub fn css_class(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_uses_prefix() {
        assert_eq!(TokenClass::String.css_class(DEFAULT_CLASS_PREFIX), "tok-string");
        assert_eq!(TokenClass::Var.css_class("hl-"), "hl-var");
    }

    #[test]
    fn test_from_name_roundtrip() {
        for class in TokenClass::ALL {
            assert_eq!(TokenClass::from_name(class.name()), Some(class));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenClass::from_name("Keyword"), None);
        assert_eq!(TokenClass::from_name(""), None);
    }
}
