//! Token classifiers
//!
//! A classifier maps a matched token to the class it renders with. Rules
//! are checked in order and the first satisfied predicate decides; a
//! token that satisfies none falls into the default bucket.

use super::rules::Match;
use super::tokens::TokenClass;

/// A test over the matched token text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Text starts with the given prefix
    StartsWith(&'static str),
    /// Text starts with any of the given prefixes
    StartsWithAny(&'static [&'static str]),
    /// Text is exactly the given word
    Equals(&'static str),
    /// Text is exactly one of the given words
    OneOf(&'static [&'static str]),
    /// Text starts with an ASCII digit
    StartsWithDigit,
}

impl Predicate {
    /// Check the predicate against token text
    pub fn test(&self, text: &str) -> bool {
        match self {
            Predicate::StartsWith(prefix) => text.starts_with(prefix),
            Predicate::StartsWithAny(prefixes) => prefixes.iter().any(|p| text.starts_with(p)),
            Predicate::Equals(word) => text == *word,
            Predicate::OneOf(words) => words.iter().any(|w| *w == text),
            Predicate::StartsWithDigit => text.starts_with(|c: char| c.is_ascii_digit()),
        }
    }
}

/// Ordered predicate list for one language
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: Vec<(Predicate, Option<TokenClass>)>,
    fallback: Option<TokenClass>,
}

impl Classifier {
    /// Create a classifier whose unmatched tokens fall into `fallback`
    ///
    /// A `None` fallback renders unmatched tokens as plain text.
    pub fn new(fallback: Option<TokenClass>) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Builder: tokens satisfying `predicate` get `class`
    pub fn rule(mut self, predicate: Predicate, class: TokenClass) -> Self {
        self.rules.push((predicate, Some(class)));
        self
    }

    /// Builder: tokens satisfying `predicate` render unwrapped
    pub fn plain(mut self, predicate: Predicate) -> Self {
        self.rules.push((predicate, None));
        self
    }

    /// Classify a matched token
    pub fn classify(&self, token: &Match<'_>) -> Option<TokenClass> {
        self.classify_text(token.text)
    }

    /// Classify raw token text
    pub fn classify_text(&self, text: &str) -> Option<TokenClass> {
        self.rules
            .iter()
            .find(|(predicate, _)| predicate.test(text))
            .map_or(self.fallback, |(_, class)| *class)
    }
}
