//! Token categories and grammars
//!
//! A grammar is an ordered list of named categories, each backed by a
//! regex fragment. Order is precedence: when two categories match at the
//! same offset, the one declared first wins.

use regex::{Regex, RegexBuilder};

use crate::error::{HighlightError, Result};

/// Sample haystacks probed when a category is built, to catch patterns
/// that can match without consuming input.
const EMPTY_PROBES: [&str; 6] = ["", " ", "a", "0", "a b", "\n"];

/// A single named token category
#[derive(Debug, Clone)]
pub struct Category {
    /// Category name (e.g. "comment", "variable")
    pub name: String,
    /// Compiled pattern, multiline mode
    pub pattern: Regex,
}

impl Category {
    /// Compile a category from a regex fragment
    pub fn new(name: &str, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|source| HighlightError::Pattern {
                category: name.to_string(),
                source,
            })?;

        let admits_empty = EMPTY_PROBES
            .iter()
            .any(|probe| regex.find_iter(probe).any(|m| m.is_empty()));
        if admits_empty {
            return Err(HighlightError::EmptyMatch {
                category: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            pattern: regex,
        })
    }

    /// Find the leftmost match starting at or after `start`
    ///
    /// The whole text stays visible to the regex, so word boundaries and
    /// line anchors right at `start` see the preceding character.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start > text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }
}

/// A matched token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    /// Matched source text
    pub text: &'t str,
    /// Byte offset where the match starts (inclusive)
    pub start: usize,
    /// Byte offset where the match ends (exclusive)
    pub end: usize,
    /// Index of the producing category in its grammar
    pub category: usize,
}

/// An ordered set of token categories for one language
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    categories: Vec<Category>,
}

impl Grammar {
    /// Create an empty grammar
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grammar from `(name, pattern)` pairs, in precedence order
    pub fn from_rules(rules: &[(&str, &str)]) -> Result<Self> {
        let mut grammar = Self::new();
        for (name, pattern) in rules {
            grammar.add_category(Category::new(name, pattern)?);
        }
        Ok(grammar)
    }

    /// Append a category with the lowest precedence so far
    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Categories in precedence order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by index
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Name of the category at `index`, or "" if out of range
    pub fn category_name(&self, index: usize) -> &str {
        self.category(index).map_or("", |c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Find the earliest match at or after `start`
    ///
    /// Among matches starting at the same offset the earliest declared
    /// category wins. Empty matches are never returned.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Match<'t>> {
        let mut best: Option<Match<'t>> = None;
        for (index, category) in self.categories.iter().enumerate() {
            let Some((s, e)) = category.find_at(text, start) else {
                continue;
            };
            if s == e {
                continue;
            }
            if best.map_or(true, |b| s < b.start) {
                best = Some(Match {
                    text: &text[s..e],
                    start: s,
                    end: e,
                    category: index,
                });
            }
        }
        best
    }
}
