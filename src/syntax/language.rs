//! Language definitions for syntax highlighting
//!
//! A language definition pairs a grammar with the classifier that
//! interprets its matches, under one or more language tags.

use super::classify::Classifier;
use super::engine;
use super::rules::Grammar;

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "PHP", "Bash")
    pub name: String,
    /// Tags declared on code blocks (e.g., ["php"], ["bash", "sh"])
    pub tags: Vec<String>,
    /// Ordered token categories
    pub grammar: Grammar,
    /// Match to class mapping
    pub classifier: Classifier,
}

impl LanguageDefinition {
    /// Create a language definition with no tags
    pub fn new(name: &str, grammar: Grammar, classifier: Classifier) -> Self {
        Self {
            name: name.to_string(),
            tags: Vec::new(),
            grammar,
            classifier,
        }
    }

    /// Add a language tag
    pub fn add_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_string());
    }

    /// Highlight source with the given class prefix
    pub fn highlight(&self, source: &str, prefix: &str) -> String {
        engine::highlight_with_prefix(source, &self.grammar, &self.classifier, prefix)
    }
}
