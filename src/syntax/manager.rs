//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that maps language tags to
//! definitions and highlights code blocks, each at most once.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::block::CodeBlock;
use super::builtin;
use super::language::LanguageDefinition;
use super::tokens::DEFAULT_CLASS_PREFIX;
use crate::config::Config;
use crate::error::{HighlightError, Result};

/// What happened to a block passed to [`SyntaxManager::highlight_block`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Content replaced with highlighted markup
    Highlighted,
    /// Block was already processed; nothing done
    AlreadyProcessed,
    /// Block declares no language tag
    Untagged,
    /// No language registered for the block's tag; content left as is
    Unsupported,
    /// Highlighting is switched off
    Disabled,
}

/// Main syntax highlighting manager
pub struct SyntaxManager {
    /// Loaded language definitions, by name
    languages: HashMap<String, LanguageDefinition>,
    /// Language tag to language name mapping
    tag_map: HashMap<String, String>,
    /// Prefix placed before each class name
    class_prefix: String,
    /// Whether syntax highlighting is enabled
    pub enabled: bool,
}

impl SyntaxManager {
    /// Create a syntax manager with the built-in languages
    pub fn new() -> Result<Self> {
        let mut manager = Self::empty();
        for lang in builtin::all_languages()? {
            manager.add_language(lang);
        }
        Ok(manager)
    }

    /// Create a manager with built-in languages and user settings applied
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut manager = Self::new()?;
        manager.enabled = config.highlight;
        manager.class_prefix = config.class_prefix.clone();
        Ok(manager)
    }

    /// Create a manager with no languages registered
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            tag_map: HashMap::new(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            enabled: true,
        }
    }

    /// Add a language definition
    ///
    /// Tags already claimed by another language move to the new one.
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for tag in &lang.tags {
            if let Some(previous) = self.tag_map.insert(tag.clone(), name.clone()) {
                if previous != name {
                    debug!(tag = %tag, from = %previous, to = %name, "language tag reassigned");
                }
            }
        }
        debug!(language = %name, tags = ?lang.tags, "registered language");
        self.languages.insert(name, lang);
    }

    /// Look up a language definition by tag
    pub fn language_for_tag(&self, tag: &str) -> Option<&LanguageDefinition> {
        self.tag_map.get(tag).and_then(|name| self.languages.get(name))
    }

    /// List registered language tags
    pub fn list_tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.tag_map.keys().map(|s| s.as_str()).collect();
        tags.sort();
        tags
    }

    /// Highlight raw source for a language tag
    pub fn highlight_source(&self, tag: &str, source: &str) -> Result<String> {
        let lang = self
            .language_for_tag(tag)
            .ok_or_else(|| HighlightError::UnknownLanguage(tag.to_string()))?;
        Ok(lang.highlight(source, &self.class_prefix))
    }

    /// Highlight a code block in place
    ///
    /// A processed block is never touched again. The first of the block's
    /// tags with a registered language is used; a block with none keeps
    /// its original content, unescaped, and stays unprocessed.
    pub fn highlight_block(&self, block: &mut CodeBlock) -> Outcome {
        if block.is_processed() {
            debug!("block already highlighted, skipping");
            return Outcome::AlreadyProcessed;
        }

        if !self.enabled {
            return Outcome::Disabled;
        }

        if block.languages().is_empty() {
            return Outcome::Untagged;
        }

        let Some(lang) = block
            .languages()
            .iter()
            .find_map(|tag| self.language_for_tag(tag))
        else {
            warn!(tags = ?block.languages(), "no language registered, leaving block as is");
            return Outcome::Unsupported;
        };

        let markup = lang.highlight(block.source(), &self.class_prefix);
        debug!(language = %lang.name, bytes = block.source().len(), "highlighted block");
        block.set_highlighted(markup);
        Outcome::Highlighted
    }

    /// Highlight every block, returning how many were newly highlighted
    pub fn highlight_all(&self, blocks: &mut [CodeBlock]) -> usize {
        blocks
            .iter_mut()
            .map(|block| self.highlight_block(block))
            .filter(|outcome| *outcome == Outcome::Highlighted)
            .count()
    }

    /// Toggle syntax highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::empty()
    }
}
