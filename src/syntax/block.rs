//! Code blocks embedded in a documentation page

/// Highlighting state of a code block
///
/// `Processed` is terminal: a block is highlighted at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Unprocessed,
    Processed,
}

/// A code sample and the markup currently rendered for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    source: String,
    languages: Vec<String>,
    content: String,
    state: BlockState,
}

impl CodeBlock {
    /// Create an unprocessed block whose rendered content is its raw text
    pub fn new(source: &str, language: Option<&str>) -> Self {
        Self {
            source: source.to_string(),
            languages: language.into_iter().map(str::to_string).collect(),
            content: source.to_string(),
            state: BlockState::Unprocessed,
        }
    }

    /// Create a block, reading every `language-<tag>` class it carries
    pub fn with_classes(source: &str, classes: &str) -> Self {
        let mut block = Self::new(source, None);
        block.languages = languages_from_classes(classes)
            .into_iter()
            .map(str::to_string)
            .collect();
        block
    }

    /// Raw text of the sample
    pub fn source(&self) -> &str {
        &self.source
    }

    /// First declared language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    /// Every declared language tag, in class-list order
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Current rendered content
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn is_processed(&self) -> bool {
        self.state == BlockState::Processed
    }

    /// Replace the rendered content with highlighted markup
    pub(crate) fn set_highlighted(&mut self, markup: String) {
        self.content = markup;
        self.state = BlockState::Processed;
    }
}

/// Extract the tags of all `language-<tag>` classes in a class list
pub fn languages_from_classes(classes: &str) -> Vec<&str> {
    classes
        .split_whitespace()
        .filter_map(|class| class.strip_prefix("language-"))
        .filter(|tag| !tag.is_empty())
        .collect()
}
