//! Built-in language definitions
//!
//! This module provides syntax highlighting definitions for the
//! languages that appear in the rule documentation.

mod bash;
mod php;

use super::language::LanguageDefinition;
use crate::error::Result;

pub use bash::bash_language;
pub use php::php_language;

/// Get all built-in language definitions
pub fn all_languages() -> Result<Vec<LanguageDefinition>> {
    Ok(vec![php::php_language()?, bash::bash_language()?])
}

/// ASCII-only word boundary: letters outside ASCII count as non-word
const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Build a whole-word alternation from a word list
fn word_set(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!("{WORD_BOUNDARY}(?:{}){WORD_BOUNDARY}", escaped.join("|"))
}
