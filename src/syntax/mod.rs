//! Syntax highlighting module
//!
//! This module turns raw code samples into markup:
//! - Grammars of ordered, regex-backed token categories
//! - A scanner that splits source into classified tokens and gaps
//! - Per-language classifiers and the built-in PHP and Bash definitions
//! - A manager that highlights tagged code blocks exactly once

mod block;
mod builtin;
mod classify;
mod engine;
mod escape;
mod language;
mod manager;
mod rules;
mod tokens;

pub use block::{languages_from_classes, BlockState, CodeBlock};
pub use builtin::{all_languages, bash_language, php_language};
pub use classify::{Classifier, Predicate};
pub use engine::{highlight, highlight_with_prefix, render, tokenize, Segment};
pub use escape::{escape, escape_into};
pub use language::LanguageDefinition;
pub use manager::{Outcome, SyntaxManager};
pub use rules::{Category, Grammar, Match};
pub use tokens::{TokenClass, DEFAULT_CLASS_PREFIX};
