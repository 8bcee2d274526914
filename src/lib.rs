//! dochl - highlighting and navigation helpers for static rule documentation
//!
//! The core is [`syntax`], which decorates embedded code samples with
//! span markup. [`filter`] narrows the rule list by text and [`nav`]
//! tracks which section the sidebar should mark active.

pub mod config;
pub mod error;
pub mod filter;
pub mod nav;
pub mod syntax;

pub use config::Config;
pub use error::{HighlightError, Result};
