//! Configuration file support
//!
//! Loads settings from ~/.dochl.toml (or %USERPROFILE%\.dochl.toml on Windows)
//!
//! Example:
//! ```text
//! # dochl configuration
//! highlight = true
//! class-prefix = "tok-"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::warn;

use crate::error::Result;
use crate::syntax::DEFAULT_CLASS_PREFIX;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether code blocks get highlighted at all
    pub highlight: bool,
    /// Prefix placed before every token class name
    pub class_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight: true,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".dochl.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".dochl.toml"))
        }
    }

    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Build configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config = Config::default();
        config.apply(&Self::parse(contents)?);
        Ok(config)
    }

    /// Parse config file contents into a table
    fn parse(contents: &str) -> Result<Table> {
        Ok(contents.parse::<Table>()?)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, settings: &Table) {
        if let Some(value) = settings.get("highlight").and_then(parse_bool) {
            self.highlight = value;
        }

        if let Some(prefix) = settings.get("class-prefix").and_then(Value::as_str) {
            if is_valid_prefix(prefix) {
                self.class_prefix = prefix.to_string();
            } else {
                warn!(prefix, "ignoring class-prefix with reserved characters");
            }
        }
    }

    /// Render the current configuration as TOML
    pub fn to_toml(&self) -> String {
        let mut table = Table::new();
        table.insert("highlight".to_string(), Value::Boolean(self.highlight));
        table.insert(
            "class-prefix".to_string(),
            Value::String(self.class_prefix.clone()),
        );
        format!("# dochl configuration\n\n{}", table)
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            fs::write(path, self.to_toml())?;
        }
        Ok(())
    }
}

/// Parse a boolean value, accepting a few string spellings
fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Integer(n) => Some(*n != 0),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// A prefix ends up inside a class attribute, so it must not need escaping
fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && !prefix
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '&' | '"' | '\''))
}
