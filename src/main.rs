//! dochl - highlight a code sample as documentation markup
//!
//! Reads a source file (or stdin) and writes span-wrapped markup to stdout.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use dochl::syntax::SyntaxManager;
use dochl::{Config, HighlightError, Result};

/// Parsed command line
struct Options {
    lang: String,
    file: Option<String>,
    list: bool,
    highlight: bool,
}

/// What the command line asked for
enum Command {
    Run(Options),
    Help,
    Version,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
        Command::Run(options) => options,
    };

    let config = Config::load();
    let mut manager = SyntaxManager::from_config(&config)?;
    if !options.highlight {
        manager.enabled = false;
    }

    if options.list {
        for tag in manager.list_tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let source = match &options.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(lang = %options.lang, bytes = source.len(), "highlighting input");

    let output = render_output(&manager, &options.lang, source)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Choose what to write for `source`
///
/// Disabled highlighting and unregistered tags both pass the source
/// through unchanged.
fn render_output(manager: &SyntaxManager, tag: &str, source: String) -> Result<String> {
    if !manager.enabled {
        return Ok(source);
    }

    match manager.highlight_source(tag, &source) {
        Ok(markup) => Ok(markup),
        Err(HighlightError::UnknownLanguage(tag)) => {
            warn!(tag = %tag, "unsupported language, writing source unchanged");
            Ok(source)
        }
        Err(e) => Err(e),
    }
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options {
        lang: "php".to_string(),
        file: None,
        list: false,
        highlight: true,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--list" => options.list = true,
            "--no-highlight" => options.highlight = false,
            "--lang" | "-l" => {
                let tag = iter.next().ok_or_else(|| {
                    HighlightError::Message(format!("{} requires a language tag", arg))
                })?;
                options.lang = tag.clone();
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(HighlightError::Message(format!("Unknown option: {}", other)));
            }
            path => {
                if options.file.is_some() {
                    return Err(HighlightError::Message("Only one input file may be given".to_string()));
                }
                if path != "-" {
                    options.file = Some(path.to_string());
                }
            }
        }
    }

    Ok(Command::Run(options))
}

fn print_usage() {
    println!("dochl {} - highlight code samples for documentation", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: dochl [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin when FILE is omitted or '-') and writes markup to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --lang TAG     Language tag of the input (default: php)");
    println!("      --list         List registered language tags");
    println!("      --no-highlight Write the input unchanged");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("Settings are read from ~/.dochl.toml; set RUST_LOG for diagnostics.");
}

fn print_version() {
    println!("dochl {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let Command::Run(options) = parse_args(&[]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(options.lang, "php");
        assert!(options.file.is_none());
        assert!(options.highlight);
        assert!(!options.list);
    }

    #[test]
    fn test_lang_and_file() {
        let Command::Run(options) = parse_args(&args(&["-l", "bash", "install.sh"])).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(options.lang, "bash");
        assert_eq!(options.file.as_deref(), Some("install.sh"));
    }

    #[test]
    fn test_help_short_circuits() {
        assert!(matches!(parse_args(&args(&["x.php", "--help"])).unwrap(), Command::Help));
        assert!(matches!(parse_args(&args(&["-V"])).unwrap(), Command::Version));
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(&args(&["--lang"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["a", "b"])).is_err());
    }

    #[test]
    fn test_unknown_language_writes_source_unchanged() {
        let manager = SyntaxManager::new().unwrap();
        let output = render_output(&manager, "ruby", "<script>".to_string()).unwrap();
        assert_eq!(output, "<script>");
    }

    #[test]
    fn test_disabled_highlighting_passes_through() {
        let mut manager = SyntaxManager::new().unwrap();
        manager.enabled = false;
        let output = render_output(&manager, "php", "<?php $x".to_string()).unwrap();
        assert_eq!(output, "<?php $x");
    }

    #[test]
    fn test_known_language_is_highlighted() {
        let manager = SyntaxManager::new().unwrap();
        let output = render_output(&manager, "bash", "cp a b".to_string()).unwrap();
        assert_eq!(output, "<span class=\"tok-func\">cp</span> a b");
    }

    #[test]
    fn test_dash_means_stdin() {
        let Command::Run(options) = parse_args(&args(&["-"])).unwrap() else {
            panic!("expected run");
        };
        assert!(options.file.is_none());
    }
}
