//! Navigation section builder and merger.
//!
//! Directory paths are sorted as plain strings and emitted as one flat
//! sequence: a `Home` entry followed by one entry per directory, keyed by
//! the directory's last path segment, whose single child points at that
//! directory's `index.md`.
//!
//! ```yaml
//! - Home: index.md
//! - pkg:
//!   - index: pkg/index.md
//! - sub:
//!   - index: pkg/sub/index.md
//! ```

use std::fmt::Write;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::{ConfigError, SiteConfig, output_path};

const INDENT: &str = "  ";
const HOME_TITLE: &str = "Home";
const HOME_PAGE: &str = "index.md";
const INDEX_KEY: &str = "index";

/// Render the navigation section as indented YAML text.
///
/// Paths are sorted lexicographically by their full string, so `a` precedes
/// `a/b` precedes `c`. All entries sit at the same depth.
pub fn nav_text(paths: &[String]) -> String {
    let mut sorted: Vec<&str> = paths.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut text = String::new();
    let _ = writeln!(
        text,
        "{INDENT}- {}: {}",
        quote(HOME_TITLE),
        quote(HOME_PAGE)
    );
    for path in sorted {
        let name = path.rsplit_once('/').map_or(path, |(_, last)| last);
        let _ = writeln!(text, "{INDENT}- {}:", quote(name));
        let _ = writeln!(
            text,
            "{INDENT}{INDENT}- {}: {}",
            quote(INDEX_KEY),
            quote(&format!("{path}/{HOME_PAGE}"))
        );
    }
    text
}

/// Build the navigation section as a YAML value.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the rendered text does not parse back.
pub fn build_nav(paths: &[String]) -> Result<Value, ConfigError> {
    Ok(serde_yaml::from_str(&nav_text(paths))?)
}

/// Merge a navigation section built from `paths` into the document at
/// `config_path` and write the result to `<config_path>-new`.
///
/// Returns the path of the written document. The original file is left
/// untouched.
///
/// # Errors
///
/// Returns `ConfigError` if the document cannot be read or parsed, or the
/// merged document cannot be written.
pub fn merge_nav(config_path: &Path, paths: &[String]) -> Result<PathBuf, ConfigError> {
    let mut config = SiteConfig::load(config_path)?;
    let nav = build_nav(paths)?;

    if config.nav().is_some() {
        tracing::debug!(path = %config_path.display(), "Replacing existing nav section");
    }
    config.replace_nav(nav);

    let output = output_path(config_path);
    config.save(&output)?;

    tracing::info!(
        path = %output.display(),
        entries = paths.len() + 1,
        "Wrote navigation"
    );
    Ok(output)
}

/// Quote a string as a double-quoted YAML scalar.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\u{85}' => quoted.push_str("\\N"),
            '\u{2028}' => quoted.push_str("\\L"),
            '\u{2029}' => quoted.push_str("\\P"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", u32::from(c));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
