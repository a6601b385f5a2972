//! MkDocs site configuration handling for stubdocs.
//!
//! Loads `mkdocs.yml` as a generic [`serde_yaml::Value`] tree so the `nav`
//! section can be rebuilt without knowing the schema of the rest of the
//! document. Every other top-level key keeps its value and position.
//!
//! The original file is never modified: the merged document is written next
//! to it with a `-new` suffix (see [`output_path`]).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! let paths = vec!["pkg".to_owned(), "pkg/sub".to_owned()];
//! let written = stubdocs_config::merge_nav(Path::new("mkdocs.yml"), &paths)?;
//! assert!(written.ends_with("mkdocs.yml-new"));
//! ```

mod nav;
mod tags;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

pub use nav::{build_nav, merge_nav, nav_text};

/// Configuration filename used when none is given on the command line.
pub const DEFAULT_CONFIG_FILENAME: &str = "mkdocs.yml";

/// Site name used when the document has no usable `site_name`.
pub const DEFAULT_SITE_NAME: &str = "Unnamed";

const NAV_KEY: &str = "nav";
const SITE_NAME_KEY: &str = "site_name";
const OUTPUT_SUFFIX: &str = "-new";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing or serialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The document parsed, but its root is not a mapping.
    #[error("Configuration root must be a mapping")]
    NotAMapping,
    /// The document uses a `!!` tag whose value would be lost on rewrite.
    #[error("Unsupported YAML tag {tag} on line {line}")]
    UnsupportedTag {
        /// Tag text, e.g. `!!python/name:module.attr`.
        tag: String,
        /// 1-based line number.
        line: usize,
    },
}

/// A loaded site configuration document.
///
/// Keys keep their document order. The only mutation offered is replacing
/// the navigation section.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    root: Mapping,
}

impl SiteConfig {
    /// Load a configuration document from disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file is missing, `Io` if it
    /// cannot be read, and `Parse`/`NotAMapping` for malformed content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration document from YAML text.
    ///
    /// Documents carrying `!!` tags outside the core schema (such as
    /// `!!python/name:...`) are refused with `ConfigError::UnsupportedTag`,
    /// since their values cannot be written back unchanged.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if let Some(found) = tags::find_unsupported_tag(content) {
            return Err(ConfigError::UnsupportedTag {
                tag: found.tag,
                line: found.line,
            });
        }
        match serde_yaml::from_str::<Value>(content)? {
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err(ConfigError::NotAMapping),
        }
    }

    /// Site title, falling back to [`DEFAULT_SITE_NAME`].
    ///
    /// Numeric and boolean scalars are rendered as text; any other value
    /// kind counts as absent.
    pub fn site_name(&self) -> String {
        match self.root.get(SITE_NAME_KEY) {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => DEFAULT_SITE_NAME.to_owned(),
        }
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Current navigation section, if any.
    pub fn nav(&self) -> Option<&Value> {
        self.get(NAV_KEY)
    }

    /// Replace the navigation section.
    ///
    /// Any existing `nav` key is dropped and the new one is appended after
    /// all other keys, whose relative order is unchanged.
    pub fn replace_nav(&mut self, nav: Value) {
        let root = std::mem::take(&mut self.root);
        self.root = root
            .into_iter()
            .filter(|(key, _)| key.as_str() != Some(NAV_KEY))
            .collect();
        self.root.insert(Value::String(NAV_KEY.to_owned()), nav);
    }

    /// Serialize the document to YAML text.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Write the document to `path`, creating or truncating it.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

/// Path of the merged document written for `config_path`.
///
/// `mkdocs.yml` becomes `mkdocs.yml-new` in the same directory.
#[must_use]
pub fn output_path(config_path: &Path) -> PathBuf {
    let mut name = OsString::from(config_path.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}
