//! Traversal rules for the stub generator.

/// Rules deciding which directories and files become stubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Suffix a file must carry to count as a module (e.g. `.py`).
    pub source_suffix: String,
    /// File that marks a directory as a package. It is documented through
    /// the directory's own index, never as a separate module.
    pub package_marker: String,
    /// Directory names skipped together with their whole subtree.
    pub excluded_dirs: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            source_suffix: ".py".to_owned(),
            package_marker: "__init__.py".to_owned(),
            excluded_dirs: vec!["__pycache__".to_owned()],
        }
    }
}

impl GenerateOptions {
    /// Whether a directory named `name` is skipped.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|excluded| excluded == name)
    }

    /// Module stem for a qualifying file name, `None` otherwise.
    ///
    /// `util.py` -> `Some("util")`; `__init__.py`, `README.md` and a bare
    /// `.py` yield `None`.
    pub fn module_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if file_name == self.package_marker {
            return None;
        }
        file_name
            .strip_suffix(self.source_suffix.as_str())
            .filter(|stem| !stem.is_empty())
    }
}
