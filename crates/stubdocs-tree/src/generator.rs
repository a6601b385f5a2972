//! Source tree mirroring and stub writing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stubdocs_config::ConfigError;

use crate::INDEX_FILENAME;
use crate::options::GenerateOptions;
use crate::scanner::scan_dir;
use crate::template::{qualified_name, render_module_stub, render_package_index};

/// Error returned by stub generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Source root is missing or not a directory.
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// No package name can be derived from the source root (e.g. `/`).
    #[error("Cannot derive a package name from {}", .0.display())]
    InvalidSource(PathBuf),
    /// A directory or source file name is not valid UTF-8.
    #[error("Name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),
    /// Filesystem failure while reading the source or writing stubs.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Site configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),
}

pub(crate) fn io_error(path: &Path) -> impl FnOnce(io::Error) -> GenerateError + '_ {
    move |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Walk state shared across the recursion.
#[derive(Default)]
struct Walk {
    nav_paths: Vec<String>,
    modules: usize,
}

/// Mirrors a Python source tree into a tree of MkDocs stubs.
#[derive(Debug, Default)]
pub struct StubGenerator {
    options: GenerateOptions,
}

impl StubGenerator {
    /// Create a generator with the given traversal rules.
    #[must_use]
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate stubs for `source_root` under `dest_root`.
    ///
    /// Directories are visited in pre-order. Each one is mirrored at its path
    /// relative to the source root's parent, so `src/pkg/sub` lands in
    /// `<dest_root>/pkg/sub/`. Existing destination directories are reused
    /// and existing stubs are overwritten.
    ///
    /// Returns the visited directory paths (`pkg`, `pkg/sub`, ...) in
    /// traversal order.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::SourceNotFound` before touching the
    /// destination if the source root is not a directory, and
    /// `GenerateError::Io` on the first filesystem failure. A directory or
    /// source file whose name is not valid UTF-8 is
    /// `GenerateError::NonUtf8Name`. Stubs written
    /// before a failure are left in place.
    pub fn generate(
        &self,
        source_root: &Path,
        dest_root: &Path,
    ) -> Result<Vec<String>, GenerateError> {
        if !source_root.is_dir() {
            return Err(GenerateError::SourceNotFound(source_root.to_path_buf()));
        }
        let root_name = package_name(source_root)?;

        tracing::info!(
            source = %source_root.display(),
            dest = %dest_root.display(),
            "Generating documentation stubs"
        );

        let mut walk = Walk::default();
        self.visit(source_root, &root_name, dest_root, &mut walk)?;

        tracing::info!(
            packages = walk.nav_paths.len(),
            modules = walk.modules,
            "Generated documentation stubs"
        );
        Ok(walk.nav_paths)
    }

    fn visit(
        &self,
        dir: &Path,
        rel_path: &str,
        dest_root: &Path,
        walk: &mut Walk,
    ) -> Result<(), GenerateError> {
        walk.nav_paths.push(rel_path.to_owned());

        let listing = scan_dir(dir, &self.options)?;

        let dest_dir = dest_root.join(rel_path);
        fs::create_dir_all(&dest_dir).map_err(io_error(&dest_dir))?;

        let package = qualified_name(rel_path);
        tracing::debug!(
            package = %package,
            subpackages = listing.subdirs.len(),
            modules = listing.modules.len(),
            "Writing package index"
        );
        let index =
            render_package_index(&package, &listing.sorted_subdir_names(), &listing.modules);
        write_stub(&dest_dir.join(INDEX_FILENAME), &index)?;

        for stem in &listing.modules {
            tracing::debug!(module = %format!("{package}.{stem}"), "Writing module stub");
            write_stub(
                &dest_dir.join(format!("{stem}.md")),
                &render_module_stub(&package, stem),
            )?;
        }
        walk.modules += listing.modules.len();

        for sub in &listing.subdirs {
            let child = format!("{rel_path}/{}", sub.name);
            self.visit(&sub.path, &child, dest_root, walk)?;
        }
        Ok(())
    }
}

fn write_stub(path: &Path, content: &str) -> Result<(), GenerateError> {
    fs::write(path, content).map_err(io_error(path))
}

/// Top-level package name for a source root: its final path component.
///
/// Roots such as `.` or `..` are resolved first so they name the real
/// directory.
///
/// # Errors
///
/// Returns `GenerateError::Io` if a relative root cannot be resolved,
/// `GenerateError::InvalidSource` if it has no final component, and
/// `GenerateError::NonUtf8Name` if that component is not valid UTF-8.
pub fn package_name(source_root: &Path) -> Result<String, GenerateError> {
    let name = match source_root.file_name() {
        Some(name) => name.to_owned(),
        None => fs::canonicalize(source_root)
            .map_err(io_error(source_root))?
            .file_name()
            .map(ToOwned::to_owned)
            .ok_or_else(|| GenerateError::InvalidSource(source_root.to_path_buf()))?,
    };
    name.into_string().map_err(|_| GenerateError::NonUtf8Name(source_root.to_path_buf()))
}
