//! Classification of a single source directory.
//!
//! The scanner reads a directory once and returns fresh lists of the
//! subdirectories to descend into and the modules to document. Nothing is
//! written at this stage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::{GenerateError, io_error};
use crate::options::GenerateOptions;

/// A subdirectory selected for traversal.
#[derive(Debug, Clone)]
pub(crate) struct SubDir {
    /// Directory name as shown in the stubs.
    pub name: String,
    /// Source path to descend into.
    pub path: PathBuf,
}

/// Classified contents of one source directory.
#[derive(Debug, Default)]
pub(crate) struct DirListing {
    /// Subdirectories in directory-read order, exclusions already removed.
    pub subdirs: Vec<SubDir>,
    /// Module stems of qualifying files, sorted.
    pub modules: Vec<String>,
}

impl DirListing {
    /// Subdirectory names sorted for the "Subpackages" listing.
    pub fn sorted_subdir_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.subdirs.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Read `dir` and classify its entries.
///
/// Symbolic links to directories are neither listed nor followed; links to
/// regular files count as files.
///
/// Names are used verbatim in stub paths and dotted names, so a
/// subdirectory or source file whose name is not valid UTF-8 is an error.
/// Other entries with such names are ignored.
pub(crate) fn scan_dir(
    dir: &Path,
    options: &GenerateOptions,
) -> Result<DirListing, GenerateError> {
    let mut listing = DirListing::default();

    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();
        let is_dir = entry.file_type().map_err(io_error(&path))?.is_dir();

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                let lossy = raw.to_string_lossy();
                let excluded = if is_dir {
                    options.is_excluded_dir(&lossy)
                } else {
                    !path.is_file() || options.module_stem(&lossy).is_none()
                };
                if excluded {
                    continue;
                }
                return Err(GenerateError::NonUtf8Name(path));
            }
        };

        if is_dir {
            if options.is_excluded_dir(&name) {
                tracing::debug!(path = %path.display(), "Skipping excluded directory");
                continue;
            }
            listing.subdirs.push(SubDir { name, path });
        } else if path.is_file() {
            if let Some(stem) = options.module_stem(&name) {
                listing.modules.push(stem.to_owned());
            }
        }
    }

    listing.modules.sort_unstable();
    Ok(listing)
}
