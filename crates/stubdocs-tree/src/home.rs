//! Site landing page.

use std::fs;
use std::path::Path;

use chrono::Local;
use stubdocs_config::SiteConfig;

use crate::INDEX_FILENAME;
use crate::generator::{GenerateError, package_name};
use crate::template::render_home_index;

/// C `asctime` layout, e.g. `Sun Oct 18 09:05:00 2026`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Write `<dest_root>/index.md` with the site name from `config_path` and a
/// link to the top-level package.
///
/// The configuration is loaded here on its own; nothing is shared with the
/// navigation merge.
///
/// # Errors
///
/// Returns `GenerateError::Config` if the configuration cannot be loaded
/// and `GenerateError::Io` if the page cannot be written.
pub fn write_home_index(
    source_root: &Path,
    dest_root: &Path,
    config_path: &Path,
) -> Result<(), GenerateError> {
    let config = SiteConfig::load(config_path)?;
    let package = package_name(source_root)?;
    let generated = Local::now().format(TIMESTAMP_FORMAT).to_string();

    let path = dest_root.join(INDEX_FILENAME);
    let content = render_home_index(&config.site_name(), &package, &generated);
    fs::write(&path, content).map_err(|source| GenerateError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Wrote home index");
    Ok(())
}
