//! CLI error types.

use stubdocs_config::ConfigError;
use stubdocs_tree::GenerateError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Generate(#[from] GenerateError),
}
