//! Stub generation command.

use std::path::PathBuf;

use clap::Args;
use stubdocs_config::{DEFAULT_CONFIG_FILENAME, merge_nav};
use stubdocs_tree::{StubGenerator, write_home_index};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for stub generation.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Python package directory to document.
    pub(crate) source: PathBuf,

    /// Documentation directory that receives the generated stubs.
    pub(crate) docs: PathBuf,

    /// MkDocs configuration file. The merged copy is written to `<CONFIG>-new`.
    #[arg(default_value = DEFAULT_CONFIG_FILENAME)]
    pub(crate) config: PathBuf,
}

impl GenerateArgs {
    /// Generate stubs, write the home page, then merge the navigation.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        output.info(&format!("Source: {}", self.source.display()));
        output.info(&format!("Output: {}", self.docs.display()));

        let nav_paths = StubGenerator::default().generate(&self.source, &self.docs)?;
        write_home_index(&self.source, &self.docs, &self.config)?;

        tracing::debug!(
            packages = nav_paths.len(),
            config = %self.config.display(),
            "Merging navigation"
        );
        let merged = merge_nav(&self.config, &nav_paths)?;

        output.success(&format!(
            "Generated stubs for {} packages; navigation written to {}",
            nav_paths.len(),
            merged.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use stubdocs_config::{ConfigError, SiteConfig};
    use stubdocs_tree::GenerateError;

    fn args(source: &Path, docs: &Path, config: &Path) -> GenerateArgs {
        GenerateArgs {
            source: source.to_path_buf(),
            docs: docs.to_path_buf(),
            config: config.to_path_buf(),
        }
    }

    fn project() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src/app/api")).unwrap();
        fs::write(root.join("src/app/__init__.py"), "").unwrap();
        fs::write(root.join("src/app/main.py"), "").unwrap();
        fs::write(root.join("src/app/api/routes.py"), "").unwrap();
        fs::write(
            root.join("mkdocs.yml"),
            "site_name: App Docs\nnav:\n  - Old: old.md\nplugins:\n  - mkdocstrings\n",
        )
        .unwrap();
        temp_dir
    }

    #[test]
    fn test_execute_full_pipeline() {
        let temp_dir = project();
        let root = temp_dir.path();
        let docs = root.join("docs");
        let config = root.join("mkdocs.yml");

        args(&root.join("src/app"), &docs, &config).execute().unwrap();

        assert!(docs.join("index.md").exists());
        assert!(docs.join("app/index.md").exists());
        assert!(docs.join("app/main.md").exists());
        assert!(docs.join("app/api/routes.md").exists());

        let home = fs::read_to_string(docs.join("index.md")).unwrap();
        assert!(home.starts_with("# App Docs\n"));

        let merged = SiteConfig::load(&root.join("mkdocs.yml-new")).unwrap();
        let nav = merged.nav().unwrap().as_sequence().unwrap();
        assert_eq!(nav.len(), 3);
        assert!(nav[1].as_mapping().unwrap().contains_key("app"));
        assert!(nav[2].as_mapping().unwrap().contains_key("api"));
        assert_eq!(
            merged.get("plugins"),
            SiteConfig::load(&config).unwrap().get("plugins")
        );
    }

    #[test]
    fn test_execute_missing_source() {
        let temp_dir = project();
        let root = temp_dir.path();

        let result = args(&root.join("nope"), &root.join("docs"), &root.join("mkdocs.yml"))
            .execute();

        assert!(matches!(
            result,
            Err(CliError::Generate(GenerateError::SourceNotFound(_)))
        ));
        assert!(!root.join("docs").exists());
        assert!(!root.join("mkdocs.yml-new").exists());
    }

    #[test]
    fn test_execute_missing_config() {
        let temp_dir = project();
        let root = temp_dir.path();
        let docs = root.join("docs");

        let result = args(&root.join("src/app"), &docs, &root.join("other.yml")).execute();

        assert!(matches!(
            result,
            Err(CliError::Generate(GenerateError::Config(
                ConfigError::NotFound(_)
            )))
        ));
        // Stubs written before the failure stay in place.
        assert!(docs.join("app/index.md").exists());
    }
}
