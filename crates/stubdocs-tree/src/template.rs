//! Markdown stub templates.
//!
//! Every stub starts with a blank line so the heading is picked up by the
//! MkDocs markdown processor.

use std::fmt::Write;

/// Dotted name for a `/`-separated relative path (`pkg/sub` -> `pkg.sub`).
pub fn qualified_name(rel_path: &str) -> String {
    rel_path.replace('/', ".")
}

/// Render the `index.md` stub for a package directory.
///
/// The "Subpackages" and "Modules" sections are omitted when empty.
pub fn render_package_index(package: &str, subpackages: &[&str], modules: &[String]) -> String {
    let mut md = String::with_capacity(128);

    let _ = write!(md, "\n# Package: {package}\n\n");
    let _ = writeln!(md, "::: {package}");
    md.push_str("\n-----\n\n");

    if !subpackages.is_empty() {
        md.push_str("## Subpackages\n\n");
        for name in subpackages {
            let _ = writeln!(md, "* [{name}]({name})");
        }
        md.push('\n');
    }

    if !modules.is_empty() {
        md.push_str("## Modules\n\n");
        for stem in modules {
            let _ = writeln!(md, "* [{stem}]({stem}.md)");
        }
    }

    md
}

/// Render the stub for module `stem` inside `package`.
pub fn render_module_stub(package: &str, stem: &str) -> String {
    format!("\n# Module: {package}.{stem}\n\n::: {package}.{stem}")
}

/// Render the site landing page.
pub fn render_home_index(site_name: &str, package: &str, generated: &str) -> String {
    format!("# {site_name}\n\nGenerated: {generated}\n\n## Package: [{package}]({package})\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name("pkg"), "pkg");
        assert_eq!(qualified_name("pkg/sub/deep"), "pkg.sub.deep");
    }

    #[test]
    fn test_package_index_full() {
        let md = render_package_index(
            "pkg.sub",
            &["alpha", "beta"],
            &["core".to_owned(), "util".to_owned()],
        );
        assert_eq!(
            md,
            "\n# Package: pkg.sub\n\n::: pkg.sub\n\n-----\n\n\
             ## Subpackages\n\n* [alpha](alpha)\n* [beta](beta)\n\n\
             ## Modules\n\n* [core](core.md)\n* [util](util.md)\n"
        );
    }

    #[test]
    fn test_package_index_without_subpackages() {
        let md = render_package_index("pkg", &[], &["core".to_owned()]);
        assert!(!md.contains("## Subpackages"));
        assert!(md.contains("## Modules\n\n* [core](core.md)\n"));
    }

    #[test]
    fn test_package_index_without_modules() {
        let md = render_package_index("pkg", &["sub"], &[]);
        assert!(md.contains("## Subpackages\n\n* [sub](sub)\n\n"));
        assert!(!md.contains("## Modules"));
    }

    #[test]
    fn test_package_index_empty_package() {
        let md = render_package_index("pkg", &[], &[]);
        assert_eq!(md, "\n# Package: pkg\n\n::: pkg\n\n-----\n\n");
    }

    #[test]
    fn test_module_stub() {
        assert_eq!(
            render_module_stub("pkg.sub", "mod"),
            "\n# Module: pkg.sub.mod\n\n::: pkg.sub.mod"
        );
    }

    #[test]
    fn test_home_index() {
        assert_eq!(
            render_home_index("My Docs", "pkg", "Sun Oct 18 09:05:00 2026"),
            "# My Docs\n\nGenerated: Sun Oct 18 09:05:00 2026\n\n## Package: [pkg](pkg)\n\n"
        );
    }
}
