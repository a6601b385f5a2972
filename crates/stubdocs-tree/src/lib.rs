//! Source tree mirroring and MkDocs stub generation for stubdocs.
//!
//! [`StubGenerator`] walks a Python package directory and writes a parallel
//! tree of markdown stubs: one `index.md` per package directory and one
//! `<module>.md` per source file. Each stub carries a mkdocstrings `:::`
//! directive naming the package or module. The walk returns the visited
//! directory paths, which feed the `nav` section built by `stubdocs-config`.
//!
//! [`write_home_index`] writes the site landing page.

mod generator;
mod home;
mod options;
mod scanner;
mod template;

pub use generator::{GenerateError, StubGenerator, package_name};
pub use home::write_home_index;
pub use options::GenerateOptions;
pub use template::{qualified_name, render_home_index, render_module_stub, render_package_index};

/// Name of the generated index stub in every mirrored directory.
pub const INDEX_FILENAME: &str = "index.md";
