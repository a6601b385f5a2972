//! stubdocs CLI - MkDocs API stubs for Python packages.
//!
//! `stubdocs <SOURCE> <DOCS> [CONFIG]` mirrors the package at `SOURCE` into
//! markdown stubs under `DOCS`, writes `DOCS/index.md`, and writes
//! `<CONFIG>-new` with a rebuilt `nav` section. `CONFIG` defaults to
//! `mkdocs.yml` and is never modified.

mod error;
mod generate;
mod output;

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use error::CliError;
use generate::GenerateArgs;
use output::Output;

/// stubdocs - Generate MkDocs API stubs from a Python source tree.
#[derive(Parser)]
#[command(name = "stubdocs", version, about)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable info-level logging.
    #[arg(short, long)]
    verbose: bool,
}

/// How a run ended.
#[derive(Debug)]
enum Exit {
    Success,
    /// Help or version output was requested.
    Info(clap::Error),
    BadArgument,
    Failed(CliError),
}

impl Exit {
    fn code(&self) -> i32 {
        match self {
            Self::Success | Self::Info(_) => 0,
            Self::BadArgument | Self::Failed(_) => 1,
        }
    }

    /// Line reported on stderr for a failed run.
    fn message(&self) -> Option<String> {
        match self {
            Self::Success | Self::Info(_) => None,
            Self::BadArgument => Some("error: bad/missing argument".to_owned()),
            Self::Failed(err) => Some(format!("failed with exception ({err})")),
        }
    }
}

fn run<I, T>(args: I) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Exit::Info(err);
        }
        Err(_) => return Exit::BadArgument,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG (errors only when unset)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match cli.generate.execute() {
        Ok(()) => Exit::Success,
        Err(err) => Exit::Failed(err),
    }
}

fn main() {
    let exit = run(std::env::args_os());

    if let Exit::Info(err) = &exit {
        let _ = err.print();
    }
    if let Some(message) = exit.message() {
        Output::new().error(&message);
    }
    std::process::exit(exit.code());
}
