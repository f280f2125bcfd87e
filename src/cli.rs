//! Command-line interface implementation for dropin.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::constants::{exit_codes, verbosity};

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Command-line arguments structure for dropin.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "dropin: scaffold a project from AppTemplate with your own entities",
    long_about = None
)]
pub struct Args {
    /// AppTemplate directory, or the target when it is the only path given
    #[arg(value_name = "SOURCE")]
    pub first: PathBuf,

    /// Directory the project is written into
    #[arg(value_name = "TARGET")]
    pub second: Option<PathBuf>,

    /// Comma-separated entity names, e.g. Book,Library
    #[arg(long, value_delimiter = ',', required = true)]
    pub entities: Vec<String>,

    /// Project name (defaults to the target directory name)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Go module path (defaults to github.com/$USER/<project-name>)
    #[arg(long)]
    pub module_path: Option<String>,

    /// Drop the template AppItem entity from the generated project
    #[arg(long)]
    pub exclude_appitem: bool,

    /// Show what would be done without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Do not run `buf generate` and the frontend build afterwards
    #[arg(long)]
    pub skip_codegen: bool,

    /// Exclusion config file (defaults to dropin.json/.yaml/.yml in the source)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The explicitly given source, if two paths were passed.
    pub fn source(&self) -> Option<&PathBuf> {
        self.second.as_ref().map(|_| &self.first)
    }

    /// The target directory, whichever position it was given in.
    pub fn target(&self) -> &PathBuf {
        self.second.as_ref().unwrap_or(&self.first)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to a log level. Warnings stay visible by default.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
