use crate::constants::{exit_codes, verbosity, DEFAULT_ROSDISTRO, TEMPLATES_DIR_ENV};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for catkin-create-pkg.
#[derive(Parser, Debug, Clone)]
#[command(name = "catkin-create-pkg", author, version, about = "Creates a new catkin package", long_about = None)]
pub struct Args {
    /// Name of the new package.
    #[arg(value_name = "PACKAGE_NAME", required_unless_present = "metadata")]
    pub name: Option<String>,

    /// Catkin package dependencies.
    #[arg(value_name = "DEPENDENCIES")]
    pub dependencies: Vec<String>,

    /// Parent directory in which the package directory is created.
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Description of the package.
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// License name (repeatable).
    #[arg(short, long = "license")]
    pub licenses: Vec<String>,

    /// Author name (repeatable).
    #[arg(short, long = "author")]
    pub authors: Vec<String>,

    /// Maintainer name (repeatable); defaults to the current user.
    #[arg(short, long = "maintainer")]
    pub maintainers: Vec<String>,

    /// Initial package version.
    #[arg(long = "pkg-version")]
    pub pkg_version: Option<String>,

    /// ROS distro whose template set is used.
    #[arg(short, long, default_value = DEFAULT_ROSDISTRO)]
    pub rosdistro: String,

    /// Directory holding `<distro>/<file>.in` templates instead of the bundled ones.
    #[arg(long = "templates-dir", env = TEMPLATES_DIR_ENV)]
    pub templates_dir: Option<PathBuf>,

    /// Complete package metadata as YAML or JSON, or `-` to read from stdin.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["dependencies", "description", "licenses", "authors", "maintainers", "pkg_version"]
    )]
    pub metadata: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview files without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
