/// Handles argument parsing and the command line workflow.
pub mod cli;

/// Loading of package metadata files.
pub mod config;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template sources for the supported distros.
pub mod loader;

/// Package metadata record.
pub mod package;

/// Placeholder substitution.
pub mod renderer;

/// Rendering of package files from metadata.
pub mod template;

pub use ioutils::{safe_write_files, NewFiles};
pub use package::{CreateArgs, Package, PackageTemplate};
pub use template::create_package_files;
