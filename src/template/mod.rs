//! Package file generation
//!
//! This module contains the components that turn package metadata into files:
//! - `tags`: one line of manifest markup per metadata value
//! - `context`: substitution contexts for the manifest and build description
//! - `processor`: renders the standard files and hands them to the writer

pub mod context;
pub mod processor;
pub mod tags;

use crate::error::Result;
use crate::ioutils::NewFiles;
use crate::loader::TemplateSource;
use crate::package::PackageTemplate;
use crate::renderer::get_template_engine;
use std::path::Path;

pub use processor::PackageProcessor;

/// Creates `package.xml` and `CMakeLists.txt` (unless overridden) plus any
/// extra `overrides` below `target_path`.
pub fn create_package_files<P: AsRef<Path>>(
    target_path: P,
    template: &PackageTemplate,
    source: &TemplateSource,
    distro: &str,
    overrides: Option<&NewFiles>,
) -> Result<()> {
    let engine = get_template_engine();
    let loader = source.loader();
    PackageProcessor::new(&engine, loader.as_ref(), distro).create_package_files(
        target_path,
        template,
        overrides,
    )
}
