use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;
use std::path::{Path, PathBuf};

/// Loader for template sets stored on the local filesystem as
/// `<root>/<distro>/<filename>.in`.
pub struct LocalLoader<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(root: P) -> Self {
        Self { root }
    }

    /// Path at which the template for `filename` and `distro` is expected.
    pub fn template_path(&self, filename: &str, distro: &str) -> PathBuf {
        self.root.as_ref().join(distro).join(format!("{filename}{TEMPLATE_SUFFIX}"))
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    fn read_template(&self, filename: &str, distro: &str) -> Result<String> {
        let path = self.template_path(filename, distro);
        if !path.is_file() {
            return Err(Error::TemplateNotFound {
                distro: distro.to_string(),
                path: path.display().to_string(),
            });
        }
        log::debug!("Reading template '{}'", path.display());
        Ok(std::fs::read_to_string(path)?)
    }
}
