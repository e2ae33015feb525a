use crate::constants::{CMAKELISTS_FILENAME, PACKAGE_MANIFEST_FILENAME};
use crate::error::{Error, Result};
use crate::ioutils::{normalize_key, safe_write_files, NewFiles};
use crate::loader::TemplateLoader;
use crate::package::PackageTemplate;
use crate::renderer::TemplateRenderer;
use crate::template::context::{cmakelists_context, package_xml_context};
use std::path::{Path, PathBuf};

/// Renders the standard package files for one distro.
pub struct PackageProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    loader: &'a dyn TemplateLoader,
    distro: &'a str,
}

impl<'a> PackageProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        loader: &'a dyn TemplateLoader,
        distro: &'a str,
    ) -> Self {
        Self { engine, loader, distro }
    }

    /// Contents of `package.xml`.
    pub fn create_package_xml(&self, template: &PackageTemplate) -> Result<String> {
        let text = self.loader.read_template(PACKAGE_MANIFEST_FILENAME, self.distro)?;
        self.engine.render(&text, &package_xml_context(template))
    }

    /// Contents of `CMakeLists.txt`.
    pub fn create_cmakelists(&self, template: &PackageTemplate) -> Result<String> {
        let text = self.loader.read_template(CMAKELISTS_FILENAME, self.distro)?;
        self.engine.render(&text, &cmakelists_context(template))
    }

    /// Generated files merged with `overrides`; an override replaces the
    /// generated file at the same relative path, which is then not rendered.
    ///
    /// Override keys are compared and returned without `.` components. Two
    /// overrides naming the same file are rejected.
    pub fn package_files(
        &self,
        template: &PackageTemplate,
        overrides: Option<&NewFiles>,
    ) -> Result<NewFiles> {
        let mut extra = NewFiles::new();
        for (path, content) in overrides.into_iter().flatten() {
            let key = normalize_key(path);
            if extra.contains_key(&key) {
                return Err(Error::FileExists { path: key.display().to_string() });
            }
            extra.insert(key, content.clone());
        }
        let mut files = NewFiles::new();

        let manifest_path = PathBuf::from(PACKAGE_MANIFEST_FILENAME);
        if !extra.contains_key(&manifest_path) {
            files.insert(manifest_path, self.create_package_xml(template)?.into_bytes());
        }
        let cmake_path = PathBuf::from(CMAKELISTS_FILENAME);
        if !extra.contains_key(&cmake_path) {
            files.insert(cmake_path, self.create_cmakelists(template)?.into_bytes());
        }

        files.extend(extra);
        Ok(files)
    }

    /// Renders the package files and writes them below `target_path`.
    pub fn create_package_files<P: AsRef<Path>>(
        &self,
        target_path: P,
        template: &PackageTemplate,
        overrides: Option<&NewFiles>,
    ) -> Result<()> {
        let files = self.package_files(template, overrides)?;
        log::debug!(
            "Creating {} file(s) for '{}' in '{}'",
            files.len(),
            template.package().name,
            target_path.as_ref().display()
        );
        safe_write_files(&files, target_path)
    }
}
