use crate::constants::{CMAKELISTS_FILENAME, PACKAGE_MANIFEST_FILENAME, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;

/// (distro, file name, template text) compiled into the binary.
const BUNDLED_TEMPLATES: &[(&str, &str, &str)] = &[
    (
        "groovy",
        PACKAGE_MANIFEST_FILENAME,
        include_str!("../../templates/groovy/package.xml.in"),
    ),
    (
        "groovy",
        CMAKELISTS_FILENAME,
        include_str!("../../templates/groovy/CMakeLists.txt.in"),
    ),
    (
        "indigo",
        PACKAGE_MANIFEST_FILENAME,
        include_str!("../../templates/indigo/package.xml.in"),
    ),
    (
        "indigo",
        CMAKELISTS_FILENAME,
        include_str!("../../templates/indigo/CMakeLists.txt.in"),
    ),
];

/// Loader for the template sets shipped with the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledLoader;

impl BundledLoader {
    pub fn new() -> Self {
        Self
    }

    /// Distros with a bundled template set, in declaration order.
    fn distros(&self) -> Vec<&'static str> {
        let mut distros: Vec<&'static str> = Vec::new();
        for &(distro, _, _) in BUNDLED_TEMPLATES {
            if !distros.contains(&distro) {
                distros.push(distro);
            }
        }
        distros
    }
}

impl TemplateLoader for BundledLoader {
    fn read_template(&self, filename: &str, distro: &str) -> Result<String> {
        BUNDLED_TEMPLATES
            .iter()
            .find(|(d, f, _)| *d == distro && *f == filename)
            .map(|(_, _, text)| {
                log::debug!("Using bundled template '{distro}/{filename}'");
                text.to_string()
            })
            .ok_or_else(|| {
                log::debug!("Bundled template sets: {}", self.distros().join(", "));
                Error::TemplateNotFound {
                    distro: distro.to_string(),
                    path: format!("<bundled>/{distro}/{filename}{TEMPLATE_SUFFIX}"),
                }
            })
    }
}
