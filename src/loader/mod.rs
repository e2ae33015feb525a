use std::path::PathBuf;

pub mod bundled;
pub mod interface;
pub mod local;

pub use bundled::BundledLoader;
pub use interface::TemplateLoader;
pub use local::LocalLoader;

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// Template sets compiled into the crate
    Bundled,
    /// Directory tree laid out as `<root>/<distro>/<file>.in`
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Bundled => write!(f, "bundled templates"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Picks the filesystem source when a templates directory is configured.
    pub fn from_option(templates_dir: Option<PathBuf>) -> Self {
        match templates_dir {
            Some(path) => TemplateSource::FileSystem(path),
            None => TemplateSource::Bundled,
        }
    }

    /// Builds the loader for this source.
    pub fn loader(&self) -> Box<dyn TemplateLoader + '_> {
        match self {
            TemplateSource::Bundled => Box::new(BundledLoader::new()),
            TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path.as_path())),
        }
    }
}
