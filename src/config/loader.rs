//! Metadata file loading and parsing

use crate::constants::STDIN_INDICATOR;
use crate::error::Result;
use crate::ioutils::read_from;
use crate::package::Package;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    Json,
    Yaml,
}

impl MetadataFormat {
    /// `.json` files are JSON; everything else, stdin included, is YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => MetadataFormat::Json,
            _ => MetadataFormat::Yaml,
        }
    }

    pub fn parse(&self, content: &str) -> Result<Package> {
        let package = match self {
            MetadataFormat::Json => serde_json::from_str(content)?,
            MetadataFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(package)
    }
}

/// Reads a package record from `path`, or from stdin when `path` is `-`.
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<Package> {
    let path = path.as_ref();
    let content = if path.as_os_str() == STDIN_INDICATOR {
        read_from(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)?
    };
    log::debug!("Loaded metadata from '{}'", path.display());
    MetadataFormat::from_path(path).parse(&content)
}
