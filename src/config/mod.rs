//! Package metadata files
//!
//! A metadata file describes a complete package record in YAML or JSON,
//! including the fields the command line cannot express.

pub mod loader;

pub use loader::{load_metadata, MetadataFormat};
