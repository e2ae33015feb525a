use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML metadata. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON metadata. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The requested template is absent from the template source.
    #[error("Could not read template for ROS distro '{distro}' at '{path}': no such file or directory")]
    TemplateNotFound { distro: String, path: String },

    /// A template references a placeholder that the context does not define.
    #[error("Missing value for template placeholder '{key}'.")]
    MissingPlaceholder { key: String },

    /// A delimiter that starts neither a placeholder nor an escape.
    #[error("Invalid placeholder in template: line {line}, col {column}.")]
    InvalidPlaceholder { line: usize, column: usize },

    #[error("File exists: {path}")]
    FileExists { path: String },

    #[error("Cannot create directory, file exists: {path}")]
    DirectoryConflict { path: String },

    /// Represents validation failures of the package metadata record
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_names_distro_and_path() {
        let err = Error::TemplateNotFound {
            distro: "groovy".to_string(),
            path: "/tmp/templates/groovy/package.xml.in".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'groovy'"));
        assert!(message.contains("/tmp/templates/groovy/package.xml.in"));
    }

    #[test]
    fn writer_errors_carry_the_path() {
        let err = Error::FileExists { path: "pkg/package.xml".to_string() };
        assert_eq!(err.to_string(), "File exists: pkg/package.xml");

        let err = Error::DirectoryConflict { path: "pkg/src".to_string() };
        assert_eq!(err.to_string(), "Cannot create directory, file exists: pkg/src");
    }
}
