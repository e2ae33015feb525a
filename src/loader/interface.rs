use crate::error::Result;

/// Trait for resolving a template by logical file name and distro.
pub trait TemplateLoader {
    /// Reads the raw text of the `filename` template for `distro`.
    ///
    /// # Returns
    /// * `Result<String>` - Template text, or a template-not-found error
    fn read_template(&self, filename: &str, distro: &str) -> Result<String>;
}
