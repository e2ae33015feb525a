use crate::error::Result;
use indexmap::IndexMap;

/// Placeholder name to replacement text.
pub type Context = IndexMap<String, String>;

/// Trait for template substitution engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template text containing placeholders
    /// * `context` - Replacement text for every placeholder name
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &Context) -> Result<String>;
}
