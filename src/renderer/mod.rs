//! Placeholder substitution for template text.

pub mod interface;
pub mod marker;

pub use interface::{Context, TemplateRenderer};
pub use marker::MarkerRenderer;

/// Returns the renderer used for every template shipped with this crate.
pub fn get_template_engine() -> MarkerRenderer {
    MarkerRenderer::default()
}
