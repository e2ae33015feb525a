use crate::constants::PLACEHOLDER_DELIMITER;
use crate::error::{Error, Result};
use crate::renderer::interface::{Context, TemplateRenderer};

/// Substitutes `<delim>name<delim>` placeholders.
///
/// A delimiter immediately followed by the escape character produces one
/// literal delimiter, so with the default `@` marker `@@` renders as `@`.
/// Any other delimiter that does not open a well-formed placeholder is an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRenderer {
    delimiter: char,
    escape: char,
}

impl MarkerRenderer {
    /// Creates a renderer with explicit delimiter and escape characters.
    pub fn new(delimiter: char, escape: char) -> Self {
        Self { delimiter, escape }
    }
}

impl Default for MarkerRenderer {
    fn default() -> Self {
        Self::new(PLACEHOLDER_DELIMITER, PLACEHOLDER_DELIMITER)
    }
}

fn is_identifier_char(c: char, first: bool) -> bool {
    if first {
        c.is_ascii_alphabetic() || c == '_'
    } else {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

/// Builds an [`Error::InvalidPlaceholder`] with 1-based line and column.
fn invalid_placeholder(template: &str, offset: usize) -> Error {
    let before = &template[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = template[line_start..offset].chars().count() + 1;
    Error::InvalidPlaceholder { line, column }
}

impl TemplateRenderer for MarkerRenderer {
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c != self.delimiter {
                output.push(c);
                continue;
            }
            if chars.next_if(|&(_, next)| next == self.escape).is_some() {
                output.push(self.delimiter);
                continue;
            }

            let mut name = String::new();
            while let Some((_, next)) =
                chars.next_if(|&(_, next)| is_identifier_char(next, name.is_empty()))
            {
                name.push(next);
            }
            let closed = chars.next_if(|&(_, next)| next == self.delimiter).is_some();
            if name.is_empty() || !closed {
                return Err(invalid_placeholder(template, start));
            }

            let value = context
                .get(&name)
                .ok_or_else(|| Error::MissingPlaceholder { key: name.clone() })?;
            output.push_str(value);
        }

        Ok(output)
    }
}
