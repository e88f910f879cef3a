//! Culture information and composite-format rendering
//!
//! Message templates use indexed placeholders: `{0}` inserts the first
//! argument, `{{` and `}}` produce literal braces.

use super::error::{LoggerError, Result};
use super::properties::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Culture-specific formatting information for a message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatProvider {
    name: String,
    decimal_separator: char,
}

impl FormatProvider {
    pub const INVARIANT_NAME: &'static str = "invariant";

    /// The culture-neutral provider used when none is supplied
    pub fn invariant() -> Self {
        Self {
            name: Self::INVARIANT_NAME.to_string(),
            decimal_separator: '.',
        }
    }

    pub fn new(name: impl Into<String>, decimal_separator: char) -> Self {
        Self {
            name: name.into(),
            decimal_separator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn is_invariant(&self) -> bool {
        self.name == Self::INVARIANT_NAME
    }

    /// Format a single value according to this culture
    pub fn format_value(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Float(f) if self.decimal_separator != '.' => {
                f.to_string().replace('.', &self.decimal_separator.to_string())
            }
            other => other.to_string(),
        }
    }
}

impl Default for FormatProvider {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Render `template` with `args`.
///
/// With no arguments the template is returned unchanged, braces included.
pub fn render_template(
    provider: &FormatProvider,
    template: &str,
    args: &[FieldValue],
) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut output = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '{' => {
                let mut index = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    index.push(inner);
                }

                if !closed {
                    return Err(LoggerError::formatter(
                        "template",
                        format!("Unterminated placeholder in '{}'", template),
                    ));
                }

                let position: usize = index.trim().parse().map_err(|_| {
                    LoggerError::formatter(
                        "template",
                        format!("Invalid placeholder '{{{}}}'", index),
                    )
                })?;

                let value = args.get(position).ok_or_else(|| {
                    LoggerError::formatter(
                        "template",
                        format!(
                            "Placeholder {{{}}} has no argument ({} supplied)",
                            position,
                            args.len()
                        ),
                    )
                })?;

                // Writing into a String cannot fail
                let _ = write!(output, "{}", provider.format_value(value));
            }
            '}' => {
                return Err(LoggerError::formatter(
                    "template",
                    format!("Unmatched '}}' in '{}'", template),
                ));
            }
            other => output.push(other),
        }
    }

    Ok(output)
}
