//! Text-producing strategies.

use std::fmt;

use depict::FormatStyle;

/// Renders any [`fmt::Display`] value and marks the output string-like,
/// so the formatter wraps it in double quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quoted;

impl<V: fmt::Display + ?Sized> FormatStyle<V> for Quoted {
    fn format(&self, value: &V) -> String {
        value.to_string()
    }

    fn text_like(&self) -> bool {
        true
    }
}
