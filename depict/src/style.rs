//! Pluggable formatting strategies for appended values.
//!
//! A [`FormatStyle`] converts a typed value to text at append time,
//! overriding the default [`ComponentValue`](crate::ComponentValue)
//! conversion. The built-in strategies live in the `depict-styles`
//! crate; any closure `Fn(&V) -> String` is also a valid style.

/// A converter from a typed value to its component text.
///
/// Styles are applied only to present values; an absent value bypasses
/// the style and produces a component with absent text, so the
/// formatter's inclusion policy still applies.
pub trait FormatStyle<V: ?Sized> {
    /// Convert the value to its component text.
    fn format(&self, value: &V) -> String;

    /// Whether the produced text is wrapped in double quotes.
    ///
    /// Defaults to `false`: style output is treated as plain text unless
    /// the style says otherwise.
    fn text_like(&self) -> bool {
        false
    }
}

impl<V: ?Sized, F> FormatStyle<V> for F
where
    F: Fn(&V) -> String,
{
    fn format(&self, value: &V) -> String {
        self(value)
    }
}
