//! The formatting accumulator and its rendering algorithm.
//!
//! A [`Formatter`] collects an ordered sequence of [`Component`]s and a
//! pair of settings (the type name and the nil-inclusion policy), then
//! projects them into the final string with [`Formatter::render`].
//!
//! ```
//! use depict::Formatter;
//!
//! let mut f = Formatter::new("Point");
//! f.append_labeled("x", &1).append_labeled("y", &2);
//! assert_eq!(f.render(), "Point(x: 1, y: 2)");
//! ```

use crate::component::Component;
use crate::style::FormatStyle;
use crate::value::ComponentValue;

/// The per-rendering mutable accumulator of components and settings.
///
/// A formatter is constructed fresh for one rendering request, populated
/// by a [`Describe`](crate::Describe) implementation, read back with
/// [`render`](Formatter::render), and discarded. Mutating methods return
/// `&mut Self` for chaining.
#[derive(Debug, Clone)]
pub struct Formatter {
    type_name: Option<String>,
    includes_nil_values: bool,
    components: Vec<Component>,
}

impl Formatter {
    /// Create a formatter with the given type name.
    ///
    /// Nil values are included by default.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            includes_nil_values: true,
            components: Vec::new(),
        }
    }

    /// Create a formatter seeded with the shortened runtime type name of
    /// `T`.
    ///
    /// Module paths are trimmed to the final segment, including inside
    /// generic arguments: `Vec<String>`, not
    /// `alloc::vec::Vec<alloc::string::String>`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::new(short_type_name(std::any::type_name::<T>()))
    }

    /// The type name rendered before the parenthesized component list.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Overwrite the type name.
    pub fn set_type_name(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Remove the type name entirely; output becomes `(…)`.
    pub fn clear_type_name(&mut self) -> &mut Self {
        self.type_name = None;
        self
    }

    /// Whether absent-valued components appear in the output.
    pub fn includes_nil_values(&self) -> bool {
        self.includes_nil_values
    }

    /// Set the nil-inclusion policy.
    ///
    /// Affects only the render step; already-appended components keep
    /// the text they were converted to.
    pub fn set_includes_nil_values(&mut self, includes: bool) -> &mut Self {
        self.includes_nil_values = includes;
        self
    }

    /// Append an unlabeled value with the default conversion.
    pub fn append<V>(&mut self, value: &V) -> &mut Self
    where
        V: ComponentValue + ?Sized,
    {
        self.push(Component::new(None, value.to_text(), value.text_like()))
    }

    /// Append a labeled value with the default conversion.
    pub fn append_labeled<V>(&mut self, label: impl Into<String>, value: &V) -> &mut Self
    where
        V: ComponentValue + ?Sized,
    {
        self.push(Component::new(
            Some(label.into()),
            value.to_text(),
            value.text_like(),
        ))
    }

    /// Append an unlabeled value converted with the supplied style.
    ///
    /// The style is applied only when the value is present; an absent
    /// value produces a component with absent text, so the nil-inclusion
    /// policy applies uniformly to both append families.
    pub fn append_with<'v, V, S>(&mut self, value: impl Into<Option<&'v V>>, style: &S) -> &mut Self
    where
        V: ?Sized + 'v,
        S: FormatStyle<V>,
    {
        let text = value.into().map(|value| style.format(value));
        self.push(Component::new(None, text, style.text_like()))
    }

    /// Append a labeled value converted with the supplied style.
    pub fn append_labeled_with<'v, V, S>(
        &mut self,
        label: impl Into<String>,
        value: impl Into<Option<&'v V>>,
        style: &S,
    ) -> &mut Self
    where
        V: ?Sized + 'v,
        S: FormatStyle<V>,
    {
        let text = value.into().map(|value| style.format(value));
        self.push(Component::new(Some(label.into()), text, style.text_like()))
    }

    /// Conditionally append content.
    pub fn when<F>(&mut self, condition: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            f(self);
        }
        self
    }

    /// Append content for each item.
    pub fn each<T, I, F>(&mut self, items: I, mut f: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        for item in items {
            f(self, item);
        }
        self
    }

    /// The appended components, in append order.
    ///
    /// Absent-valued components are present here even when the
    /// nil-inclusion policy will drop them at render time.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Render the accumulated components into the final string.
    ///
    /// Read-only and idempotent: calling it twice without intervening
    /// mutation yields identical output. The shape is
    /// `TypeName(c1, c2, …)` with the type name omitted when cleared and
    /// absent-valued components filtered per the inclusion policy.
    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .components
            .iter()
            .filter(|component| self.includes_nil_values || component.value().is_some())
            .map(Component::render)
            .collect();
        format!(
            "{}({})",
            self.type_name.as_deref().unwrap_or(""),
            parts.join(", ")
        )
    }

    fn push(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }
}

impl Default for Formatter {
    /// A formatter with no type name; nil values are included.
    fn default() -> Self {
        Self {
            type_name: None,
            includes_nil_values: true,
            components: Vec::new(),
        }
    }
}

/// Strip module paths from a possibly-generic type name.
fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment = 0;
    for (index, ch) in full.char_indices() {
        match ch {
            ':' => segment = index + 1,
            '<' | '>' | '(' | ')' | '[' | ']' | ',' | ' ' | '&' => {
                short.push_str(&full[segment..index]);
                short.push(ch);
                segment = index + 1;
            }
            _ => {}
        }
    }
    short.push_str(&full[segment..]);
    short
}
