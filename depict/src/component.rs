//! The component record tracked by a [`Formatter`](crate::Formatter).

/// Marker text rendered for an absent component value.
pub const NIL: &str = "nil";

/// One labeled-or-unlabeled, already-converted-to-text data point.
///
/// Components are immutable once appended: the text is produced at append
/// time and never re-resolved, so later changes to the owning formatter's
/// settings cannot affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Component {
    label: Option<String>,
    value: Option<String>,
    text_like: bool,
}

impl Component {
    /// Create a component from its already-converted parts.
    pub fn new(label: Option<String>, value: Option<String>, text_like: bool) -> Self {
        Self {
            label,
            value,
            text_like,
        }
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The converted text, or `None` when the appended value was absent.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the rendered value is wrapped in double quotes.
    pub fn is_text_like(&self) -> bool {
        self.text_like
    }

    /// Render this component as it appears in the joined output.
    ///
    /// Absent values render as [`NIL`]; dropping them entirely is the
    /// formatter's decision, not the component's.
    pub fn render(&self) -> String {
        let value = match &self.value {
            Some(text) if self.text_like => format!("\"{text}\""),
            Some(text) => text.clone(),
            None => NIL.to_owned(),
        };
        match &self.label {
            Some(label) => format!("{label}: {value}"),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlabeled_plain() {
        let component = Component::new(None, Some("42".to_owned()), false);
        assert_eq!(component.render(), "42");
    }

    #[test]
    fn test_unlabeled_text_like() {
        let component = Component::new(None, Some("hello".to_owned()), true);
        assert_eq!(component.render(), "\"hello\"");
    }

    #[test]
    fn test_labeled_plain() {
        let component = Component::new(Some("age".to_owned()), Some("42".to_owned()), false);
        assert_eq!(component.render(), "age: 42");
    }

    #[test]
    fn test_labeled_absent() {
        let component = Component::new(Some("pet".to_owned()), None, false);
        assert_eq!(component.render(), "pet: nil");
    }

    #[test]
    fn test_unlabeled_absent() {
        let component = Component::new(None, None, false);
        assert_eq!(component.render(), "nil");
    }

    #[test]
    fn test_accessors() {
        let component = Component::new(Some("x".to_owned()), Some("1".to_owned()), false);
        assert_eq!(component.label(), Some("x"));
        assert_eq!(component.value(), Some("1"));
        assert!(!component.is_text_like());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let component = Component::new(Some("x".to_owned()), Some("1".to_owned()), false);
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "x",
                "value": "1",
                "text_like": false,
            })
        );
    }
}
