//! Word-pair boolean rendering.

use depict::FormatStyle;

/// Renders a boolean as one of two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolWords {
    truthy: &'static str,
    falsy: &'static str,
}

impl BoolWords {
    /// `yes` / `no`.
    pub const YES_NO: Self = Self::new("yes", "no");

    /// `on` / `off`.
    pub const ON_OFF: Self = Self::new("on", "off");

    /// `enabled` / `disabled`.
    pub const ENABLED_DISABLED: Self = Self::new("enabled", "disabled");

    /// A custom word pair.
    pub const fn new(truthy: &'static str, falsy: &'static str) -> Self {
        Self { truthy, falsy }
    }
}

impl FormatStyle<bool> for BoolWords {
    fn format(&self, value: &bool) -> String {
        if *value {
            self.truthy.to_owned()
        } else {
            self.falsy.to_owned()
        }
    }
}
