//! Percentage rendering for fractional values.

use depict::FormatStyle;

/// Renders a fraction as a percentage.
///
/// The value is multiplied by 100 and suffixed with `%`; `0.2` renders
/// as `20%`. Operates on `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent {
    precision: usize,
}

impl Percent {
    /// Percentage with no decimal places.
    pub const fn new() -> Self {
        Self { precision: 0 }
    }

    /// Percentage with the given number of decimal places.
    pub const fn with_precision(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatStyle<f64> for Percent {
    fn format(&self, value: &f64) -> String {
        format!("{:.*}%", self.precision, value * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_percent() {
        assert_eq!(Percent::new().format(&0.2), "20%");
        assert_eq!(Percent::new().format(&0.5), "50%");
        assert_eq!(Percent::new().format(&1.0), "100%");
    }

    #[test]
    fn test_precision() {
        assert_eq!(Percent::with_precision(1).format(&0.875), "87.5%");
        assert_eq!(Percent::with_precision(2).format(&0.5), "50.00%");
    }

    #[test]
    fn test_output_is_not_text_like() {
        assert!(!FormatStyle::<f64>::text_like(&Percent::new()));
    }
}
