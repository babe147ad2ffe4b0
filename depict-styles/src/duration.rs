//! Compact duration rendering.

use std::time::Duration;

use depict::FormatStyle;

/// Renders a [`Duration`] in its most compact unit.
///
/// Sub-second durations render in milliseconds (`450ms`), whole seconds
/// without a fraction (`5s`), anything in between with one decimal
/// place (`1.5s`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanDuration;

impl FormatStyle<Duration> for HumanDuration {
    fn format(&self, value: &Duration) -> String {
        let millis = value.as_millis();
        if millis < 1_000 {
            format!("{millis}ms")
        } else if millis % 1_000 == 0 {
            format!("{}s", millis / 1_000)
        } else {
            format!("{:.1}s", value.as_secs_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second() {
        assert_eq!(HumanDuration.format(&Duration::from_millis(450)), "450ms");
        assert_eq!(HumanDuration.format(&Duration::ZERO), "0ms");
    }

    #[test]
    fn test_whole_seconds() {
        assert_eq!(HumanDuration.format(&Duration::from_secs(5)), "5s");
        assert_eq!(HumanDuration.format(&Duration::from_millis(1_000)), "1s");
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(HumanDuration.format(&Duration::from_millis(1_500)), "1.5s");
    }
}
