//! Built-in formatting strategies for the `depict` description builder.
//!
//! Each strategy implements [`depict::FormatStyle`] for the value types
//! it understands and is supplied at append time:
//!
//! - [`Percent`] - fractions rendered as percentages
//! - [`Fixed`] - fixed-precision decimals
//! - [`Hex`] - `0x`-prefixed hexadecimal integers
//! - [`HumanDuration`] - compact [`std::time::Duration`] rendering
//! - [`BoolWords`] - word-pair booleans (`yes`/`no`, `on`/`off`, …)
//! - [`Quoted`] - any `Display` value, quoted like text
//!
//! # Example
//!
//! ```
//! use depict::Formatter;
//! use depict_styles::{BoolWords, Percent};
//!
//! let mut f = Formatter::new("Job");
//! f.append_labeled_with("progress", &0.2, &Percent::new());
//! f.append_labeled_with("verbose", &true, &BoolWords::ON_OFF);
//! assert_eq!(f.render(), "Job(progress: 20%, verbose: on)");
//! ```

mod boolean;
mod duration;
mod numeric;
mod percent;
mod text;

pub use boolean::BoolWords;
pub use duration::HumanDuration;
pub use numeric::{Fixed, Hex};
pub use percent::Percent;
pub use text::Quoted;
