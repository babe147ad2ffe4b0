//! Declarative description builder.
//!
//! Types declare which of their internal components appear in their
//! human-readable representation, under what labels, with what
//! formatting, and under what inclusion rules — replacing ad-hoc
//! hand-written to-string logic with a builder the type populates once.
//!
//! # Module Organization
//!
//! - [`formatter`] - The [`Formatter`] accumulator and rendering algorithm
//! - [`component`] - The immutable [`Component`] record
//! - [`value`] - Default value-to-text conversion ([`ComponentValue`])
//! - [`style`] - Pluggable formatting strategies ([`FormatStyle`])
//! - [`describe`] - The [`Describe`] capability and entry points
//!
//! Built-in formatting strategies (percentages, fixed-precision
//! decimals, hexadecimal, durations, boolean words) live in the
//! `depict-styles` crate.
//!
//! # Example
//!
//! ```
//! use depict::{Describe, Formatter};
//!
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//!     age: u32,
//!     pet: Option<String>,
//! }
//!
//! impl Describe for Person {
//!     fn describe(&self, f: &mut Formatter) {
//!         f.set_includes_nil_values(false);
//!         f.append(&format!("{} {}", self.first_name, self.last_name));
//!         f.append_labeled("age", &self.age);
//!         f.append_labeled("pet", &self.pet);
//!     }
//! }
//!
//! let person = Person {
//!     first_name: "Matt".to_owned(),
//!     last_name: "Comi".to_owned(),
//!     age: 42,
//!     pet: None,
//! };
//! assert_eq!(person.description(), r#"Person("Matt Comi", age: 42)"#);
//! ```
//!
//! # Features
//!
//! - `serde` - derives `serde::Serialize` on [`Component`] for host-side
//!   introspection of appended components.

pub mod component;
pub mod describe;
pub mod formatter;
pub mod style;
pub mod value;

pub use component::{Component, NIL};
pub use describe::{Describe, Described};
pub use formatter::Formatter;
pub use style::FormatStyle;
pub use value::ComponentValue;
