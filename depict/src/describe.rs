//! The describe capability and its default rendering entry points.

use std::fmt;

use crate::Formatter;

/// The contract a type implements to customize its textual
/// representation.
///
/// Implementing [`describe`](Describe::describe) is enough to get the
/// full rendering pipeline: [`description`](Describe::description)
/// seeds a fresh [`Formatter`] with the type's shortened runtime name,
/// runs `describe`, and reads back the rendered string.
///
/// `describe` must be deterministic and free of external side effects;
/// it may be invoked anywhere a textual representation is requested.
///
/// ```
/// use depict::{Describe, Formatter};
///
/// struct Point {
///     x: i32,
///     y: Option<i32>,
/// }
///
/// impl Describe for Point {
///     fn describe(&self, f: &mut Formatter) {
///         f.append_labeled("x", &self.x).append_labeled("y", &self.y);
///     }
/// }
///
/// let point = Point { x: 1, y: None };
/// assert_eq!(point.description(), "Point(x: 1, y: nil)");
/// ```
pub trait Describe {
    /// Append components and adjust settings on the given formatter.
    fn describe(&self, f: &mut Formatter);

    /// Render this value through a freshly constructed formatter.
    fn description(&self) -> String {
        let mut formatter = Formatter::for_type::<Self>();
        self.describe(&mut formatter);
        formatter.render()
    }

    /// Borrowing adapter implementing [`std::fmt::Display`] over
    /// [`description`](Describe::description).
    fn display(&self) -> Described<'_, Self> {
        Described(self)
    }
}

/// Display adapter returned by [`Describe::display`].
pub struct Described<'a, T: ?Sized>(&'a T);

impl<T: Describe + ?Sized> fmt::Display for Described<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.description())
    }
}

/// Implement [`std::fmt::Display`] for one or more types by forwarding
/// to [`Describe::description`].
///
/// The orphan rule prevents a blanket `Display` impl over every
/// describable type, so types that want `{}` formatting opt in here:
///
/// ```
/// use depict::{Describe, Formatter, describe_display};
///
/// struct Tag(u32);
///
/// impl Describe for Tag {
///     fn describe(&self, f: &mut Formatter) {
///         f.append(&self.0);
///     }
/// }
///
/// describe_display!(Tag);
///
/// assert_eq!(format!("{}", Tag(7)), "Tag(7)");
/// ```
#[macro_export]
macro_rules! describe_display {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::Describe::description(self))
            }
        }
    )+};
}
