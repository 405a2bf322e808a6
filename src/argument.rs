//! The named value under validation and the `check` entry point.
//!
//! [`check`] pairs a value with the name used in every failure message and
//! returns an [`Argument`]. Wrapping never validates anything; the checks run
//! only once the chain enters the catalog through [`Argument::is`] or
//! [`Argument::and`].
//!
//! # Examples
//!
//! ```
//! use guard_rail::check;
//!
//! let limit = check(250, "limit")
//!     .is()
//!     .greater_than(0)
//!     .unwrap()
//!     .and()
//!     .less_than_or_equal_to(1000)
//!     .unwrap()
//!     .into_value();
//!
//! assert_eq!(limit, 250);
//! ```
use crate::check::Check;
use alloc::string::String;

/// Wraps a value for validation.
///
/// The name is used verbatim in every message produced for this value. This
/// is the only entry point; there is no name inference, by design - pass the
/// name explicitly or capture an identifier with
/// [`check_arg!`](crate::check_arg).
///
/// # Examples
///
/// ```
/// use guard_rail::check;
///
/// let err = check(Option::<i32>::None, "user_id").is().not_null().unwrap_err();
/// assert_eq!(err.message(), "user_id cannot be null");
/// ```
#[inline]
pub fn check<T, N>(value: T, name: N) -> Argument<T>
where
    N: Into<String>,
{
    Argument::new(value, name)
}

/// A named value flowing through a check chain.
///
/// Immutable: no check mutates or replaces the wrapped value, so the value
/// read at the end of a chain is the value that went in. Every successful
/// check hands the argument back, ready for [`and`](Argument::and) or a
/// terminal [`value`](Argument::value)/[`into_value`](Argument::into_value)
/// read.
#[must_use]
#[derive(Debug, Clone)]
pub struct Argument<T> {
    name: String,
    value: T,
}

impl<T> Argument<T> {
    /// Creates a named value. Prefer the [`check`] free function.
    #[inline]
    pub fn new<N: Into<String>>(value: T, name: N) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The name used in failure messages.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the value under validation.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Extracts the validated value, ending the chain.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Opens the first check of a chain.
    ///
    /// `is` and [`and`](Argument::and) resolve to the identical check surface;
    /// the two spellings exist purely for call-site readability.
    #[inline]
    pub fn is(self) -> Check<T> {
        Check::new(self)
    }

    /// Opens any further check after a successful one.
    #[inline]
    pub fn and(self) -> Check<T> {
        Check::new(self)
    }

    pub(crate) fn into_parts(self) -> (String, T) {
        (self.name, self.value)
    }
}
