//! Argument-name capture macros.
//!
//! The library never infers names at runtime; these macros capture the
//! identifier at the call site with `stringify!`, which is the whole of the
//! name-source machinery. Passing an explicit name always works and always
//! wins.
//!
//! # Examples
//!
//! ```
//! use guard_rail::check_arg;
//!
//! let attempts = 2;
//! let err = check_arg!(attempts).is().greater_than(3).unwrap_err();
//! assert_eq!(err.name(), "attempts");
//! ```

/// Wraps a local variable for validation, using the identifier as the name.
///
/// `check_arg!(value)` expands to `check(value, "value")`; the two-argument
/// form overrides the captured name, for validating a nested or renamed
/// field while reporting the outer name.
///
/// Note that the value is moved into the chain, exactly as with
/// [`check`](crate::check).
///
/// # Examples
///
/// ```
/// use guard_rail::check_arg;
///
/// let timeout_ms = 250;
/// let timeout_ms = check_arg!(timeout_ms)
///     .is()
///     .greater_than(0)
///     .unwrap()
///     .into_value();
/// assert_eq!(timeout_ms, 250);
///
/// let inner = Option::<i32>::None;
/// let err = check_arg!(inner, "request.id").is().not_null().unwrap_err();
/// assert_eq!(err.name(), "request.id");
/// ```
#[macro_export]
macro_rules! check_arg {
    ($value:ident) => {
        $crate::check($value, stringify!($value))
    };
    ($value:ident, $name:expr) => {
        $crate::check($value, $name)
    };
}

/// Adds a chain to a [`Collector`](crate::Collector), capturing the
/// identifier as the argument name.
///
/// `collect_arg!(collector, value, chain)` expands to
/// `collector.add(value, "value", chain)`; the four-argument form overrides
/// the captured name.
///
/// # Examples
///
/// ```
/// use guard_rail::{collect_arg, Collector};
///
/// let mut violations = Collector::new();
/// let user = "";
/// let user = collect_arg!(violations, user, |a| a.is().not_null_or_empty());
///
/// assert_eq!(user, "");
/// assert_eq!(violations.iter().next().unwrap().name(), "user");
/// ```
#[macro_export]
macro_rules! collect_arg {
    ($collector:expr, $value:ident, $chain:expr) => {
        $collector.add($value, stringify!($value), $chain)
    };
    ($collector:expr, $value:ident, $name:expr, $chain:expr) => {
        $collector.add($value, $name, $chain)
    };
}
