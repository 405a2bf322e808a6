//! The check catalog.
//!
//! [`Check`] is the operation surface a chain enters through
//! [`Argument::is`](crate::Argument::is) and re-enters through
//! [`Argument::and`](crate::Argument::and). Every check is a pure decision:
//! it consumes the surface and either hands the [`Argument`] back or reports
//! a [`Violation`]. The `?` operator at the call site is the fail-fast path;
//! [`Collector::add`](crate::Collector::add) is the batch path.
//!
//! Checks come in four families, each gated by a capability trait:
//!
//! | Family | Checks | Capability |
//! |---|---|---|
//! | General | [`not_null`](Check::not_null), [`equal_to`](Check::equal_to), [`matching`](Check::matching) | [`Nullable`] / any |
//! | Ordering | [`greater_than`](Check::greater_than), [`greater_than_or_equal_to`](Check::greater_than_or_equal_to), [`less_than`](Check::less_than), [`less_than_or_equal_to`](Check::less_than_or_equal_to) | [`Orderable`](crate::Orderable) |
//! | String | [`not_null_or_whitespace`](Check::not_null_or_whitespace), [`not_null_or_empty`](Check::not_null_or_empty), [`matching_pattern`](Check::matching_pattern) | [`StringLike`](crate::StringLike) |
//! | Collection | [`not_empty`](Check::not_empty), [`count`](Check::count), [`count_less_than`](Check::count_less_than), [`count_greater_than`](Check::count_greater_than), [`containing`](Check::containing) | [`CollectionLike`](crate::CollectionLike) |
//!
//! # Examples
//!
//! ```
//! use guard_rail::{check, Violation};
//!
//! fn page_size(requested: usize) -> Result<usize, Violation> {
//!     Ok(check(requested, "page_size")
//!         .is()
//!         .greater_than(0)?
//!         .and()
//!         .less_than_or_equal_to(100)?
//!         .into_value())
//! }
//!
//! assert_eq!(page_size(25), Ok(25));
//! assert!(page_size(0).is_err());
//! ```
use crate::argument::Argument;
use crate::traits::Nullable;
use crate::types::{CheckResult, Violation, ViolationKind};
use alloc::format;
use alloc::string::String;
use core::fmt::Debug;

mod collection;
mod ordering;
mod string;

/// One check's worth of the catalog, wrapping the argument it will judge.
///
/// Created by [`Argument::is`](crate::Argument::is) and
/// [`Argument::and`](crate::Argument::and); consumed by exactly one check.
#[must_use]
#[derive(Debug)]
pub struct Check<T> {
    argument: Argument<T>,
    message: Option<String>,
}

impl<T> Check<T> {
    pub(crate) fn new(argument: Argument<T>) -> Self {
        Self {
            argument,
            message: None,
        }
    }

    /// Replaces the default message of the next check with `message`.
    ///
    /// The override replaces the entire default text; it is never merged with
    /// or appended to it. It applies only to the check invoked on this
    /// surface - a later `and()` starts with the default messages again.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// let err = check(Option::<i32>::None, "id")
    ///     .is()
    ///     .with_message("an id is required")
    ///     .not_null()
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "an id is required");
    /// ```
    pub fn with_message<M: Into<String>>(mut self, message: M) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds the violation for a failed check, preferring the caller's
    /// message override over the lazily-formatted default.
    pub(crate) fn fail<F>(self, kind: ViolationKind, default: F) -> Violation
    where
        F: FnOnce(&str) -> String,
    {
        let Check { argument, message } = self;
        let (name, _) = argument.into_parts();
        let message = message.unwrap_or_else(|| default(&name));
        Violation::new(name, kind, message)
    }

    /// Checks that the value is not absent.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Null`] when the value is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// let token = check(Some("abc"), "token").is().not_null().unwrap().into_value();
    /// assert_eq!(token, Some("abc"));
    ///
    /// let err = check(Option::<&str>::None, "token").is().not_null().unwrap_err();
    /// assert_eq!(err.message(), "token cannot be null");
    /// ```
    pub fn not_null(self) -> CheckResult<T>
    where
        T: Nullable,
    {
        if self.argument.value().is_null() {
            return Err(self.fail(ViolationKind::Null, |name| {
                format!("{name} cannot be null")
            }));
        }
        Ok(self.argument)
    }

    /// Checks that the value equals `expected`.
    ///
    /// Equality is its own identity-style check; it is not derived from the
    /// ordering family.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Equality`] when the values differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check("v2", "api_version").is().equal_to("v2").is_ok());
    ///
    /// let err = check(3, "shard").is().equal_to(4).unwrap_err();
    /// assert_eq!(err.message(), "shard must equal 4, actual value is 3");
    /// ```
    pub fn equal_to(self, expected: T) -> CheckResult<T>
    where
        T: PartialEq + Debug,
    {
        if *self.argument.value() == expected {
            return Ok(self.argument);
        }
        let actual = format!("{:?}", self.argument.value());
        Err(self.fail(ViolationKind::Equality, |name| {
            format!("{name} must equal {expected:?}, actual value is {actual}")
        }))
    }

    /// Checks the value against a caller-supplied predicate.
    ///
    /// The predicate receives the value by reference and handles absence
    /// itself when the value is an `Option`; there is no hidden fault
    /// remapping behind it.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Predicate`] when the predicate returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(8, "workers").is().matching(|n| n % 2 == 0).is_ok());
    ///
    /// let err = check(7, "workers").is().matching(|n| n % 2 == 0).unwrap_err();
    /// assert_eq!(err.message(), "workers did not match criteria, actual value is 7");
    /// ```
    pub fn matching<F>(self, criteria: F) -> CheckResult<T>
    where
        F: FnOnce(&T) -> bool,
        T: Debug,
    {
        if criteria(self.argument.value()) {
            return Ok(self.argument);
        }
        let actual = format!("{:?}", self.argument.value());
        Err(self.fail(ViolationKind::Predicate, |name| {
            format!("{name} did not match criteria, actual value is {actual}")
        }))
    }
}
