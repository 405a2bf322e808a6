use super::Check;
use crate::traits::Orderable;
use crate::types::{CheckResult, ViolationKind};
use alloc::format;
use alloc::string::{String, ToString};
use core::cmp::Ordering;

/// Owned outcome of the three-way comparison, so no borrow of the argument
/// outlives the decision.
enum Compared {
    Pass,
    Absent,
    Fail(String),
}

impl<T: Orderable> Check<T> {
    fn compare(self, bound: T::Target, want: Ordering, or_equal: bool, relation: &str) -> CheckResult<T> {
        let outcome = match self.argument.value().target() {
            None => Compared::Absent,
            Some(actual) => match actual.partial_cmp(&bound) {
                Some(ord) if ord == want || (or_equal && ord == Ordering::Equal) => Compared::Pass,
                _ => Compared::Fail(actual.to_string()),
            },
        };
        match outcome {
            Compared::Pass => Ok(self.argument),
            Compared::Absent => Err(self.fail(ViolationKind::Null, |name| {
                format!("{name} must be {relation} {bound}, actual value is null")
            })),
            Compared::Fail(actual) => Err(self.fail(ViolationKind::Ordering, |name| {
                format!("{name} must be {relation} {bound}, actual value is {actual}")
            })),
        }
    }

    /// Checks that the value is strictly greater than `bound`.
    ///
    /// The comparison is strict three-way: equal values fail, and so do
    /// incomparable ones (such as NaN).
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Ordering`] when the comparison does not hold;
    /// [`ViolationKind::Null`] when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(10, "batch").is().greater_than(5).is_ok());
    /// assert!(check(5, "batch").is().greater_than(5).is_err());
    ///
    /// let err = check(5, "batch").is().greater_than(10).unwrap_err();
    /// assert_eq!(err.message(), "batch must be greater than 10, actual value is 5");
    /// ```
    pub fn greater_than(self, bound: T::Target) -> CheckResult<T> {
        self.compare(bound, Ordering::Greater, false, "greater than")
    }

    /// Checks that the value is greater than or equal to `bound`.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Ordering`] when the comparison does not hold;
    /// [`ViolationKind::Null`] when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(5, "replicas").is().greater_than_or_equal_to(5).is_ok());
    /// assert!(check(4, "replicas").is().greater_than_or_equal_to(5).is_err());
    /// ```
    pub fn greater_than_or_equal_to(self, bound: T::Target) -> CheckResult<T> {
        self.compare(bound, Ordering::Greater, true, "greater than or equal to")
    }

    /// Checks that the value is strictly less than `bound`.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Ordering`] when the comparison does not hold;
    /// [`ViolationKind::Null`] when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(5, "depth").is().less_than(10).is_ok());
    /// assert!(check(5, "depth").is().less_than(5).is_err());
    /// ```
    pub fn less_than(self, bound: T::Target) -> CheckResult<T> {
        self.compare(bound, Ordering::Less, false, "less than")
    }

    /// Checks that the value is less than or equal to `bound`.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Ordering`] when the comparison does not hold;
    /// [`ViolationKind::Null`] when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(10, "ttl").is().less_than_or_equal_to(10).is_ok());
    ///
    /// let err = check(Option::<u32>::None, "ttl").is().less_than_or_equal_to(10).unwrap_err();
    /// assert_eq!(err.message(), "ttl must be less than or equal to 10, actual value is null");
    /// ```
    pub fn less_than_or_equal_to(self, bound: T::Target) -> CheckResult<T> {
        self.compare(bound, Ordering::Less, true, "less than or equal to")
    }
}
