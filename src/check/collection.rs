use super::Check;
use crate::traits::CollectionLike;
use crate::types::{CheckResult, ViolationKind};
use alloc::format;
use alloc::string::{String, ToString};

impl<T: CollectionLike> Check<T> {
    fn count_check(
        self,
        expected: usize,
        qualifier: &str,
        satisfied: fn(usize, usize) -> bool,
    ) -> CheckResult<T> {
        match self.argument.value().item_count() {
            Some(actual) if satisfied(actual, expected) => Ok(self.argument),
            found => {
                let kind = if found.is_none() {
                    ViolationKind::Null
                } else {
                    ViolationKind::Count
                };
                let actual = match found {
                    Some(count) => count.to_string(),
                    None => String::from("null"),
                };
                Err(self.fail(kind, |name| {
                    format!("{name} expected count{qualifier}: {expected} actual: {actual}")
                }))
            }
        }
    }

    /// Checks that the collection is present and holds at least one item.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Emptiness`] when the collection is empty;
    /// [`ViolationKind::Null`] when it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(vec![1], "shards").is().not_empty().is_ok());
    ///
    /// let err = check(Vec::<i32>::new(), "shards").is().not_empty().unwrap_err();
    /// assert_eq!(err.message(), "shards cannot be empty.");
    /// ```
    pub fn not_empty(self) -> CheckResult<T> {
        let violated = match self.argument.value().item_count() {
            None => Some(ViolationKind::Null),
            Some(0) => Some(ViolationKind::Emptiness),
            Some(_) => None,
        };
        match violated {
            None => Ok(self.argument),
            Some(kind) => Err(self.fail(kind, |name| format!("{name} cannot be empty."))),
        }
    }

    /// Checks that the collection holds exactly `expected` items.
    ///
    /// An absent collection is a guaranteed failure, reported with the
    /// literal text `null` in place of the actual count.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Count`] on a count mismatch;
    /// [`ViolationKind::Null`] when the collection is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(vec!["a"], "replicas").is().count(1).is_ok());
    ///
    /// let err = check(vec!["a"], "replicas").is().count(2).unwrap_err();
    /// assert_eq!(err.message(), "replicas expected count: 2 actual: 1");
    ///
    /// let err = check(Option::<Vec<&str>>::None, "replicas").is().count(1).unwrap_err();
    /// assert_eq!(err.message(), "replicas expected count: 1 actual: null");
    /// ```
    pub fn count(self, expected: usize) -> CheckResult<T> {
        self.count_check(expected, "", |actual, expected| actual == expected)
    }

    /// Checks that the collection holds strictly fewer than `expected` items.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Count`] when the count is `expected` or more;
    /// [`ViolationKind::Null`] when the collection is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(vec![1, 2], "retries").is().count_less_than(3).is_ok());
    ///
    /// let err = check(vec![1, 2, 3], "retries").is().count_less_than(3).unwrap_err();
    /// assert_eq!(err.message(), "retries expected count less than: 3 actual: 3");
    /// ```
    pub fn count_less_than(self, expected: usize) -> CheckResult<T> {
        self.count_check(expected, " less than", |actual, expected| actual < expected)
    }

    /// Checks that the collection holds strictly more than `expected` items.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Count`] when the count is `expected` or fewer;
    /// [`ViolationKind::Null`] when the collection is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(vec![1, 2], "quorum").is().count_greater_than(1).is_ok());
    /// assert!(check(vec![1], "quorum").is().count_greater_than(1).is_err());
    /// ```
    pub fn count_greater_than(self, expected: usize) -> CheckResult<T> {
        self.count_check(expected, " greater than", |actual, expected| actual > expected)
    }

    /// Checks that the collection contains an item equal to `item`.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Membership`] when no equal item is present;
    /// [`ViolationKind::Null`] when the collection is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(vec!["a", "b"], "zones").is().containing("b").is_ok());
    ///
    /// let err = check(vec!["a", "b"], "zones").is().containing("z").unwrap_err();
    /// assert_eq!(err.message(), "zones does not contain expected item");
    /// ```
    pub fn containing(self, item: T::Item) -> CheckResult<T> {
        let violated = match self.argument.value().item_count() {
            None => Some(ViolationKind::Null),
            Some(_) if !self.argument.value().has_item(&item) => Some(ViolationKind::Membership),
            Some(_) => None,
        };
        match violated {
            None => Ok(self.argument),
            Some(kind) => Err(self.fail(kind, |name| {
                format!("{name} does not contain expected item")
            })),
        }
    }
}
