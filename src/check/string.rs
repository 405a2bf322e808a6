use super::Check;
use crate::traits::StringLike;
use crate::types::{CheckResult, ViolationKind};
use alloc::format;

#[cfg(feature = "pattern")]
use regex::Regex;

impl<T: StringLike> Check<T> {
    /// Checks that the string is present and not empty or whitespace-only.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Null`] when the value is absent;
    /// [`ViolationKind::Emptiness`] when it is empty or whitespace-only.
    /// Both carry the same message text.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::{check, ViolationKind};
    ///
    /// assert!(check("hello world", "greeting").is().not_null_or_whitespace().is_ok());
    ///
    /// let err = check("\r\n\t ", "greeting").is().not_null_or_whitespace().unwrap_err();
    /// assert_eq!(err.message(), "greeting cannot be null or whitespace");
    ///
    /// let err = check(Option::<&str>::None, "greeting").is().not_null_or_whitespace().unwrap_err();
    /// assert_eq!(err.kind(), ViolationKind::Null);
    /// ```
    pub fn not_null_or_whitespace(self) -> CheckResult<T> {
        let violated = match self.argument.value().as_text() {
            None => Some(ViolationKind::Null),
            Some(text) if text.trim().is_empty() => Some(ViolationKind::Emptiness),
            Some(_) => None,
        };
        match violated {
            None => Ok(self.argument),
            Some(kind) => Err(self.fail(kind, |name| {
                format!("{name} cannot be null or whitespace")
            })),
        }
    }

    /// Checks that the string is present and not empty.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Null`] when the value is absent;
    /// [`ViolationKind::Emptiness`] when it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check(" ", "separator").is().not_null_or_empty().is_ok());
    ///
    /// let err = check("", "separator").is().not_null_or_empty().unwrap_err();
    /// assert_eq!(err.message(), "separator cannot be null or empty");
    /// ```
    pub fn not_null_or_empty(self) -> CheckResult<T> {
        let violated = match self.argument.value().as_text() {
            None => Some(ViolationKind::Null),
            Some(text) if text.is_empty() => Some(ViolationKind::Emptiness),
            Some(_) => None,
        };
        match violated {
            None => Ok(self.argument),
            Some(kind) => Err(self.fail(kind, |name| {
                format!("{name} cannot be null or empty")
            })),
        }
    }

    /// Checks that the whole string matches `pattern` in single-line mode.
    ///
    /// The pattern is anchored before matching, so a partial match is not
    /// enough: `"\d+"` matches `"123"` but not `"abc123"`.
    ///
    /// # Errors
    ///
    /// [`ViolationKind::Pattern`] when the string does not match;
    /// [`ViolationKind::Null`] when the value is absent.
    ///
    /// # Panics
    ///
    /// Panics when `pattern` is not a valid regular expression. A malformed
    /// pattern is a programming error, not a validation outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::check;
    ///
    /// assert!(check("1.21.3", "version").is().matching_pattern(r"\d+\.\d+\.\d+").is_ok());
    ///
    /// let err = check("v1.21", "version").is().matching_pattern(r"\d+\.\d+\.\d+").unwrap_err();
    /// assert_eq!(err.message(), "version does not match pattern");
    /// ```
    #[cfg(feature = "pattern")]
    pub fn matching_pattern(self, pattern: &str) -> CheckResult<T> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .expect("matching_pattern requires a valid regular expression");
        let violated = match self.argument.value().as_text() {
            None => Some(ViolationKind::Null),
            Some(text) if !regex.is_match(text) => Some(ViolationKind::Pattern),
            Some(_) => None,
        };
        match violated {
            None => Ok(self.argument),
            Some(kind) => Err(self.fail(kind, |name| {
                format!("{name} does not match pattern")
            })),
        }
    }
}
