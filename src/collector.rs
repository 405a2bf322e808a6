//! Batch-mode violation collection.
//!
//! A [`Collector`] runs many independent chains over a batch of named values
//! without aborting the batch on the first failure. Each [`add`](Collector::add)
//! pattern-matches the chain's `Result` - there is no catching or unwinding
//! anywhere on the batch path - and a failing chain hands back the value it
//! was given, so downstream code keeps operating on best-effort data.
//!
//! One collector serves exactly one logical validation session.
//! [`finish`](Collector::finish) consumes it, which makes reuse a compile
//! error rather than a runtime surprise.
//!
//! # Examples
//!
//! ```
//! use guard_rail::Collector;
//!
//! let mut violations = Collector::new();
//!
//! let host = violations.add("db-primary", "host", |a| a.is().not_null_or_whitespace());
//! let port = violations.add(0u16, "port", |a| a.is().greater_than(0));
//!
//! assert_eq!(host, "db-primary");
//! assert_eq!(port, 0); // sentinel: the pre-check value
//!
//! let err = violations.finish("connection settings are invalid").unwrap_err();
//! assert_eq!(err.violations().len(), 1);
//! assert_eq!(err.violations()[0].name(), "port");
//! ```
use crate::argument::{check, Argument};
use crate::types::{CheckResult, CompositeViolation, Violation, ViolationVec};
use alloc::string::String;

/// Accumulates violations from many chains into one aggregate report.
///
/// Explicitly created, explicitly passed, single-owner: `add` takes
/// `&mut self`, so the borrow checker prevents concurrent use of one session.
#[must_use]
#[derive(Debug, Default)]
pub struct Collector {
    violations: ViolationVec<Violation>,
}

impl Collector {
    /// Creates an empty session.
    #[inline]
    pub fn new() -> Self {
        Self {
            violations: ViolationVec::new(),
        }
    }

    /// Runs one chain against a named value, recording any violation.
    ///
    /// On success, returns the validated value. On failure, records the
    /// violation (insertion order is preserved) and returns the value as it
    /// was before the chain ran - the sentinel that lets the rest of the
    /// batch proceed. The `Clone` bound exists to take that pre-check copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::Collector;
    ///
    /// let mut violations = Collector::new();
    /// let level = violations.add(11, "level", |a| {
    ///     a.is().greater_than_or_equal_to(0)?.and().less_than_or_equal_to(10)
    /// });
    ///
    /// assert_eq!(level, 11);
    /// assert_eq!(violations.len(), 1);
    /// ```
    pub fn add<T, N, F>(&mut self, value: T, name: N, chain: F) -> T
    where
        T: Clone,
        N: Into<String>,
        F: FnOnce(Argument<T>) -> CheckResult<T>,
    {
        let sentinel = value.clone();
        match chain(check(value, name)) {
            Ok(argument) => argument.into_value(),
            Err(violation) => {
                self.violations.push(violation);
                sentinel
            }
        }
    }

    /// Number of violations recorded so far.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// `true` when every chain so far has passed.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterates over the recorded violations in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Ends the session, reporting every recorded violation at once.
    ///
    /// Returns `Ok(())` when nothing was recorded, no matter how many
    /// successful `add` calls ran. Otherwise returns a
    /// [`CompositeViolation`] whose summary message is `message`, verbatim,
    /// and whose violation list preserves add order.
    ///
    /// # Errors
    ///
    /// [`CompositeViolation`] when at least one chain failed.
    pub fn finish<M: Into<String>>(self, message: M) -> Result<(), CompositeViolation> {
        if self.violations.is_empty() {
            return Ok(());
        }
        Err(CompositeViolation::new(message, self.violations))
    }
}
