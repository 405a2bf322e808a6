use crate::types::{Violation, ViolationVec};
use alloc::string::String;
use core::fmt;
use smallvec::smallvec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate error bundling every violation recorded during one batch session.
///
/// Produced by [`Collector::finish`](crate::Collector::finish) when at least
/// one chain failed. The summary message is the caller's, verbatim; the
/// violations keep the order in which the failing chains ran.
///
/// # Examples
///
/// ```
/// use guard_rail::Collector;
///
/// let mut violations = Collector::new();
/// violations.add(Option::<u32>::None, "tenant", |a| a.is().not_null());
/// let err = violations.finish("request rejected").unwrap_err();
///
/// assert_eq!(err.message(), "request rejected");
/// assert_eq!(err.violations()[0].name(), "tenant");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeViolation {
    message: String,
    violations: ViolationVec<Violation>,
}

impl CompositeViolation {
    /// Creates an aggregate from a summary message and recorded violations.
    #[inline]
    pub fn new<M, I>(message: M, violations: I) -> Self
    where
        M: Into<String>,
        I: IntoIterator<Item = Violation>,
    {
        Self {
            message: message.into(),
            violations: violations.into_iter().collect(),
        }
    }

    /// The caller-supplied summary message, verbatim.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every recorded violation, in the order the failing chains ran.
    #[must_use]
    #[inline]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of recorded violations.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// `true` when no violations were recorded.
    ///
    /// An aggregate built by a collector is never empty, but manually
    /// assembled ones can be.
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

    /// Consumes the aggregate and returns the violation list.
    #[must_use]
    #[inline]
    pub fn into_violations(self) -> ViolationVec<Violation> {
        self.violations
    }
}

impl fmt::Display for CompositeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl core::error::Error for CompositeViolation {}

impl From<Violation> for CompositeViolation {
    fn from(violation: Violation) -> Self {
        Self {
            message: String::from(violation.message()),
            violations: smallvec![violation],
        }
    }
}

impl<'a> IntoIterator for &'a CompositeViolation {
    type Item = &'a Violation;
    type IntoIter = core::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
