use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classifies which rule a failed check violated.
///
/// The kind is carried alongside the human-readable message so callers can
/// branch on the class of failure without parsing message text.
///
/// # Examples
///
/// ```
/// use guard_rail::{check, ViolationKind};
///
/// let err = check(Option::<i32>::None, "id").is().not_null().unwrap_err();
/// assert_eq!(err.kind(), ViolationKind::Null);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The value, or a part of it the check had to reach through, was absent.
    Null,
    /// The value was not equal to the expected value.
    Equality,
    /// An ordered comparison against a bound did not hold.
    Ordering,
    /// A caller-supplied predicate rejected the value.
    Predicate,
    /// A string value did not match the expected pattern.
    Pattern,
    /// A string or collection was empty (or whitespace-only) when content was required.
    Emptiness,
    /// A collection held the wrong number of items.
    Count,
    /// A collection did not contain the expected item.
    Membership,
}

impl ViolationKind {
    /// Stable lowercase label, usable as a log field or metric tag.
    #[must_use]
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Equality => "equality",
            Self::Ordering => "ordering",
            Self::Predicate => "predicate",
            Self::Pattern => "pattern",
            Self::Emptiness => "emptiness",
            Self::Count => "count",
            Self::Membership => "membership",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check: which argument, which rule, and the message.
///
/// Violations are immutable once constructed. The message is either the
/// check's default template or the caller's override, never a merge of both.
///
/// # Examples
///
/// ```
/// use guard_rail::check;
///
/// let err = check(5, "retries").is().greater_than(10).unwrap_err();
/// assert_eq!(err.name(), "retries");
/// assert_eq!(err.message(), "retries must be greater than 10, actual value is 5");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    name: String,
    kind: ViolationKind,
    message: String,
}

impl Violation {
    /// Creates a violation for the named argument.
    #[inline]
    pub fn new<N, M>(name: N, kind: ViolationKind, message: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            kind,
            message: message.into(),
        }
    }

    /// The name of the argument that failed its check.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class of rule that was violated.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The full human-readable description of the failure.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for Violation {}
