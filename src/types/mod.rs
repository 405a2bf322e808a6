//! Violation types and shared aliases.
//!
//! A failed check produces a [`Violation`]; a batch session that recorded any
//! failures finishes with a [`CompositeViolation`]. Both are plain structured
//! errors with accessor methods, `Display` and `core::error::Error` impls.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{check, ViolationKind};
//!
//! let err = check("", "token").is().not_null_or_empty().unwrap_err();
//! assert_eq!(err.kind(), ViolationKind::Emptiness);
//! assert_eq!(err.to_string(), "token cannot be null or empty");
//! ```
use smallvec::SmallVec;

pub mod composite;
pub mod violation;

pub use composite::*;
pub use violation::*;

/// SmallVec-backed collection used for accumulating violations.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations in the
/// common case where a session records only a couple of failures.
pub type ViolationVec<T> = SmallVec<[T; 2]>;

/// Result of one check: the argument flows onward, or a [`Violation`] reports
/// why it may not.
///
/// # Type Parameters
///
/// * `T` - The type of the value under validation
pub type CheckResult<T> = Result<crate::argument::Argument<T>, Violation>;
