//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `guard_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Guard Clauses That Return the Value
//!
//! ```
//! use guard_rail::{check, Violation};
//!
//! fn connect(host: &str, port: u16) -> Result<String, Violation> {
//!     let host = check(host, "host").is().not_null_or_whitespace()?.into_value();
//!     let port = check(port, "port").is().greater_than(0)?.into_value();
//!     Ok(format!("{host}:{port}"))
//! }
//!
//! assert!(connect("localhost", 8080).is_ok());
//! assert!(connect("   ", 8080).is_err());
//! ```
//!
//! ## Collecting Every Violation in a Batch
//!
//! ```
//! use guard_rail::Collector;
//!
//! let mut violations = Collector::new();
//! let name = violations.add("", "name", |a| a.is().not_null_or_empty());
//! let age = violations.add(16, "age", |a| a.is().greater_than_or_equal_to(18));
//!
//! // Failing adds hand back the original value so the batch keeps going.
//! assert_eq!((name, age), ("", 16));
//!
//! let err = violations.finish("signup form is invalid").unwrap_err();
//! assert_eq!(err.message(), "signup form is invalid");
//! assert_eq!(err.violations().len(), 2);
//! ```
//!
//! ## Name Capture Without Reflection
//!
//! ```
//! use guard_rail::check_arg;
//!
//! let retries = 3;
//! let err = check_arg!(retries).is().less_than(3).unwrap_err();
//! assert_eq!(err.to_string(), "retries must be less than 3, actual value is 3");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Named value wrapper and the `check` entry point
pub mod argument;
/// Check catalog invoked through `is()`/`and()`
pub mod check;
/// Batch-mode violation collection
pub mod collector;
/// Argument-name capture macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits that gate check families per value type
pub mod traits;
/// Violation types and aggregate errors
pub mod types;

pub use argument::{check, Argument};
pub use check::Check;
pub use collector::Collector;
pub use traits::{CollectionLike, Nullable, Orderable, StringLike};
pub use types::{CheckResult, CompositeViolation, Violation, ViolationKind, ViolationVec};
