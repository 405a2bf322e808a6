//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use guard_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`check_arg!`], [`collect_arg!`]
//! - **Types**: [`Argument`], [`Check`], [`Collector`], [`Violation`],
//!   [`CompositeViolation`]
//! - **Traits**: [`CollectionLike`], [`Nullable`], [`Orderable`],
//!   [`StringLike`]
//!
//! # Examples
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn rename(from: &str, to: &str) -> Result<(), Violation> {
//!     let from = check(from, "from").is().not_null_or_whitespace()?.into_value();
//!     let to = check(to, "to").is().not_null_or_whitespace()?.into_value();
//!     assert_ne!(from, to);
//!     Ok(())
//! }
//!
//! assert!(rename("old.log", "new.log").is_ok());
//! ```

// Macros
pub use crate::{check_arg, collect_arg};

// Entry point and chain types
pub use crate::argument::{check, Argument};
pub use crate::check::Check;
pub use crate::collector::Collector;

// Violation types
pub use crate::types::{CheckResult, CompositeViolation, Violation, ViolationKind};

// Capability traits
pub use crate::traits::{CollectionLike, Nullable, Orderable, StringLike};
