//! Capability traits that gate check families per value type.
//!
//! Instead of inspecting runtime types, each check family is exposed only on
//! values whose type implements the matching capability:
//!
//! - [`Nullable`] - values that can be absent, unlocking `not_null`
//! - [`Orderable`] - values with an ordered comparison view, unlocking the
//!   `greater_than`/`less_than` family
//! - [`StringLike`] - values with a text view, unlocking the string checks
//! - [`CollectionLike`] - values with a count/membership view, unlocking the
//!   collection checks
//!
//! The viewing traits return their view behind an `Option`, so an absent
//! value (an `Option::None` somewhere in the capability chain) is uniformly
//! visible to every check and reported as a null violation rather than a
//! panic.
//!
//! All four traits are public seams: implement them for your own types to
//! opt into the corresponding check family.
pub mod collection_like;
pub mod nullable;
pub mod orderable;
pub mod string_like;

pub use collection_like::CollectionLike;
pub use nullable::Nullable;
pub use orderable::Orderable;
pub use string_like::StringLike;
