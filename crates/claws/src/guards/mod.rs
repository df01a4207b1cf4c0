//! Built-in guards
//!
//! Each guard takes a [`Named`](crate::foundation::Named) value, checks one
//! rule, and either hands the value back or fails with the rule's
//! [`GuardError`](crate::foundation::GuardError) variant. Guards are
//! independent: one call checks one rule and stops at the first violation.
//!
//! # Categories
//!
//! - **Presence**: [`not_null`]
//! - **String**: [`not_null_not_blank`], [`numeric`]
//! - **Collection**: [`not_null_not_empty`]
//! - **Equality**: [`not_default`], [`not_equal`]
//! - **Ordering**: [`at_least`], [`greater_than`]
//!
//! Arbitrary predicates go through [`ensure`](crate::ensure()).
//!
//! # Examples
//!
//! ```
//! use claws::guards::*;
//! use claws::{GuardResult, named};
//!
//! fn schedule(name: Option<&str>, workers: usize, interval_secs: u64) -> GuardResult<()> {
//!     not_null_not_blank(named!(name))?;
//!     at_least(named!(workers), 1)?;
//!     greater_than(named!(interval_secs), 0)?;
//!     Ok(())
//! }
//!
//! assert!(schedule(Some("nightly"), 4, 3600).is_ok());
//! assert!(schedule(Some("nightly"), 0, 3600).is_err());
//! ```

pub mod collection;
pub mod nullable;
pub mod ordering;
pub mod string;
pub mod value;

pub use collection::not_null_not_empty;
pub use nullable::not_null;
pub use ordering::{at_least, greater_than};
pub use string::{not_null_not_blank, numeric};
pub use value::{not_default, not_equal};
