//! # claws
//!
//! Guard clauses for the top of a function: assert a precondition in one
//! line and fail fast with an error that names the rule and the offending
//! expression.
//!
//! ## Quick Start
//!
//! ```
//! use claws::prelude::*;
//!
//! fn open_pool(url: Option<&str>, size: u32, tags: Vec<&str>) -> GuardResult<()> {
//!     let url = not_null_not_blank(named!(url))?;
//!     let size = greater_than(named!(size), 0)?;
//!     not_null_not_empty(named!(Some(tags)))?;
//!     println!("opening {size} connections to {url}");
//!     Ok(())
//! }
//!
//! let err = open_pool(Some("postgres://db"), 0, vec!["primary"]).unwrap_err();
//! assert_eq!(err.kind(), GuardErrorKind::MustBeGreaterThan);
//! assert_eq!(err.to_string(), "`size` must be greater than 0, got 0");
//! ```
//!
//! ## Guards
//!
//! - **Presence**: [`not_null`](guards::not_null)
//! - **String**: [`not_null_not_blank`](guards::not_null_not_blank),
//!   [`numeric`](guards::numeric)
//! - **Collection**: [`not_null_not_empty`](guards::not_null_not_empty)
//! - **Equality**: [`not_default`](guards::not_default), [`not_equal`](guards::not_equal)
//! - **Ordering**: [`at_least`](guards::at_least), [`greater_than`](guards::greater_than)
//! - **Custom**: [`ensure`](ensure()) + [`Ensure::passes`]
//!
//! Every guard returns the checked value, so a guard can sit on the right of a
//! `let` binding.
//!
//! ## Features
//!
//! - `serde` — `Serialize` for [`GuardError`] and [`GuardErrorKind`]
//! - `tracing` — a `tracing::debug!` event for every failed guard

pub mod ensure;
pub mod foundation;
pub mod guards;
mod macros;
pub mod prelude;

pub use ensure::{Ensure, ensure};
pub use foundation::{GuardError, GuardErrorKind, GuardResult, Named};
