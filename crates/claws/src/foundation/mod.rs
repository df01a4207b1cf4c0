//! Core guard types
//!
//! This module contains the building blocks every guard is made of:
//!
//! - **Input**: [`Named`], a value plus the text of the expression it came from
//! - **Errors**: [`GuardError`], one variant per rule, and its [`GuardErrorKind`]
//! - **Capabilities**: [`Emptiable`] for emptiness checks on containers
//!
//! # Examples
//!
//! ```
//! use claws::foundation::{GuardErrorKind, GuardResult};
//! use claws::guards::not_null;
//! use claws::named;
//!
//! fn greet(user: Option<&str>) -> GuardResult<String> {
//!     let user = not_null(named!(user))?;
//!     Ok(format!("hello, {user}"))
//! }
//!
//! assert_eq!(greet(Some("ada")).unwrap(), "hello, ada");
//! assert_eq!(greet(None).unwrap_err().kind(), GuardErrorKind::MustNotBeNull);
//! ```

pub mod error;
pub mod named;
pub mod traits;

pub use error::{GuardError, GuardErrorKind};
pub use named::{DEFAULT_NAME, Named};
pub use traits::{ByRef, ByValue, Emptiable};

/// Result of a guard: the checked value on success.
pub type GuardResult<T> = Result<T, GuardError>;
