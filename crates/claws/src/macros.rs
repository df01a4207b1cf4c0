//! Macros that capture the caller's expression text.
//!
//! # Available Macros
//!
//! - [`named!`] — Wrap a value in a [`Named`](crate::Named) labelled with its own source text
//! - [`ensure!`] — One-line predicate check built on [`ensure`](crate::ensure())
//!
//! # Examples
//!
//! ```
//! use claws::guards::not_null_not_blank;
//! use claws::{ensure, named};
//!
//! struct Request {
//!     path: Option<String>,
//!     retries: u8,
//! }
//!
//! let req = Request { path: Some(String::new()), retries: 9 };
//!
//! let err = not_null_not_blank(named!(req.path)).unwrap_err();
//! assert_eq!(err.to_string(), "`req.path` must not be blank");
//!
//! let err = ensure!(req.retries, "at most 5 retries", |r| *r <= 5).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "`req.retries` must pass the provided predicate, got 9 (at most 5 retries)"
//! );
//! ```

// ============================================================================
// NAMED MACRO
// ============================================================================

/// Wraps an expression in a [`Named`](crate::Named) whose description is the
/// expression's source text.
///
/// The expression is evaluated exactly once and moved into the wrapper.
///
/// # Variants
///
/// **Captured text**:
/// ```
/// # use claws::named;
/// let limit = 10;
/// assert_eq!(named!(limit).name(), "limit");
/// assert_eq!(named!(limit * 2).name(), "limit * 2");
/// ```
///
/// **Explicit label**:
/// ```
/// # use claws::named;
/// let limit = 10;
/// assert_eq!(named!("rate limit" => limit).name(), "rate limit");
/// ```
#[macro_export]
macro_rules! named {
    ($label:literal => $value:expr $(,)?) => {
        $crate::Named::new($label, $value)
    };
    ($value:expr $(,)?) => {
        $crate::Named::new(::core::stringify!($value), $value)
    };
}

// ============================================================================
// ENSURE MACRO
// ============================================================================

/// Checks an expression against a predicate, labelling any failure with the
/// expression's source text.
///
/// `ensure!(expr, predicate)` expands to
/// `ensure(named!(expr)).passes(predicate)`; with a description literal in the
/// middle it calls `passes_described` instead.
///
/// ```
/// # use claws::ensure;
/// let name = "x";
/// assert!(ensure!(name, |n| n.len() == 1).is_ok());
/// assert!(ensure!(name, "longer than 3", |n| n.len() > 3).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($value:expr, $description:literal, $predicate:expr $(,)?) => {
        $crate::ensure($crate::named!($value)).passes_described($description, $predicate)
    };
    ($value:expr, $predicate:expr $(,)?) => {
        $crate::ensure($crate::named!($value)).passes($predicate)
    };
}

// ============================================================================
// TESTS
// ============================================================================
