//! Presence guards
//!
//! Rust has no null references; both "nullable reference" and "nullable
//! value type" are spelled `Option<T>`, so one guard covers both.

use crate::foundation::{GuardError, GuardResult, Named};

/// Fails with [`GuardError::MustNotBeNull`] unless the value is `Some`.
///
/// Returns the unwrapped value.
///
/// # Examples
///
/// ```
/// use claws::guards::not_null;
/// use claws::named;
///
/// let session: Option<u64> = Some(42);
/// assert_eq!(not_null(named!(session)).unwrap(), 42);
///
/// let missing: Option<&str> = None;
/// assert!(not_null(named!(missing)).is_err());
/// ```
pub fn not_null<T>(input: Named<Option<T>>) -> GuardResult<T> {
    let (name, value) = input.into_parts();
    match value {
        Some(value) => Ok(value),
        None => Err(GuardError::MustNotBeNull { name }.traced()),
    }
}
