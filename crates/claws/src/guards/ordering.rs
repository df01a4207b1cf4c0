//! Ordering guards
//!
//! [`at_least`] is an inclusive lower bound and [`greater_than`] an
//! exclusive one: for `value == compared_to` the first passes and the second
//! fails. Values that do not compare at all (`NaN`) fail both.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::foundation::{GuardError, GuardResult, Named};

/// Fails unless the value equals `compared_to` or is strictly greater.
///
/// # Examples
///
/// ```
/// use claws::guards::at_least;
/// use claws::named;
///
/// let replicas = 3;
/// assert!(at_least(named!(replicas), 3).is_ok());
/// assert!(at_least(named!(replicas), 4).is_err());
/// ```
pub fn at_least<T>(input: Named<T>, compared_to: T) -> GuardResult<T>
where
    T: PartialOrd + Debug,
{
    let value = input.value();
    if *value == compared_to || value.partial_cmp(&compared_to) == Some(Ordering::Greater) {
        return Ok(input.into_inner());
    }
    let (name, value) = input.into_parts();
    Err(GuardError::MustBeAtLeast {
        name,
        value: format!("{value:?}"),
        compared_to: format!("{compared_to:?}"),
    }
    .traced())
}

/// Fails unless comparing the value to `compared_to` yields exactly
/// [`Ordering::Greater`].
///
/// # Examples
///
/// ```
/// use claws::guards::greater_than;
/// use claws::named;
///
/// let timeout_ms = 250;
/// assert!(greater_than(named!(timeout_ms), 0).is_ok());
/// assert!(greater_than(named!(timeout_ms), 250).is_err());
/// ```
pub fn greater_than<T>(input: Named<T>, compared_to: T) -> GuardResult<T>
where
    T: PartialOrd + Debug,
{
    if input.value().partial_cmp(&compared_to) == Some(Ordering::Greater) {
        return Ok(input.into_inner());
    }
    let (name, value) = input.into_parts();
    Err(GuardError::MustBeGreaterThan {
        name,
        value: format!("{value:?}"),
        compared_to: format!("{compared_to:?}"),
    }
    .traced())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::GuardErrorKind;

    #[test]
    fn test_at_least() {
        assert!(at_least(Named::anonymous(5), 5).is_ok());
        assert!(at_least(Named::anonymous(6), 5).is_ok());
        let err = at_least(Named::new("n", 4), 5).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::MustBeAtLeast);
        assert_eq!(err.param("compared_to"), Some("5"));
        assert_eq!(err.param("value"), Some("4"));
    }

    #[test]
    fn test_greater_than() {
        assert!(greater_than(Named::anonymous(6), 5).is_ok());
        assert_eq!(
            greater_than(Named::anonymous(5), 5).unwrap_err().kind(),
            GuardErrorKind::MustBeGreaterThan
        );
        assert!(greater_than(Named::anonymous(4), 5).is_err());
    }

    #[test]
    fn test_nan_fails_both() {
        assert!(at_least(Named::anonymous(f64::NAN), 0.0).is_err());
        assert!(greater_than(Named::anonymous(f64::NAN), 0.0).is_err());
    }

    #[test]
    fn test_strings_compare_lexicographically() {
        assert!(greater_than(Named::anonymous("b"), "a").is_ok());
        assert!(at_least(Named::anonymous("a"), "b").is_err());
    }
}
