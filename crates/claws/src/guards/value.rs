//! Equality guards

use std::fmt::Debug;

use crate::foundation::{GuardError, GuardResult, Named};

/// Fails when the value equals `T::default()`.
///
/// For `Option<T>` the default is `None`, so this doubles as a presence check
/// that keeps the `Option` intact. For value types it compares against the
/// type's zero value (`0`, `false`, `""`, an empty `Vec`, ...).
///
/// # Examples
///
/// ```
/// use claws::guards::not_default;
/// use claws::named;
///
/// let user_id = 17_u64;
/// assert!(not_default(named!(user_id)).is_ok());
///
/// let user_id = 0_u64;
/// assert!(not_default(named!(user_id)).is_err());
///
/// let parent: Option<u64> = None;
/// assert!(not_default(named!(parent)).is_err());
/// ```
pub fn not_default<T>(input: Named<T>) -> GuardResult<T>
where
    T: Default + PartialEq + Debug,
{
    if *input.value() != T::default() {
        return Ok(input.into_inner());
    }
    let (name, value) = input.into_parts();
    Err(GuardError::MustNotBeDefaultValue {
        name,
        value: format!("{value:?}"),
    }
    .traced())
}

/// Fails when the value equals `compared_to`.
///
/// Equality is `PartialEq`, so a value that is not equal to itself never
/// matches: `not_equal(NaN, NaN)` passes.
///
/// # Examples
///
/// ```
/// use claws::guards::not_equal;
/// use claws::named;
///
/// let target = "staging";
/// assert!(not_equal(named!(target), "production").is_ok());
/// assert!(not_equal(named!(target), "staging").is_err());
/// ```
pub fn not_equal<T>(input: Named<T>, compared_to: T) -> GuardResult<T>
where
    T: PartialEq + Debug,
{
    if *input.value() != compared_to {
        return Ok(input.into_inner());
    }
    let (name, value) = input.into_parts();
    Err(GuardError::MustNotBeEqual {
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
    fn test_not_default_numbers() {
        assert_eq!(not_default(Named::anonymous(1)), Ok(1));
        let err = not_default(Named::new("count", 0)).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::MustNotBeDefaultValue);
        assert_eq!(err.param("value"), Some("0"));
    }

    #[test]
    fn test_not_default_option_is_null_check() {
        assert_eq!(not_default(Named::anonymous(Some(0))), Ok(Some(0)));
        assert!(not_default(Named::anonymous(None::<i32>)).is_err());
    }

    #[test]
    fn test_not_default_string_and_bool() {
        assert!(not_default(Named::anonymous(String::new())).is_err());
        assert!(not_default(Named::anonymous(false)).is_err());
        assert!(not_default(Named::anonymous(true)).is_ok());
    }

    #[test]
    fn test_not_equal() {
        assert_eq!(not_equal(Named::anonymous(5), 6), Ok(5));
        let err = not_equal(Named::new("n", 5), 5).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::MustNotBeEqual);
        assert_eq!(err.to_string(), "`n` must not be equal to 5");
    }

    #[test]
    fn test_not_equal_nan_is_never_equal() {
        assert!(not_equal(Named::anonymous(f64::NAN), f64::NAN).is_ok());
    }
}
