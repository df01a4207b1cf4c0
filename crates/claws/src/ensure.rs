//! Fluent guard for caller-supplied predicates
//!
//! The named guards cover the common cases; anything else goes through
//! [`ensure`]:
//!
//! ```
//! use claws::{ensure, named};
//!
//! let batch_size = 64_u32;
//! let checked = ensure(named!(batch_size))
//!     .passes_described("power of two", |n| n.is_power_of_two())
//!     .unwrap();
//! assert_eq!(checked, 64);
//! ```

use std::borrow::Cow;
use std::fmt::Debug;

use crate::foundation::{GuardError, GuardResult, Named};

/// A value bound for a predicate check. Created by [`ensure`].
#[derive(Debug, Clone)]
#[must_use = "an `Ensure` does nothing until `passes` is called"]
pub struct Ensure<T> {
    input: Named<T>,
}

/// Binds `input` for a fluent predicate check.
pub fn ensure<T>(input: Named<T>) -> Ensure<T> {
    Ensure { input }
}

impl<T: Debug> Ensure<T> {
    /// Applies `predicate` once; fails with
    /// [`GuardError::MustPassProvidedPredicate`] when it returns `false`.
    pub fn passes<P>(self, predicate: P) -> GuardResult<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.check(None, predicate)
    }

    /// Like [`passes`](Self::passes), but the failure also names what the
    /// predicate checks.
    pub fn passes_described<P>(
        self,
        description: impl Into<Cow<'static, str>>,
        predicate: P,
    ) -> GuardResult<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.check(Some(description.into()), predicate)
    }

    fn check<P>(self, description: Option<Cow<'static, str>>, predicate: P) -> GuardResult<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(self.input.value()) {
            return Ok(self.input.into_inner());
        }
        let (name, value) = self.input.into_parts();
        Err(GuardError::MustPassProvidedPredicate {
            name,
            value: format!("{value:?}"),
            predicate: description,
        }
        .traced())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::GuardErrorKind;

    #[test]
    fn test_passes_true() {
        assert_eq!(ensure(Named::anonymous(3)).passes(|_| true), Ok(3));
    }

    #[test]
    fn test_passes_false() {
        let err = ensure(Named::new("n", 3)).passes(|_| false).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::MustPassProvidedPredicate);
        assert_eq!(err.param("predicate"), None);
    }

    #[test]
    fn test_passes_described() {
        let err = ensure(Named::new("n", 3))
            .passes_described("is even", |n| n % 2 == 0)
            .unwrap_err();
        assert_eq!(err.param("predicate"), Some("is even"));
    }

    #[test]
    fn test_predicate_called_once() {
        let mut calls = 0;
        let _ = ensure(Named::anonymous("x")).passes(|_| {
            calls += 1;
            false
        });
        assert_eq!(calls, 1);
    }
}
