//! Error types for failed guards
//!
//! Every guard fails with exactly one [`GuardError`] variant. The variant
//! identifies the rule, and each one carries enough context to build a
//! human-readable message: the description of the offending expression and,
//! where relevant, the attempted value and the comparison target.
//!
//! Values are rendered with `Debug` at the point of failure so the error type
//! stays non-generic and can travel through `?` into any host error type.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A failed guard clause.
///
/// # Examples
///
/// ```
/// use claws::guards::at_least;
/// use claws::{GuardError, GuardErrorKind, named};
///
/// let retries = 0;
/// let err = at_least(named!(retries), 1).unwrap_err();
///
/// assert_eq!(err.kind(), GuardErrorKind::MustBeAtLeast);
/// assert_eq!(err.name(), "retries");
/// assert_eq!(err.to_string(), "`retries` must be at least 1, got 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "snake_case"))]
#[non_exhaustive]
pub enum GuardError {
    /// The value was absent.
    #[error("`{name}` must not be null")]
    MustNotBeNull {
        /// Description of the offending expression.
        name: Cow<'static, str>,
    },

    /// The string was present but empty.
    #[error("`{name}` must not be blank")]
    MustNotBeBlank {
        /// Description of the offending expression.
        name: Cow<'static, str>,
    },

    /// The collection was present but yielded no elements.
    #[error("`{name}` must not be empty")]
    MustNotBeEmpty {
        /// Description of the offending expression.
        name: Cow<'static, str>,
    },

    /// The string did not parse as a floating-point number.
    #[error("`{name}` must be numeric, got {value}")]
    MustBeNumeric {
        /// Description of the offending expression.
        name: Cow<'static, str>,
        /// The attempted value.
        value: String,
    },

    /// The value equalled its type's default.
    #[error("`{name}` must not be the default value, got {value}")]
    MustNotBeDefaultValue {
        /// Description of the offending expression.
        name: Cow<'static, str>,
        /// The attempted value.
        value: String,
    },

    /// The value equalled the forbidden comparison target.
    #[error("`{name}` must not be equal to {compared_to}")]
    MustNotBeEqual {
        /// Description of the offending expression.
        name: Cow<'static, str>,
        /// The attempted value.
        value: String,
        /// The forbidden value.
        compared_to: String,
    },

    /// The value was below the inclusive lower bound.
    #[error("`{name}` must be at least {compared_to}, got {value}")]
    MustBeAtLeast {
        /// Description of the offending expression.
        name: Cow<'static, str>,
        /// The attempted value.
        value: String,
        /// The inclusive lower bound.
        compared_to: String,
    },

    /// The value was not strictly above the exclusive lower bound.
    #[error("`{name}` must be greater than {compared_to}, got {value}")]
    MustBeGreaterThan {
        /// Description of the offending expression.
        name: Cow<'static, str>,
        /// The attempted value.
        value: String,
        /// The exclusive lower bound.
        compared_to: String,
    },

    /// A caller-supplied predicate returned `false`.
    #[error("`{name}` must pass the provided predicate, got {value}{}", describe(.predicate))]
    MustPassProvidedPredicate {
        /// Description of the offending expression.
        name: Cow<'static, str>,
        /// The attempted value.
        value: String,
        /// What the predicate checks, when the caller described it.
        predicate: Option<Cow<'static, str>>,
    },
}

#[allow(clippy::ref_option)]
fn describe(predicate: &Option<Cow<'static, str>>) -> String {
    predicate
        .as_ref()
        .map(|p| format!(" ({p})"))
        .unwrap_or_default()
}

impl GuardError {
    /// Returns the rule that failed.
    #[must_use]
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            Self::MustNotBeNull { .. } => GuardErrorKind::MustNotBeNull,
            Self::MustNotBeBlank { .. } => GuardErrorKind::MustNotBeBlank,
            Self::MustNotBeEmpty { .. } => GuardErrorKind::MustNotBeEmpty,
            Self::MustBeNumeric { .. } => GuardErrorKind::MustBeNumeric,
            Self::MustNotBeDefaultValue { .. } => GuardErrorKind::MustNotBeDefaultValue,
            Self::MustNotBeEqual { .. } => GuardErrorKind::MustNotBeEqual,
            Self::MustBeAtLeast { .. } => GuardErrorKind::MustBeAtLeast,
            Self::MustBeGreaterThan { .. } => GuardErrorKind::MustBeGreaterThan,
            Self::MustPassProvidedPredicate { .. } => GuardErrorKind::MustPassProvidedPredicate,
        }
    }

    /// Stable snake_case code of the failed rule, e.g. `"must_not_be_null"`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Description of the offending expression.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MustNotBeNull { name }
            | Self::MustNotBeBlank { name }
            | Self::MustNotBeEmpty { name }
            | Self::MustBeNumeric { name, .. }
            | Self::MustNotBeDefaultValue { name, .. }
            | Self::MustNotBeEqual { name, .. }
            | Self::MustBeAtLeast { name, .. }
            | Self::MustBeGreaterThan { name, .. }
            | Self::MustPassProvidedPredicate { name, .. } => name,
        }
    }

    /// Looks up a context parameter by key.
    ///
    /// Known keys are `"value"`, `"compared_to"` and `"predicate"`; which of
    /// them are present depends on the rule.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        match (self, key) {
            (
                Self::MustBeNumeric { value, .. }
                | Self::MustNotBeDefaultValue { value, .. }
                | Self::MustNotBeEqual { value, .. }
                | Self::MustBeAtLeast { value, .. }
                | Self::MustBeGreaterThan { value, .. }
                | Self::MustPassProvidedPredicate { value, .. },
                "value",
            ) => Some(value.as_str()),
            (
                Self::MustNotBeEqual { compared_to, .. }
                | Self::MustBeAtLeast { compared_to, .. }
                | Self::MustBeGreaterThan { compared_to, .. },
                "compared_to",
            ) => Some(compared_to.as_str()),
            (Self::MustPassProvidedPredicate { predicate, .. }, "predicate") => {
                predicate.as_deref()
            }
            _ => None,
        }
    }

    /// Emits the failure as a `tracing` event when the feature is enabled.
    #[inline]
    pub(crate) fn traced(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(code = self.code(), name = self.name(), "guard failed");
        self
    }
}

// ============================================================================
// ERROR KIND
// ============================================================================

/// Field-less discriminant of [`GuardError`], one per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum GuardErrorKind {
    /// See [`GuardError::MustNotBeNull`].
    MustNotBeNull,
    /// See [`GuardError::MustNotBeBlank`].
    MustNotBeBlank,
    /// See [`GuardError::MustNotBeEmpty`].
    MustNotBeEmpty,
    /// See [`GuardError::MustBeNumeric`].
    MustBeNumeric,
    /// See [`GuardError::MustNotBeDefaultValue`].
    MustNotBeDefaultValue,
    /// See [`GuardError::MustNotBeEqual`].
    MustNotBeEqual,
    /// See [`GuardError::MustBeAtLeast`].
    MustBeAtLeast,
    /// See [`GuardError::MustBeGreaterThan`].
    MustBeGreaterThan,
    /// See [`GuardError::MustPassProvidedPredicate`].
    MustPassProvidedPredicate,
}

impl GuardErrorKind {
    /// Stable snake_case code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MustNotBeNull => "must_not_be_null",
            Self::MustNotBeBlank => "must_not_be_blank",
            Self::MustNotBeEmpty => "must_not_be_empty",
            Self::MustBeNumeric => "must_be_numeric",
            Self::MustNotBeDefaultValue => "must_not_be_default_value",
            Self::MustNotBeEqual => "must_not_be_equal",
            Self::MustBeAtLeast => "must_be_at_least",
            Self::MustBeGreaterThan => "must_be_greater_than",
            Self::MustPassProvidedPredicate => "must_pass_provided_predicate",
        }
    }
}

impl fmt::Display for GuardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// TESTS
// ============================================================================
