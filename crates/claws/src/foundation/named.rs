//! Values paired with the text of the expression that produced them
//!
//! Guards never see the caller's variable names on their own. A [`Named`]
//! carries that description next to the value so a failure can say
//! "`user.email` must not be blank" instead of "value must not be blank".
//!
//! # Examples
//!
//! ```
//! use claws::{Named, named};
//!
//! let port = 8080;
//!
//! // Captures the expression text.
//! let captured = named!(port);
//! assert_eq!(captured.name(), "port");
//!
//! // Explicit label.
//! let labelled = Named::new("listen port", port);
//! assert_eq!(labelled.name(), "listen port");
//!
//! // No description at all.
//! let anonymous = Named::from(port);
//! assert_eq!(anonymous.name(), "the provided value");
//! ```

use std::borrow::Cow;

/// Description used when the caller attaches none.
pub const DEFAULT_NAME: &str = "the provided value";

/// A value under validation plus a description of where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Named<T> {
    name: Cow<'static, str>,
    value: T,
}

impl<T> Named<T> {
    /// Pairs `value` with an explicit description.
    pub fn new(name: impl Into<Cow<'static, str>>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Wraps `value` under [`DEFAULT_NAME`].
    pub fn anonymous(value: T) -> Self {
        Self::new(DEFAULT_NAME, value)
    }

    /// Invokes `producer` exactly once and wraps its result.
    ///
    /// This is the deferred form: the value is produced at the guard site
    /// rather than by the caller.
    ///
    /// ```
    /// use claws::Named;
    ///
    /// let named = Named::from_fn("config.timeout", || Some(30));
    /// assert_eq!(named.value(), &Some(30));
    /// ```
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, producer: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::new(name, producer())
    }

    /// The description of the expression.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A reference to the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Transforms the value, keeping the description.
    pub fn map<U, F>(self, f: F) -> Named<U>
    where
        F: FnOnce(T) -> U,
    {
        Named {
            name: self.name,
            value: f(self.value),
        }
    }

    /// Unwraps the value, dropping the description.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Splits into `(description, value)`.
    pub fn into_parts(self) -> (Cow<'static, str>, T) {
        (self.name, self.value)
    }
}

impl<T> From<T> for Named<T> {
    fn from(value: T) -> Self {
        Self::anonymous(value)
    }
}
