//! Prelude module for convenient imports.
//!
//! `use claws::prelude::*;` brings in every guard, the error and input types,
//! and both macros.

pub use crate::ensure::Ensure;
pub use crate::foundation::{
    DEFAULT_NAME, Emptiable, GuardError, GuardErrorKind, GuardResult, Named,
};
pub use crate::guards::{
    at_least, greater_than, not_default, not_equal, not_null, not_null_not_blank,
    not_null_not_empty, numeric,
};
pub use crate::{ensure, named};
