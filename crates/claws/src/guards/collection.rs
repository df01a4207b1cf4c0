//! Collection guards

use crate::foundation::{Emptiable, GuardError, GuardResult, Named};

/// Fails when the container is absent or yields no elements.
///
/// Accepts any container whose reference is iterable (`&C: IntoIterator`),
/// and borrowed containers that are iterable themselves, such as `&[T]` or
/// `&HashMap<K, V>`. Only the first element is pulled to decide.
///
/// # Examples
///
/// ```
/// use claws::guards::not_null_not_empty;
/// use claws::named;
///
/// let recipients = Some(vec!["ops@example.com"]);
/// assert!(not_null_not_empty(named!(recipients)).is_ok());
///
/// let recipients: Option<Vec<&str>> = Some(vec![]);
/// assert!(not_null_not_empty(named!(recipients)).is_err());
/// ```
pub fn not_null_not_empty<C, Via>(input: Named<Option<C>>) -> GuardResult<C>
where
    C: Emptiable<Via>,
{
    let (name, value) = input.into_parts();
    match value {
        None => Err(GuardError::MustNotBeNull { name }.traced()),
        Some(c) if c.is_empty_container() => Err(GuardError::MustNotBeEmpty { name }.traced()),
        Some(c) => Ok(c),
    }
}
