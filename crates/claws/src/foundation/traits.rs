//! Capability traits used by the guards

// ============================================================================
// EMPTIABLE
// ============================================================================

/// Marker: emptiness is read through `&C: IntoIterator`.
///
/// Covers owned collections: `Vec`, `HashMap`, `BTreeSet`, boxed slices, and
/// any third-party or user type that implements `IntoIterator for &Coll`.
#[derive(Debug)]
pub enum ByRef {}

/// Marker: emptiness is read through a copy of `C: IntoIterator + Copy`.
///
/// Covers borrowed collections such as `&Vec<T>`, `&[T]` and `&HashMap<K, V>`,
/// where `&&C` is not iterable but the reference itself is.
#[derive(Debug)]
pub enum ByValue {}

/// A container that can report whether iterating it would yield anything.
///
/// Emptiness means the first call to `next()` on a fresh iterator returns
/// `None`; no element is consumed from the container itself. The `Via`
/// parameter picks between the two blanket impls and is always inferred, so
/// callers never name it.
///
/// A `Copy` type that is iterable both by value and by reference (an array
/// of `Copy` elements) matches both impls; borrow it as a slice first.
///
/// # Examples
///
/// ```
/// use claws::guards::not_null_not_empty;
/// use claws::named;
///
/// struct Roster(Vec<&'static str>);
///
/// impl<'a> IntoIterator for &'a Roster {
///     type Item = &'a &'static str;
///     type IntoIter = std::slice::Iter<'a, &'static str>;
///
///     fn into_iter(self) -> Self::IntoIter {
///         self.0.iter()
///     }
/// }
///
/// let roster = Some(Roster(vec!["ada"]));
/// assert!(not_null_not_empty(named!(roster)).is_ok());
/// ```
pub trait Emptiable<Via> {
    /// Returns `true` when iteration would yield no elements.
    fn is_empty_container(&self) -> bool;
}

impl<C> Emptiable<ByRef> for C
where
    C: ?Sized,
    for<'a> &'a C: IntoIterator,
{
    #[inline]
    fn is_empty_container(&self) -> bool {
        IntoIterator::into_iter(self).next().is_none()
    }
}

impl<C> Emptiable<ByValue> for C
where
    C: IntoIterator + Copy,
{
    #[inline]
    fn is_empty_container(&self) -> bool {
        IntoIterator::into_iter(*self).next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    fn is_empty<C: Emptiable<V>, V>(c: &C) -> bool {
        c.is_empty_container()
    }

    #[test]
    fn test_owned_collections() {
        assert!(is_empty(&Vec::<i32>::new()));
        assert!(!is_empty(&vec![1]));
        assert!(is_empty(&HashMap::<u8, u8>::new()));
        assert!(!is_empty(&BTreeSet::from([1])));
        assert!(is_empty(&Box::<[u8]>::from(Vec::new())));
    }

    #[test]
    fn test_borrowed_collections() {
        let v = vec!["a"];
        let empty: Vec<&str> = Vec::new();
        assert!(!is_empty(&&v));
        assert!(is_empty(&empty.as_slice()));
    }

    struct Ring {
        slots: Vec<u32>,
    }

    impl<'a> IntoIterator for &'a Ring {
        type Item = &'a u32;
        type IntoIter = std::slice::Iter<'a, u32>;

        fn into_iter(self) -> Self::IntoIter {
            self.slots.iter()
        }
    }

    #[test]
    fn test_user_collection_via_ref_iteration() {
        assert!(is_empty(&Ring { slots: vec![] }));
        assert!(!is_empty(&Ring { slots: vec![7] }));
    }
}
