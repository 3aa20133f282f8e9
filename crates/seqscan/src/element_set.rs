use alloc::{collections::BTreeSet, vec::Vec};
use core::ops::{Range, RangeInclusive};

/// Membership test used by the set-matching scanner operations.
///
/// Any unordered collection of acceptable elements qualifies. Besides the
/// usual containers, a `str` acts as a set of its `char`s and ordered ranges
/// such as `'a'..='z'` test by comparison:
///
/// ```rust
/// use seqscan::ElementSet;
///
/// assert!(" \t\n".contains_element(&'\t'));
/// assert!(('0'..='9').contains_element(&'7'));
/// assert!(!['x', 'y'].contains_element(&'z'));
/// ```
pub trait ElementSet<T: ?Sized> {
    /// Whether `element` belongs to the set.
    fn contains_element(&self, element: &T) -> bool;
}

impl<T: ?Sized, S: ElementSet<T> + ?Sized> ElementSet<T> for &S {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        (**self).contains_element(element)
    }
}

impl<T: PartialEq> ElementSet<T> for [T] {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq, const N: usize> ElementSet<T> for [T; N] {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> ElementSet<T> for Vec<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Ord> ElementSet<T> for BTreeSet<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

#[cfg(feature = "std")]
impl<T, H> ElementSet<T> for std::collections::HashSet<T, H>
where
    T: Eq + core::hash::Hash,
    H: core::hash::BuildHasher,
{
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl ElementSet<char> for str {
    #[inline]
    fn contains_element(&self, element: &char) -> bool {
        self.contains(*element)
    }
}

impl<T: PartialOrd> ElementSet<T> for RangeInclusive<T> {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialOrd> ElementSet<T> for Range<T> {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}
