//! The sequence capability a [`Scanner`](crate::Scanner) walks over.
//!
//! Indices are `usize` values in `0..=end_index()`. For slices an index
//! counts elements; for strings it is a byte offset that always sits on a
//! `char` boundary. `end_index()` is one past the last element and never
//! names an element itself.

use alloc::{string::String, vec::Vec};
use core::{borrow::Borrow, ops::Range};

use bstr::BStr;

/// An ordered, indexable, sliceable sequence of comparable elements.
///
/// Implementations exist for `[T]`, `[T; N]`, `Vec<T>`, `str`, `String` and
/// [`BStr`]. Elements are handed out as [`Element`](Self::Element) values
/// (`&T` for slices, `char` for strings) and compared as
/// [`Item`](Self::Item)s.
pub trait Collection {
    /// The compared element type: `T` for slices, `char` for strings.
    type Item: PartialEq;

    /// How an element is returned from a lookup.
    type Element<'a>: Copy + Borrow<Self::Item>
    where
        Self: 'a;

    /// A contiguous sub-sequence, as produced by [`slice`](Self::slice).
    type Slice: ?Sized;

    /// One past the last valid element index.
    fn end_index(&self) -> usize;

    /// The element at `index`, or `None` at or beyond the end.
    fn element_at(&self, index: usize) -> Option<Self::Element<'_>>;

    /// Moves `n` elements forward from `index`.
    ///
    /// Returns `None` when the move would pass `limit` (or the end of the
    /// collection); landing exactly on `limit` is allowed.
    fn index_offset(&self, index: usize, n: usize, limit: usize) -> Option<usize>;

    /// The index directly after `index`, saturating at the end.
    fn index_after(&self, index: usize) -> usize {
        let end = self.end_index();
        self.index_offset(index, 1, end).unwrap_or(end)
    }

    /// The largest valid index that is `<= index`, capped at the end.
    fn floor_index(&self, index: usize) -> usize {
        index.min(self.end_index())
    }

    /// The half-open sub-sequence `range.start..range.end`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not a valid index or the range is reversed.
    fn slice(&self, range: Range<usize>) -> &Self::Slice;

    /// Iterates every element in order.
    fn elements(&self) -> impl Iterator<Item = Self::Element<'_>>;

    /// Whether the collection has no elements.
    fn is_empty(&self) -> bool {
        self.end_index() == 0
    }
}

impl<T: PartialEq> Collection for [T] {
    type Item = T;
    type Element<'a>
        = &'a T
    where
        Self: 'a;
    type Slice = [T];

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn index_offset(&self, index: usize, n: usize, limit: usize) -> Option<usize> {
        index
            .checked_add(n)
            .filter(|&target| target <= limit.min(self.len()))
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T: PartialEq, const N: usize> Collection for [T; N] {
    type Item = T;
    type Element<'a>
        = &'a T
    where
        Self: 'a;
    type Slice = [T];

    fn end_index(&self) -> usize {
        N
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn index_offset(&self, index: usize, n: usize, limit: usize) -> Option<usize> {
        self.as_slice().index_offset(index, n, limit)
    }

    fn slice(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T: PartialEq> Collection for Vec<T> {
    type Item = T;
    type Element<'a>
        = &'a T
    where
        Self: 'a;
    type Slice = [T];

    fn end_index(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn index_offset(&self, index: usize, n: usize, limit: usize) -> Option<usize> {
        self.as_slice().index_offset(index, n, limit)
    }

    fn slice(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl Collection for str {
    type Item = char;
    type Element<'a> = char;
    type Slice = str;

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<char> {
        self.get(index..)?.chars().next()
    }

    fn index_offset(&self, index: usize, n: usize, limit: usize) -> Option<usize> {
        let tail = self.get(index..)?;
        let mut target = index;
        let mut moved = 0;
        for ch in tail.chars().take(n) {
            target += ch.len_utf8();
            moved += 1;
        }
        (moved == n && target <= limit).then_some(target)
    }

    #[inline]
    fn index_after(&self, index: usize) -> usize {
        match self.element_at(index) {
            Some(ch) => index + ch.len_utf8(),
            None => self.len(),
        }
    }

    fn floor_index(&self, index: usize) -> usize {
        let mut index = index.min(self.len());
        while !self.is_char_boundary(index) {
            index -= 1;
        }
        index
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &str {
        &self[range]
    }

    fn elements(&self) -> impl Iterator<Item = char> {
        self.chars()
    }
}

impl Collection for String {
    type Item = char;
    type Element<'a> = char;
    type Slice = str;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<char> {
        self.as_str().element_at(index)
    }

    fn index_offset(&self, index: usize, n: usize, limit: usize) -> Option<usize> {
        self.as_str().index_offset(index, n, limit)
    }

    fn index_after(&self, index: usize) -> usize {
        self.as_str().index_after(index)
    }

    fn floor_index(&self, index: usize) -> usize {
        self.as_str().floor_index(index)
    }

    fn slice(&self, range: Range<usize>) -> &str {
        &self[range]
    }

    fn elements(&self) -> impl Iterator<Item = char> {
        self.chars()
    }
}

/// Byte strings scan byte by byte; spans come back as `&BStr` so they print
/// readably even when the input is not valid UTF-8.
impl Collection for BStr {
    type Item = u8;
    type Element<'a> = &'a u8;
    type Slice = BStr;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<&u8> {
        as_bytes(self).get(index)
    }

    fn index_offset(&self, index: usize, n: usize, limit: usize) -> Option<usize> {
        as_bytes(self).index_offset(index, n, limit)
    }

    fn slice(&self, range: Range<usize>) -> &BStr {
        BStr::new(&as_bytes(self)[range])
    }

    fn elements(&self) -> impl Iterator<Item = &u8> {
        as_bytes(self).iter()
    }
}

#[inline]
fn as_bytes(s: &BStr) -> &[u8] {
    s
}
