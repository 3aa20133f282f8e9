//! Scanner: a forward cursor over a borrowed [`Collection`].
//!
//! What it does
//! - Tracks a single position in `0..=end`, where `end` is one past the last
//!   element.
//! - `peek*` reads ahead without moving.
//! - `skip*` consumes on a successful match and otherwise stays put.
//! - `scan*` is `skip*` that also returns the consumed span. Every scan is
//!   implemented as "remember the start, run the skip, slice", so the span
//!   always equals `slice(before..after)`.
//! - `expect*` reports a failed match as a [`ScanError`] instead.
//!
//! Invariants
//! - The position never leaves `0..=end`. Offsets that would run past the
//!   end saturate there, and [`Scanner::set_position`] clamps.
//! - Only [`Scanner::set_position`] and [`Scanner::restore`] move backwards.
//! - Collection matches are all-or-nothing: either the whole target is
//!   consumed or the position is unchanged.
//!
//! Predicates run synchronously, once per element, left to right. The
//! scanner is mutably borrowed for the duration of a call, so a predicate
//! cannot observe or move it.
//!
//! ```rust
//! use seqscan::Scanner;
//!
//! let mut s = Scanner::new("key: <<value>> rest");
//! let key = s.scan_up_to(':');
//! s.skip_through(' ');
//! s.skip_collection("<<");
//! let value = s.scan_up_to_collection(">>");
//! s.skip_collection(">>");
//!
//! assert_eq!(key, "key");
//! assert_eq!(value, "value");
//! assert_eq!(s.remaining(), " rest");
//! ```

use core::{borrow::Borrow, fmt};

use crate::{Collection, ElementSet, ScanError};

/// An opaque saved position, see [`Scanner::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// The saved index.
    #[must_use]
    pub fn position(self) -> usize {
        self.0
    }
}

/// A forward-scanning cursor over a borrowed collection.
///
/// The collection is shared immutably, so any number of scanners may walk
/// the same input. Each scanner owns its position; copying a scanner forks
/// the cursor.
pub struct Scanner<'a, C: Collection + ?Sized> {
    collection: &'a C,
    position: usize,
}

impl<C: Collection + ?Sized> Clone for Scanner<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Collection + ?Sized> Copy for Scanner<'_, C> {}

impl<C: Collection + ?Sized> fmt::Debug for Scanner<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("end", &self.end_index())
            .finish()
    }
}

impl<'a, C: Collection + ?Sized> From<&'a C> for Scanner<'a, C> {
    fn from(collection: &'a C) -> Self {
        Self::new(collection)
    }
}

/// Views an element as the item it compares as.
#[inline]
fn item<'e, 'c, C>(element: &'e C::Element<'c>) -> &'e C::Item
where
    C: Collection + ?Sized + 'c,
{
    <C::Element<'c> as Borrow<C::Item>>::borrow(element)
}

// -------------------------- Position primitives --------------------------

impl<'a, C: Collection + ?Sized> Scanner<'a, C> {
    /// Creates a scanner positioned at the start of `collection`.
    #[must_use]
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            position: 0,
        }
    }

    /// The scanned collection.
    #[must_use]
    pub fn collection(&self) -> &'a C {
        self.collection
    }

    /// The current index.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// One past the last element; the position once everything is consumed.
    #[inline]
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.collection.end_index()
    }

    /// Whether every element has been consumed.
    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.end_index()
    }

    /// The element at the current position, or `None` at the end.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<C::Element<'a>> {
        self.collection.element_at(self.position)
    }

    /// Moves to `position`, clamped to the end of the collection.
    ///
    /// For strings a byte offset inside a multi-byte character is moved back
    /// to that character's start.
    pub fn set_position(&mut self, position: usize) {
        let clamped = self.collection.floor_index(position);
        if clamped != position {
            trace!(requested = position, clamped, "position clamped");
        }
        self.position = clamped;
    }

    /// Consumes one element. No-op at the end.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.position = self.collection.index_after(self.position);
        }
    }

    /// Consumes `count` elements, or everything that is left if fewer
    /// remain.
    ///
    /// Counts are unsigned: the only way back is [`set_position`].
    ///
    /// [`set_position`]: Self::set_position
    pub fn skip(&mut self, count: usize) {
        let end = self.end_index();
        self.position = self
            .collection
            .index_offset(self.position, count, end)
            .unwrap_or(end);
    }

    /// Consumes elements while `predicate` holds.
    ///
    /// Stops at the first element for which it returns `false`, or at the
    /// end. The predicate is called once per inspected element.
    pub fn skip_while(&mut self, mut predicate: impl FnMut(C::Element<'a>) -> bool) {
        while let Some(element) = self.current() {
            if !predicate(element) {
                break;
            }
            self.advance();
        }
    }

    /// Saves the current position.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    /// Returns to a saved position.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.set_position(checkpoint.0);
    }

    /// Everything consumed since `checkpoint` was taken.
    ///
    /// Empty if the scanner is now before the checkpoint.
    #[must_use]
    pub fn span_since(&self, checkpoint: Checkpoint) -> &'a C::Slice {
        let start = self
            .collection
            .floor_index(checkpoint.0.min(self.position));
        self.span_from(start)
    }

    #[inline]
    fn span_from(&self, start: usize) -> &'a C::Slice {
        self.collection.slice(start..self.position)
    }

    /// Compares `other` against the elements starting at `at`.
    ///
    /// Returns the index just past the match, or the error describing where
    /// it failed. An empty `other` matches trivially at `at`.
    fn compare_at<O>(&self, at: usize, other: &O) -> Result<usize, ScanError>
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        let mut index = at;
        for expected in other.elements() {
            let Some(found) = self.collection.element_at(index) else {
                return Err(ScanError::UnexpectedEnd {
                    position: self.end_index(),
                });
            };
            let expected: &C::Item = <O::Element<'_> as Borrow<O::Item>>::borrow(&expected);
            if item::<C>(&found) != expected {
                return Err(ScanError::Mismatch { position: index });
            }
            index = self.collection.index_after(index);
        }
        Ok(index)
    }

    /// Like [`compare_at`](Self::compare_at), but an empty `other` never
    /// matches.
    fn match_at<O>(&self, at: usize, other: &O) -> Option<usize>
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        if other.is_empty() {
            return None;
        }
        self.compare_at(at, other).ok()
    }
}

// -------------------------- Peek --------------------------

impl<'a, C: Collection + ?Sized> Scanner<'a, C> {
    /// The current element without consuming it; `None` at the end.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<C::Element<'a>> {
        self.current()
    }

    /// The element `offset` positions ahead (`0` is the current element).
    ///
    /// `None` if that lands at or beyond the end.
    #[must_use]
    pub fn peek_nth(&self, offset: usize) -> Option<C::Element<'a>> {
        let index = self
            .collection
            .index_offset(self.position, offset, self.end_index())?;
        self.collection.element_at(index)
    }

    /// Up to `max_len` elements from the current position, truncated at the
    /// end.
    #[must_use]
    pub fn peek_next(&self, max_len: usize) -> &'a C::Slice {
        let end = self.end_index();
        let until = self
            .collection
            .index_offset(self.position, max_len, end)
            .unwrap_or(end);
        self.collection.slice(self.position..until)
    }

    /// Everything from the current position to the end.
    #[must_use]
    pub fn remaining(&self) -> &'a C::Slice {
        self.collection.slice(self.position..self.end_index())
    }

    /// Whether `other` occurs at the current position.
    ///
    /// An empty `other` never matches.
    #[must_use]
    pub fn starts_with<O>(&self, other: &O) -> bool
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        self.match_at(self.position, other).is_some()
    }
}

// -------------------------- Skip --------------------------

impl<C: Collection + ?Sized> Scanner<'_, C> {
    /// Consumes the current element if it equals `element`.
    pub fn skip_element(&mut self, element: impl Borrow<C::Item>) {
        let target: &C::Item = element.borrow();
        if self.current().is_some_and(|found| item::<C>(&found) == target) {
            self.advance();
        }
    }

    /// Consumes `other` if the upcoming elements match it exactly.
    ///
    /// All-or-nothing: a partial match, an empty `other`, or too little
    /// remaining input leaves the position unchanged.
    pub fn skip_collection<O>(&mut self, other: &O)
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        if self.is_at_end() {
            return;
        }
        match self.match_at(self.position, other) {
            Some(end) => self.position = end,
            None => trace!(position = self.position, "collection not matched"),
        }
    }

    /// Consumes the longest run of elements that belong to `set`.
    pub fn skip_set(&mut self, set: impl ElementSet<C::Item>) {
        self.skip_while(|element| set.contains_element(item::<C>(&element)));
    }

    /// Consumes elements until `element` is current, or to the end if it
    /// never occurs.
    pub fn skip_up_to(&mut self, element: impl Borrow<C::Item>) {
        let target: &C::Item = element.borrow();
        self.skip_while(|found| item::<C>(&found) != target);
    }

    /// Consumes elements through the first occurrence of `element`, or to the
    /// end if it never occurs.
    pub fn skip_through(&mut self, element: impl Borrow<C::Item>) {
        self.skip_up_to(element);
        self.advance();
    }

    /// Consumes elements until `other` occurs at the current position, or to
    /// the end if it never does. The match itself is not consumed.
    ///
    /// Each round jumps to the next occurrence of `other`'s first element and
    /// tries a full match there, stepping one past the candidate on failure.
    /// That is O(n·m) in the worst case for `n` remaining elements and a
    /// target of length `m`. An empty `other` is a no-op.
    pub fn skip_up_to_collection<O>(&mut self, other: &O)
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        let Some(first) = other.elements().next() else {
            return;
        };
        let first: &C::Item = <O::Element<'_> as Borrow<O::Item>>::borrow(&first);
        loop {
            self.skip_up_to(first);
            if self.is_at_end() {
                return;
            }
            let candidate = self.position;
            if self.match_at(candidate, other).is_some() {
                trace!(candidate, "collection found");
                return;
            }
            trace!(candidate, "candidate rejected");
            self.advance();
        }
    }

    /// Consumes elements until one that belongs to `set` is current, or to
    /// the end.
    pub fn skip_up_to_set(&mut self, set: impl ElementSet<C::Item>) {
        self.skip_while(|element| !set.contains_element(item::<C>(&element)));
    }
}

// -------------------------- Scan --------------------------

impl<'a, C: Collection + ?Sized> Scanner<'a, C> {
    /// Consumes and returns up to `max_len` elements.
    pub fn scan(&mut self, max_len: usize) -> &'a C::Slice {
        let start = self.position;
        self.skip(max_len);
        self.span_from(start)
    }

    /// Consumes and returns the current element; `None` at the end.
    pub fn scan_one(&mut self) -> Option<C::Element<'a>> {
        let element = self.current();
        self.advance();
        element
    }

    /// Consumes `other` if it matches exactly and returns the matched span.
    ///
    /// The span is empty, and the position unchanged, when it does not match.
    pub fn scan_collection<O>(&mut self, other: &O) -> &'a C::Slice
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        let start = self.position;
        self.skip_collection(other);
        self.span_from(start)
    }

    /// Consumes the current element if it equals `element`; returns an empty
    /// or one-element span.
    pub fn scan_element(&mut self, element: impl Borrow<C::Item>) -> &'a C::Slice {
        let start = self.position;
        self.skip_element(element);
        self.span_from(start)
    }

    /// Consumes and returns the longest run of elements in `set`.
    pub fn scan_set(&mut self, set: impl ElementSet<C::Item>) -> &'a C::Slice {
        let start = self.position;
        self.skip_set(set);
        self.span_from(start)
    }

    /// Consumes and returns everything before the first `element`, or the
    /// rest of the input if it does not occur.
    pub fn scan_up_to(&mut self, element: impl Borrow<C::Item>) -> &'a C::Slice {
        let start = self.position;
        self.skip_up_to(element);
        self.span_from(start)
    }

    /// Consumes and returns everything up to and including the first
    /// `element`, or the rest of the input if it does not occur.
    pub fn scan_through(&mut self, element: impl Borrow<C::Item>) -> &'a C::Slice {
        let start = self.position;
        self.skip_through(element);
        self.span_from(start)
    }

    /// Consumes and returns everything before the first occurrence of
    /// `other`, or the rest of the input if it does not occur.
    ///
    /// See [`skip_up_to_collection`](Self::skip_up_to_collection) for the
    /// search.
    pub fn scan_up_to_collection<O>(&mut self, other: &O) -> &'a C::Slice
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        let start = self.position;
        self.skip_up_to_collection(other);
        self.span_from(start)
    }

    /// Consumes and returns everything before the first element in `set`.
    pub fn scan_up_to_set(&mut self, set: impl ElementSet<C::Item>) -> &'a C::Slice {
        let start = self.position;
        self.skip_up_to_set(set);
        self.span_from(start)
    }

    /// Consumes and returns the longest run for which `predicate` holds.
    pub fn scan_while(&mut self, predicate: impl FnMut(C::Element<'a>) -> bool) -> &'a C::Slice {
        let start = self.position;
        self.skip_while(predicate);
        self.span_from(start)
    }
}

// -------------------------- Expect --------------------------

impl<'a, C: Collection + ?Sized> Scanner<'a, C> {
    /// Consumes the current element if it equals `element`.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnexpectedEnd`] at the end, [`ScanError::Mismatch`] if the
    /// current element differs. The position is unchanged on error.
    pub fn expect_element(
        &mut self,
        element: impl Borrow<C::Item>,
    ) -> Result<C::Element<'a>, ScanError> {
        let Some(found) = self.current() else {
            trace!(position = self.position, "expected element, found end");
            return Err(ScanError::UnexpectedEnd {
                position: self.position,
            });
        };
        let expected: &C::Item = element.borrow();
        if item::<C>(&found) != expected {
            trace!(position = self.position, "expected element, found mismatch");
            return Err(ScanError::Mismatch {
                position: self.position,
            });
        }
        self.advance();
        Ok(found)
    }

    /// Consumes `other` if it matches exactly and returns the matched span.
    ///
    /// An empty `other` matches trivially and yields an empty span.
    ///
    /// # Errors
    ///
    /// [`ScanError::Mismatch`] with the index of the first differing element,
    /// or [`ScanError::UnexpectedEnd`] if the input ends while every element
    /// so far matched. The position is unchanged on error.
    pub fn expect_collection<O>(&mut self, other: &O) -> Result<&'a C::Slice, ScanError>
    where
        O: Collection<Item = C::Item> + ?Sized,
    {
        let start = self.position;
        match self.compare_at(start, other) {
            Ok(end) => {
                self.position = end;
                Ok(self.span_from(start))
            }
            Err(error) => {
                trace!(position = start, %error, "expected collection");
                Err(error)
            }
        }
    }

    /// Consumes and returns a non-empty run of elements in `set`.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnexpectedEnd`] at the end, [`ScanError::Mismatch`] if the
    /// current element is not in `set`. The position is unchanged on error.
    pub fn expect_set(&mut self, set: impl ElementSet<C::Item>) -> Result<&'a C::Slice, ScanError> {
        let Some(found) = self.current() else {
            return Err(ScanError::UnexpectedEnd {
                position: self.position,
            });
        };
        if !set.contains_element(item::<C>(&found)) {
            trace!(position = self.position, "expected set member");
            return Err(ScanError::Mismatch {
                position: self.position,
            });
        }
        Ok(self.scan_set(&set))
    }
}
