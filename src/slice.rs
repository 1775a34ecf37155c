//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use crate::error::CursorError;
use crate::position::Position;
use crate::reversed::Reversed;
use core::cmp::Ordering;
use core::fmt;
use core::ptr;

/// A forward position into a borrowed slice.
///
/// Valid indices are `0..=len`, `len` being the end sentinel.
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SlicePosition<'a, T> {
    pub fn new(slice: &'a [T], index: usize) -> Result<Self, CursorError> {
        if index > slice.len() {
            return Err(CursorError::OutOfBounds {
                index,
                len: slice.len(),
            });
        }
        Ok(Self { slice, index })
    }

    #[inline]
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    #[inline]
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: slice.len(),
        }
    }

    /// The first position of the reversed walk, referring to the last
    /// element.
    #[inline]
    pub fn rbegin(slice: &'a [T]) -> Reversed<Self> {
        Reversed::new(Self::end(slice))
    }

    #[inline]
    pub fn rend(slice: &'a [T]) -> Reversed<Self> {
        Reversed::new(Self::begin(slice))
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.slice.len()
    }

    #[inline]
    pub fn sequence(&self) -> &'a [T] {
        self.slice
    }

    pub fn try_get(&self) -> Result<&'a T, CursorError> {
        self.slice
            .get(self.index)
            .ok_or(CursorError::EndOfSequence)
    }

    #[inline]
    fn same_sequence(&self, other: &Self) -> bool {
        ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
            && self.slice.len() == other.slice.len()
    }
}

impl<'a, T> Position for SlicePosition<'a, T> {
    type Reference = &'a T;
    type Difference = isize;

    #[inline]
    fn get(&self) -> &'a T {
        assert!(
            self.index < self.slice.len(),
            "dereferenced the end of a sequence of length {}",
            self.slice.len()
        );
        &self.slice[self.index]
    }

    #[inline]
    fn increment(&mut self) {
        assert!(
            self.index < self.slice.len(),
            "incremented past the end of the sequence"
        );
        self.index += 1;
    }

    #[inline]
    fn decrement(&mut self) {
        assert!(
            self.index > 0,
            "decremented before the beginning of the sequence"
        );
        self.index -= 1;
    }

    #[inline]
    fn advance(&mut self, n: isize) {
        let target = self.index as isize + n;
        assert!(
            target >= 0 && target as usize <= self.slice.len(),
            "offset {} from index {} leaves a sequence of length {}",
            n,
            self.index,
            self.slice.len()
        );
        self.index = target as usize;
    }

    #[inline]
    fn distance_from(&self, other: &Self) -> isize {
        assert!(
            self.same_sequence(other),
            "positions belong to different sequences"
        );
        self.index as isize - other.index as isize
    }
}

impl<'a, T> Clone for SlicePosition<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SlicePosition<'a, T> {}

impl<'a, T> PartialEq for SlicePosition<'a, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            self.same_sequence(other),
            "positions belong to different sequences"
        );
        self.index == other.index
    }
}

impl<'a, T> Eq for SlicePosition<'a, T> {}

impl<'a, T> PartialOrd for SlicePosition<'a, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T> Ord for SlicePosition<'a, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(
            self.same_sequence(other),
            "positions belong to different sequences"
        );
        self.index.cmp(&other.index)
    }
}

impl<'a, T> fmt::Debug for SlicePosition<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SlicePosition")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}
