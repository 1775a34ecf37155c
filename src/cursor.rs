//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use crate::direction::{Directed, Direction, Invert, Orient};
use crate::position::Position;
use crate::relation::{self, Coordinate, Relation};
use crate::reversed::Reversed;
use crate::walk::Walk;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A cursor that walks a sequence forward or backward, switching at
/// runtime.
///
/// All movement is relative to the current direction: `increment` on a
/// reversed cursor moves toward the beginning of the sequence.
/// Comparisons and differences are taken in forward coordinates, a
/// reversed operand being mapped through a literal invert first.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalCursor<P> {
    inner: Directed<P>,
}

impl<P> DirectionalCursor<P> {
    #[inline]
    pub fn forward(position: P) -> Self {
        Self {
            inner: Directed::Forward(position),
        }
    }

    #[inline]
    pub fn reverse(position: Reversed<P>) -> Self {
        Self {
            inner: Directed::Reverse(position),
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.inner.direction()
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.inner.is_reverse()
    }

    #[inline]
    pub fn as_directed(&self) -> &Directed<P> {
        &self.inner
    }

    #[inline]
    pub fn into_directed(self) -> Directed<P> {
        self.inner
    }
}

impl<P: Position> DirectionalCursor<P> {
    /// Returns the referenced element. The cursor must not be at the end of
    /// its walk.
    #[inline]
    pub fn get(&self) -> P::Reference {
        self.inner.get()
    }

    /// Returns the element `n` steps away in the current direction.
    #[inline]
    pub fn at(&self, n: P::Difference) -> P::Reference {
        self.inner.at(n)
    }

    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.inner.increment();
        self
    }

    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.inner.decrement();
        self
    }

    /// Steps forward in the current direction and returns the cursor as it
    /// was before.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let snapshot = self.clone();
        self.inner.increment();
        snapshot
    }

    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let snapshot = self.clone();
        self.inner.decrement();
        snapshot
    }

    #[inline]
    pub fn advance(&mut self, n: P::Difference) -> &mut Self {
        self.inner.advance(n);
        self
    }

    #[inline]
    pub fn retreat(&mut self, n: P::Difference) -> &mut Self {
        self.inner.retreat(n);
        self
    }

    #[inline]
    fn replace_with(&mut self, f: impl FnOnce(Directed<P>) -> Directed<P>) -> &mut Self {
        let before = self.direction();
        self.inner = f(self.inner.clone());
        if before != self.direction() {
            trace!("cursor flipped to {:?}", self.direction());
        }
        self
    }

    /// Flips direction keeping the coordinate; the referenced element
    /// shifts by one slot.
    pub fn invert(&mut self) -> &mut Self {
        let flipped = self.direction().opposite();
        self.replace_with(<Directed<P> as Invert>::invert);
        debug_assert_eq!(self.direction(), flipped);
        self
    }

    /// Flips direction keeping the referenced element, which must exist.
    pub fn stable_invert(&mut self) -> &mut Self {
        let flipped = self.direction().opposite();
        self.replace_with(<Directed<P> as Invert>::stable_invert);
        debug_assert_eq!(self.direction(), flipped);
        self
    }

    pub fn to_forward(&mut self) -> &mut Self {
        self.replace_with(<Directed<P> as Orient>::to_forward)
    }

    pub fn stable_to_forward(&mut self) -> &mut Self {
        self.replace_with(<Directed<P> as Orient>::stable_to_forward)
    }

    pub fn to_reverse(&mut self) -> &mut Self {
        self.replace_with(<Directed<P> as Orient>::to_reverse)
    }

    pub fn stable_to_reverse(&mut self) -> &mut Self {
        self.replace_with(<Directed<P> as Orient>::stable_to_reverse)
    }

    // The extractors resolve the conversion on the concrete alternative, so
    // the requested kind of position is guaranteed by the return type of
    // `Orient` rather than checked after converting the union.

    pub fn extract_forward(&self) -> P {
        match self.inner.clone() {
            Directed::Forward(p) => p.to_forward(),
            Directed::Reverse(r) => r.to_forward(),
        }
    }

    pub fn stable_extract_forward(&self) -> P {
        match self.inner.clone() {
            Directed::Forward(p) => p.stable_to_forward(),
            Directed::Reverse(r) => r.stable_to_forward(),
        }
    }

    pub fn extract_reverse(&self) -> Reversed<P> {
        match self.inner.clone() {
            Directed::Forward(p) => p.to_reverse(),
            Directed::Reverse(r) => r.to_reverse(),
        }
    }

    pub fn stable_extract_reverse(&self) -> Reversed<P> {
        match self.inner.clone() {
            Directed::Forward(p) => p.stable_to_reverse(),
            Directed::Reverse(r) => r.stable_to_reverse(),
        }
    }

    /// Same as `extract_forward`, consuming the cursor.
    #[inline]
    pub fn into_forward(self) -> P {
        match self.inner {
            Directed::Forward(p) => p,
            Directed::Reverse(r) => r.to_forward(),
        }
    }

    /// Same as `extract_reverse`, consuming the cursor.
    #[inline]
    pub fn into_reverse(self) -> Reversed<P> {
        match self.inner {
            Directed::Forward(p) => p.to_reverse(),
            Directed::Reverse(r) => r,
        }
    }

    /// Evaluates `self <relation> other` in forward coordinates.
    #[inline]
    pub fn compare<O: Coordinate<P> + ?Sized>(&self, relation: Relation, other: &O) -> bool {
        relation::compare::<P, _, _>(relation, self, other)
    }

    /// Like `compare`, but reversed operands are placed at the element they
    /// reference.
    #[inline]
    pub fn stable_compare<O: Coordinate<P> + ?Sized>(&self, relation: Relation, other: &O) -> bool {
        relation::stable_compare::<P, _, _>(relation, self, other)
    }

    /// Returns `self - other` in forward coordinates.
    #[inline]
    pub fn difference<O: Coordinate<P> + ?Sized>(&self, other: &O) -> P::Difference {
        relation::difference::<P, _, _>(self, other)
    }

    #[inline]
    pub fn stable_difference<O: Coordinate<P> + ?Sized>(&self, other: &O) -> P::Difference {
        relation::stable_difference::<P, _, _>(self, other)
    }

    /// Iterates the elements from this cursor up to, not including, `end`.
    pub fn walk<O: Coordinate<P>>(self, end: O) -> Walk<P, O> {
        Walk::new(self, end)
    }
}

impl<P: Position> From<P> for DirectionalCursor<P> {
    #[inline]
    fn from(position: P) -> Self {
        Self::forward(position)
    }
}

impl<P> From<Reversed<P>> for DirectionalCursor<P> {
    #[inline]
    fn from(position: Reversed<P>) -> Self {
        Self::reverse(position)
    }
}

impl<P> From<Directed<P>> for DirectionalCursor<P> {
    #[inline]
    fn from(inner: Directed<P>) -> Self {
        Self { inner }
    }
}

impl<P: Position> From<DirectionalCursor<P>> for Reversed<P> {
    #[inline]
    fn from(cursor: DirectionalCursor<P>) -> Self {
        cursor.into_reverse()
    }
}

impl<P: Position> Coordinate<P> for DirectionalCursor<P> {
    #[inline]
    fn literal_coordinate(&self) -> &P {
        self.inner.literal_coordinate()
    }

    #[inline]
    fn stable_coordinate(&self) -> P {
        self.inner.stable_coordinate()
    }
}

impl<P: Position> PartialEq for DirectionalCursor<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(Relation::Eq, other)
    }
}

impl<P: Position + Eq> Eq for DirectionalCursor<P> {}

impl<P: Position> PartialEq<P> for DirectionalCursor<P> {
    #[inline]
    fn eq(&self, other: &P) -> bool {
        self.compare(Relation::Eq, other)
    }
}

impl<P: Position> PartialEq<Reversed<P>> for DirectionalCursor<P> {
    #[inline]
    fn eq(&self, other: &Reversed<P>) -> bool {
        self.compare(Relation::Eq, other)
    }
}

impl<P: Position> PartialEq<Directed<P>> for DirectionalCursor<P> {
    #[inline]
    fn eq(&self, other: &Directed<P>) -> bool {
        self.compare(Relation::Eq, other)
    }
}

impl<P: Position> PartialOrd for DirectionalCursor<P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.literal_coordinate()
            .partial_cmp(other.literal_coordinate())
    }
}

impl<P: Position> PartialOrd<P> for DirectionalCursor<P> {
    #[inline]
    fn partial_cmp(&self, other: &P) -> Option<Ordering> {
        self.literal_coordinate().partial_cmp(other)
    }
}

impl<P: Position> PartialOrd<Reversed<P>> for DirectionalCursor<P> {
    #[inline]
    fn partial_cmp(&self, other: &Reversed<P>) -> Option<Ordering> {
        self.literal_coordinate().partial_cmp(other.base())
    }
}

impl<P: Position> PartialOrd<Directed<P>> for DirectionalCursor<P> {
    #[inline]
    fn partial_cmp(&self, other: &Directed<P>) -> Option<Ordering> {
        self.literal_coordinate()
            .partial_cmp(other.literal_coordinate())
    }
}

// Implemented on `&mut` so that method calls keep resolving to the
// inherent mutators.

impl<'a, P: Position> Invert for &'a mut DirectionalCursor<P> {
    type Inverse = Self;

    #[inline]
    fn invert(self) -> Self {
        DirectionalCursor::invert(self)
    }

    #[inline]
    fn stable_invert(self) -> Self {
        DirectionalCursor::stable_invert(self)
    }
}

impl<'a, P: Position> Orient for &'a mut DirectionalCursor<P> {
    type Forward = Self;
    type Reverse = Self;

    #[inline]
    fn to_forward(self) -> Self {
        DirectionalCursor::to_forward(self)
    }

    #[inline]
    fn stable_to_forward(self) -> Self {
        DirectionalCursor::stable_to_forward(self)
    }

    #[inline]
    fn to_reverse(self) -> Self {
        DirectionalCursor::to_reverse(self)
    }

    #[inline]
    fn stable_to_reverse(self) -> Self {
        DirectionalCursor::stable_to_reverse(self)
    }
}

#[inline]
pub fn extract_forward<P: Position>(cursor: &DirectionalCursor<P>) -> P {
    cursor.extract_forward()
}

#[inline]
pub fn stable_extract_forward<P: Position>(cursor: &DirectionalCursor<P>) -> P {
    cursor.stable_extract_forward()
}

#[inline]
pub fn extract_reverse<P: Position>(cursor: &DirectionalCursor<P>) -> Reversed<P> {
    cursor.extract_reverse()
}

#[inline]
pub fn stable_extract_reverse<P: Position>(cursor: &DirectionalCursor<P>) -> Reversed<P> {
    cursor.stable_extract_reverse()
}

impl<P: Position> AddAssign<P::Difference> for DirectionalCursor<P> {
    #[inline]
    fn add_assign(&mut self, n: P::Difference) {
        self.advance(n);
    }
}

impl<P: Position> SubAssign<P::Difference> for DirectionalCursor<P> {
    #[inline]
    fn sub_assign(&mut self, n: P::Difference) {
        self.retreat(n);
    }
}

impl<P: Position> Add<P::Difference> for DirectionalCursor<P> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: P::Difference) -> Self {
        self += n;
        self
    }
}

impl<P: Position> Sub<P::Difference> for DirectionalCursor<P> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: P::Difference) -> Self {
        self -= n;
        self
    }
}
