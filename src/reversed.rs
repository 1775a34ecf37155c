//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use crate::position::Position;
use core::cmp::Ordering;
use num_traits::One;

/// A position walking the sequence of its base backwards.
///
/// `Reversed::new(p)` refers to the element just before `p`, so the
/// reversed end sentinel is built from the forward begin position and the
/// reversed begin from the forward end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reversed<P> {
    base: P,
}

impl<P> Reversed<P> {
    #[inline]
    pub fn new(base: P) -> Self {
        Self { base }
    }

    /// The forward position this was built from.
    #[inline]
    pub fn base(&self) -> &P {
        &self.base
    }

    #[inline]
    pub fn into_base(self) -> P {
        self.base
    }
}

impl<P: Position> Reversed<P> {
    /// Returns the element just before the base position.
    #[inline]
    pub fn get(&self) -> P::Reference {
        self.base.prev().get()
    }

    #[inline]
    pub fn increment(&mut self) {
        self.base.decrement();
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.base.increment();
    }

    /// Moves `n` slots in reverse order, that is toward the beginning of
    /// the underlying sequence.
    #[inline]
    pub fn advance(&mut self, n: P::Difference) {
        self.base.retreat(n);
    }

    #[inline]
    pub fn retreat(&mut self, n: P::Difference) {
        self.base.advance(n);
    }

    /// Returns `self - other` measured in reverse order.
    #[inline]
    pub fn distance_from(&self, other: &Self) -> P::Difference {
        other.base.distance_from(&self.base)
    }

    #[inline]
    pub fn at(&self, n: P::Difference) -> P::Reference {
        self.base.at(-n - P::Difference::one())
    }

    #[inline]
    pub fn next(&self) -> Self {
        Self::new(self.base.prev())
    }

    #[inline]
    pub fn prev(&self) -> Self {
        Self::new(self.base.next())
    }
}

impl<P: PartialOrd> PartialOrd for Reversed<P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<P: Ord> Ord for Reversed<P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}
