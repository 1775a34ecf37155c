//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.
//!
//! Conversions between forward and reversed positions.
//!
//! Every conversion exists for a forward `Position`, for a `Reversed`
//! position and for the `Directed` union of both. The literal flavour
//! keeps the coordinate: `invert(p)` is `Reversed::new(p)` and refers to
//! the slot before `p`. The stable flavour keeps the element:
//! `stable_invert(p)` refers to the same element `p` does, and requires
//! that element to exist.

pub(crate) mod forward;
pub(crate) mod reverse;

use crate::position::Position;
use crate::reversed::Reversed;

/// Which way a cursor is currently walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn is_reverse(self) -> bool {
        self == Direction::Reverse
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

pub trait Invert: Sized {
    type Inverse;

    /// Flips the direction keeping the coordinate, shifting the referenced
    /// element by one slot.
    fn invert(self) -> Self::Inverse;

    /// Flips the direction keeping the referenced element.
    ///
    /// The position must reference an element.
    fn stable_invert(self) -> Self::Inverse;
}

/// Directed conversions: identity when already walking the requested way,
/// the matching `Invert` conversion otherwise.
pub trait Orient: Sized {
    type Forward;
    type Reverse;

    fn to_forward(self) -> Self::Forward;
    fn stable_to_forward(self) -> Self::Forward;
    fn to_reverse(self) -> Self::Reverse;
    fn stable_to_reverse(self) -> Self::Reverse;
}

#[inline]
pub fn invert<T: Invert>(it: T) -> T::Inverse {
    it.invert()
}

#[inline]
pub fn stable_invert<T: Invert>(it: T) -> T::Inverse {
    it.stable_invert()
}

#[inline]
pub fn to_forward<T: Orient>(it: T) -> T::Forward {
    it.to_forward()
}

#[inline]
pub fn stable_to_forward<T: Orient>(it: T) -> T::Forward {
    it.stable_to_forward()
}

#[inline]
pub fn to_reverse<T: Orient>(it: T) -> T::Reverse {
    it.to_reverse()
}

#[inline]
pub fn stable_to_reverse<T: Orient>(it: T) -> T::Reverse {
    it.stable_to_reverse()
}

/// Either a forward or a reversed position over the same sequence.
#[derive(Clone, Copy, Debug)]
pub enum Directed<P> {
    Forward(P),
    Reverse(Reversed<P>),
}

impl<P> Directed<P> {
    #[inline]
    pub fn direction(&self) -> Direction {
        match *self {
            Directed::Forward(_) => Direction::Forward,
            Directed::Reverse(_) => Direction::Reverse,
        }
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.direction().is_reverse()
    }

    #[inline]
    pub fn as_forward(&self) -> Option<&P> {
        match self {
            Directed::Forward(p) => Some(p),
            Directed::Reverse(_) => None,
        }
    }

    #[inline]
    pub fn as_reverse(&self) -> Option<&Reversed<P>> {
        match self {
            Directed::Forward(_) => None,
            Directed::Reverse(r) => Some(r),
        }
    }

    /// The coordinate in forward terms: the position itself, or the base of
    /// a reversed one.
    #[inline]
    pub(crate) fn literal_base(&self) -> &P {
        match self {
            Directed::Forward(p) => p,
            Directed::Reverse(r) => r.base(),
        }
    }
}

impl<P: Position> Directed<P> {
    #[inline]
    pub fn get(&self) -> P::Reference {
        match self {
            Directed::Forward(p) => p.get(),
            Directed::Reverse(r) => r.get(),
        }
    }

    #[inline]
    pub fn increment(&mut self) {
        match self {
            Directed::Forward(p) => p.increment(),
            Directed::Reverse(r) => r.increment(),
        }
    }

    #[inline]
    pub fn decrement(&mut self) {
        match self {
            Directed::Forward(p) => p.decrement(),
            Directed::Reverse(r) => r.decrement(),
        }
    }

    #[inline]
    pub fn advance(&mut self, n: P::Difference) {
        match self {
            Directed::Forward(p) => p.advance(n),
            Directed::Reverse(r) => r.advance(n),
        }
    }

    #[inline]
    pub fn retreat(&mut self, n: P::Difference) {
        match self {
            Directed::Forward(p) => p.retreat(n),
            Directed::Reverse(r) => r.retreat(n),
        }
    }

    #[inline]
    pub fn at(&self, n: P::Difference) -> P::Reference {
        match self {
            Directed::Forward(p) => p.at(n),
            Directed::Reverse(r) => r.at(n),
        }
    }
}

impl<P: Position> Invert for Directed<P> {
    type Inverse = Directed<P>;

    #[inline]
    fn invert(self) -> Self {
        match self {
            Directed::Forward(p) => Directed::Reverse(p.invert()),
            Directed::Reverse(r) => Directed::Forward(r.invert()),
        }
    }

    #[inline]
    fn stable_invert(self) -> Self {
        match self {
            Directed::Forward(p) => Directed::Reverse(p.stable_invert()),
            Directed::Reverse(r) => Directed::Forward(r.stable_invert()),
        }
    }
}

impl<P: Position> Orient for Directed<P> {
    type Forward = Directed<P>;
    type Reverse = Directed<P>;

    #[inline]
    fn to_forward(self) -> Self {
        match self {
            Directed::Forward(p) => Directed::Forward(p.to_forward()),
            Directed::Reverse(r) => Directed::Forward(r.to_forward()),
        }
    }

    #[inline]
    fn stable_to_forward(self) -> Self {
        match self {
            Directed::Forward(p) => Directed::Forward(p.stable_to_forward()),
            Directed::Reverse(r) => Directed::Forward(r.stable_to_forward()),
        }
    }

    #[inline]
    fn to_reverse(self) -> Self {
        match self {
            Directed::Forward(p) => Directed::Reverse(p.to_reverse()),
            Directed::Reverse(r) => Directed::Reverse(r.to_reverse()),
        }
    }

    #[inline]
    fn stable_to_reverse(self) -> Self {
        match self {
            Directed::Forward(p) => Directed::Reverse(p.stable_to_reverse()),
            Directed::Reverse(r) => Directed::Reverse(r.stable_to_reverse()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::SlicePosition;

    static S: [i32; 6] = [10, 20, 30, 40, 50, 60];

    fn at(i: usize) -> SlicePosition<'static, i32> {
        SlicePosition::new(&S, i).unwrap()
    }

    #[test]
    fn direction_opposite() {
        assert_eq!(Direction::Forward.opposite(), Direction::Reverse);
        assert_eq!(Direction::Reverse.opposite(), Direction::Forward);
        assert!(Direction::Reverse.is_reverse());
        assert!(!Direction::Forward.is_reverse());
    }

    #[test]
    fn union_invert_dispatches() {
        let d = Directed::Forward(at(3));
        let inv = invert(d);
        assert_eq!(inv.direction(), Direction::Reverse);
        assert_eq!(*inv.get(), 30);
        assert_eq!(inv.as_reverse().map(|r| *r.base()), Some(at(3)));

        let back = invert(inv);
        assert_eq!(back.as_forward(), Some(&at(3)));
    }

    #[test]
    fn union_stable_invert_keeps_element() {
        let d = Directed::Forward(at(3));
        let flipped = stable_invert(d);
        assert!(flipped.is_reverse());
        assert_eq!(*flipped.get(), 40);

        let back = stable_invert(flipped);
        assert_eq!(back.as_forward(), Some(&at(3)));
    }

    #[test]
    fn union_directed_conversions() {
        let f = Directed::Forward(at(2));
        assert_eq!(to_forward(f).as_forward(), Some(&at(2)));
        assert_eq!(stable_to_forward(f).as_forward(), Some(&at(2)));
        assert_eq!(*to_reverse(f).get(), 20);
        assert_eq!(*stable_to_reverse(f).get(), 30);

        let r = Directed::Reverse(Reversed::new(at(2)));
        assert_eq!(to_reverse(r).as_reverse(), Some(&Reversed::new(at(2))));
        assert_eq!(
            stable_to_reverse(r).as_reverse(),
            Some(&Reversed::new(at(2)))
        );
        assert_eq!(to_forward(r).as_forward(), Some(&at(2)));
        assert_eq!(stable_to_forward(r).as_forward(), Some(&at(1)));
    }

    #[test]
    fn union_walks_in_its_direction() {
        let mut d = Directed::Reverse(SlicePosition::rbegin(&S));
        d.increment();
        assert_eq!(*d.get(), 50);
        d.advance(2);
        assert_eq!(*d.get(), 30);
        d.retreat(1);
        d.decrement();
        assert_eq!(*d.get(), 50);
        assert_eq!(*d.at(1), 40);

        let mut d = Directed::Forward(SlicePosition::begin(&S));
        d.advance(4);
        d.decrement();
        assert_eq!(*d.get(), 40);
        assert_eq!(*d.at(-1), 30);
    }
}
