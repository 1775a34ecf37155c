//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use crate::direction::Directed;
use crate::position::Position;
use crate::reversed::Reversed;
use core::cmp::Ordering;

/// Selects one of the six relational operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Relation {
    /// Evaluates `lhs <op> rhs`.
    #[inline]
    pub fn holds<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Relation::Eq => lhs == rhs,
            Relation::Ne => lhs != rhs,
            Relation::Lt => lhs < rhs,
            Relation::Le => lhs <= rhs,
            Relation::Gt => lhs > rhs,
            Relation::Ge => lhs >= rhs,
        }
    }
}

/// Something that can be placed in the coordinate space of forward
/// positions over `P`'s sequence.
pub trait Coordinate<P: Position> {
    /// The coordinate after a literal invert of a reversed operand. A
    /// reversed position maps to its base.
    fn literal_coordinate(&self) -> &P;

    /// The forward position of the referenced element, i.e. after a stable
    /// invert of a reversed operand. The reversed end sentinel has none.
    fn stable_coordinate(&self) -> P;
}

impl<P: Position> Coordinate<P> for P {
    #[inline]
    fn literal_coordinate(&self) -> &P {
        self
    }

    #[inline]
    fn stable_coordinate(&self) -> P {
        self.clone()
    }
}

impl<P: Position> Coordinate<P> for Reversed<P> {
    #[inline]
    fn literal_coordinate(&self) -> &P {
        self.base()
    }

    #[inline]
    fn stable_coordinate(&self) -> P {
        self.base().prev()
    }
}

impl<P: Position> Coordinate<P> for Directed<P> {
    #[inline]
    fn literal_coordinate(&self) -> &P {
        self.literal_base()
    }

    #[inline]
    fn stable_coordinate(&self) -> P {
        match self {
            Directed::Forward(p) => p.stable_coordinate(),
            Directed::Reverse(r) => r.stable_coordinate(),
        }
    }
}

/// Compares two operands in forward coordinates, normalizing reversed ones
/// with a literal invert.
#[inline]
pub(crate) fn compare<P, L, R>(relation: Relation, lhs: &L, rhs: &R) -> bool
where
    P: Position,
    L: Coordinate<P> + ?Sized,
    R: Coordinate<P> + ?Sized,
{
    relation.holds(lhs.literal_coordinate(), rhs.literal_coordinate())
}

#[inline]
pub(crate) fn stable_compare<P, L, R>(relation: Relation, lhs: &L, rhs: &R) -> bool
where
    P: Position,
    L: Coordinate<P> + ?Sized,
    R: Coordinate<P> + ?Sized,
{
    relation.holds(&lhs.stable_coordinate(), &rhs.stable_coordinate())
}

#[inline]
pub(crate) fn difference<P, L, R>(lhs: &L, rhs: &R) -> P::Difference
where
    P: Position,
    L: Coordinate<P> + ?Sized,
    R: Coordinate<P> + ?Sized,
{
    lhs.literal_coordinate()
        .distance_from(rhs.literal_coordinate())
}

#[inline]
pub(crate) fn stable_difference<P, L, R>(lhs: &L, rhs: &R) -> P::Difference
where
    P: Position,
    L: Coordinate<P> + ?Sized,
    R: Coordinate<P> + ?Sized,
{
    lhs.stable_coordinate().distance_from(&rhs.stable_coordinate())
}

impl<P: Position> PartialEq for Directed<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        compare::<P, _, _>(Relation::Eq, self, other)
    }
}

impl<P: Position + Eq> Eq for Directed<P> {}

impl<P: Position> PartialOrd for Directed<P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.literal_base().partial_cmp(other.literal_base())
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
    fn relation_holds() {
        assert!(Relation::Lt.holds(&1, &2));
        assert!(Relation::Le.holds(&2, &2));
        assert!(Relation::Ne.holds(&1, &2));
        assert!(!Relation::Gt.holds(&1, &2));
        assert!(Relation::Ge.holds(&3, &2));
        assert!(Relation::Eq.holds(&2, &2));
    }

    #[test]
    fn literal_normalization_uses_base() {
        let p = at(3);
        let r = Reversed::new(at(3));
        assert!(compare(Relation::Eq, &p, &r));
        assert_eq!(difference(&p, &r), 0);
        assert_eq!(difference(&at(5), &SlicePosition::rbegin(&S)), -1);
    }

    #[test]
    fn stable_normalization_uses_element() {
        let p = at(3);
        let r = Reversed::new(at(3));
        assert!(stable_compare(Relation::Ne, &p, &r));
        assert!(stable_compare(Relation::Gt, &p, &r));
        assert_eq!(stable_difference(&p, &r), 1);
    }

    #[test]
    fn union_equality_is_normalized() {
        let f = Directed::Forward(at(2));
        let r = Directed::Reverse(Reversed::new(at(2)));
        assert_eq!(f, r);
        assert!(Directed::Forward(at(1)) < r);
        assert!(Directed::Reverse(SlicePosition::rbegin(&S)) > f);
    }
}
