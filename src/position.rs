//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use num_traits::Signed;

/// A random-access cursor over a linear sequence, in its natural order.
///
/// Implementors own no elements; a position is a copyable coordinate into a
/// sequence that outlives it. The valid range is every element slot plus
/// the one-past-the-end sentinel.
///
/// Comparison and `distance_from` are only meaningful between positions of
/// the same sequence.
pub trait Position: Clone + PartialEq + PartialOrd {
    /// What dereferencing yields. Member access goes through this value.
    type Reference;
    /// Signed offset between two positions.
    type Difference: Signed + Copy;

    /// Returns the element at this position.
    ///
    /// The position must not be the end sentinel.
    fn get(&self) -> Self::Reference;

    fn increment(&mut self);

    fn decrement(&mut self);

    /// Moves by `n` slots; negative values move toward the beginning.
    fn advance(&mut self, n: Self::Difference);

    /// Returns `self - other`.
    fn distance_from(&self, other: &Self) -> Self::Difference;

    #[inline]
    fn retreat(&mut self, n: Self::Difference) {
        self.advance(-n);
    }

    /// Returns the element `n` slots away.
    #[inline]
    fn at(&self, n: Self::Difference) -> Self::Reference {
        let mut p = self.clone();
        p.advance(n);
        p.get()
    }

    #[inline]
    fn next(&self) -> Self {
        let mut p = self.clone();
        p.increment();
        p
    }

    #[inline]
    fn prev(&self) -> Self {
        let mut p = self.clone();
        p.decrement();
        p
    }
}
