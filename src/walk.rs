//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use crate::cursor::DirectionalCursor;
use crate::direction::Direction;
use crate::position::Position;
use crate::relation::{Coordinate, Relation};
use core::iter::FusedIterator;

/// Iterator over the elements between a cursor and an end bound, in the
/// cursor's direction.
///
/// The bound must be reachable by stepping the cursor.
#[derive(Clone, Debug)]
pub struct Walk<P, O> {
    cursor: DirectionalCursor<P>,
    end: O,
}

impl<P: Position, O: Coordinate<P>> Walk<P, O> {
    pub(crate) fn new(cursor: DirectionalCursor<P>, end: O) -> Self {
        debug!(
            "walking {}",
            match cursor.direction() {
                Direction::Forward => "forward",
                Direction::Reverse => "in reverse",
            }
        );
        Self { cursor, end }
    }

    /// The position the next item will be read from.
    #[inline]
    pub fn cursor(&self) -> &DirectionalCursor<P> {
        &self.cursor
    }
}

impl<P: Position, O: Coordinate<P>> Iterator for Walk<P, O> {
    type Item = P::Reference;

    fn next(&mut self) -> Option<P::Reference> {
        if self.cursor.compare(Relation::Eq, &self.end) {
            return None;
        }
        Some(self.cursor.post_increment().get())
    }
}

impl<P: Position, O: Coordinate<P>> FusedIterator for Walk<P, O> {}
