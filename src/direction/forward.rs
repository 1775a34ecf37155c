//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use crate::direction::{Invert, Orient};
use crate::position::Position;
use crate::reversed::Reversed;

impl<P: Position> Invert for P {
    type Inverse = Reversed<P>;

    #[inline]
    fn invert(self) -> Reversed<P> {
        Reversed::new(self)
    }

    #[inline]
    fn stable_invert(self) -> Reversed<P> {
        Reversed::new(self.next())
    }
}

impl<P: Position> Orient for P {
    type Forward = P;
    type Reverse = Reversed<P>;

    #[inline]
    fn to_forward(self) -> P {
        self
    }

    #[inline]
    fn stable_to_forward(self) -> P {
        self
    }

    #[inline]
    fn to_reverse(self) -> Reversed<P> {
        self.invert()
    }

    #[inline]
    fn stable_to_reverse(self) -> Reversed<P> {
        self.stable_invert()
    }
}
