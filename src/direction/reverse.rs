//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use crate::direction::{Invert, Orient};
use crate::position::Position;
use crate::reversed::Reversed;

impl<P: Position> Invert for Reversed<P> {
    type Inverse = P;

    #[inline]
    fn invert(self) -> P {
        self.into_base()
    }

    /// The forward position of the element this one references. The
    /// reversed end sentinel has no such element.
    #[inline]
    fn stable_invert(self) -> P {
        self.next().into_base()
    }
}

impl<P: Position> Orient for Reversed<P> {
    type Forward = P;
    type Reverse = Reversed<P>;

    #[inline]
    fn to_forward(self) -> P {
        self.invert()
    }

    #[inline]
    fn stable_to_forward(self) -> P {
        self.stable_invert()
    }

    #[inline]
    fn to_reverse(self) -> Self {
        self
    }

    #[inline]
    fn stable_to_reverse(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::*;
    use crate::position::Position;
    use crate::reversed::Reversed;
    use crate::slice::SlicePosition;

    static S: [i32; 6] = [10, 20, 30, 40, 50, 60];

    #[test]
    fn invert_returns_base() {
        let p = SlicePosition::new(&S, 4).unwrap();
        assert_eq!(invert(Reversed::new(p)), p);
        assert_eq!(invert(SlicePosition::rend(&S)), SlicePosition::begin(&S));
    }

    #[test]
    fn stable_invert_keeps_element() {
        let mut r = SlicePosition::rbegin(&S);
        let rend = SlicePosition::rend(&S);
        while r != rend {
            let p = stable_invert(r);
            assert_eq!(*p.get(), *r.get());
            r.increment();
        }
    }

    #[test]
    fn to_reverse_is_identity() {
        let r = SlicePosition::rbegin(&S);
        assert_eq!(to_reverse(r), r);
        assert_eq!(stable_to_reverse(r), r);
    }

    #[test]
    fn round_trips() {
        let r = Reversed::new(SlicePosition::new(&S, 3).unwrap());
        assert_eq!(to_reverse(to_forward(r)), r);
        assert_eq!(stable_to_reverse(stable_to_forward(r)), r);
        assert_eq!(*stable_to_forward(r).get(), 30);
        assert_eq!(*to_forward(r).get(), 40);
    }

    #[test]
    #[should_panic]
    fn stable_invert_of_reversed_end_fails() {
        let _ = stable_invert(SlicePosition::rend(&S));
    }
}
