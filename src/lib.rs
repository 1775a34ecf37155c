//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.
//!
//! A single cursor value that walks a linear sequence either forward or
//! backward and can switch direction at runtime.
//!
//! A forward cursor (`Position`) and its reversed counterpart
//! (`Reversed`) use different origins: `Reversed::new(p)` dereferences to
//! the element just before `p`. The literal conversions (`invert`,
//! `to_forward`, `to_reverse`) keep that one-slot shift, the stable ones
//! (`stable_invert`, `stable_to_forward`, `stable_to_reverse`) compensate it
//! so the referenced element stays the same.
//!
//! ```
//! use directional_cursor::{DirectionalCursor, SlicePosition};
//!
//! let data = [10, 20, 30, 40, 50, 60];
//! let mut cursor = DirectionalCursor::forward(SlicePosition::begin(&data));
//! cursor += 2;
//! assert_eq!(*cursor.get(), 30);
//!
//! cursor.stable_invert();
//! assert_eq!(*cursor.get(), 30);
//! cursor.increment();
//! assert_eq!(*cursor.get(), 20);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate alloc;
#[macro_use]
extern crate cfg_if;
#[macro_use]
extern crate log;
extern crate num_traits;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_xorshift;
#[cfg(test)]
extern crate simple_logger;

mod cursor;
pub mod direction;
mod error;
mod position;
mod relation;
mod reversed;
mod slice;
mod walk;

pub use crate::cursor::{
    extract_forward, extract_reverse, stable_extract_forward, stable_extract_reverse,
    DirectionalCursor,
};
pub use crate::direction::{
    invert, stable_invert, stable_to_forward, stable_to_reverse, to_forward, to_reverse, Directed,
    Direction, Invert, Orient,
};
pub use crate::error::CursorError;
pub use crate::position::Position;
pub use crate::relation::{Coordinate, Relation};
pub use crate::reversed::Reversed;
pub use crate::slice::SlicePosition;
pub use crate::walk::Walk;
