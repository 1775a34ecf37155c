//! directional-cursor
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! <http://mozilla.org/MPL/2.0/>.

use core::fmt;

/// Errors reported by the checked helpers of the slice adapter.
///
/// The cursor operations themselves never return errors: violating their
/// preconditions panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The requested index lies outside `0..=len`.
    OutOfBounds { index: usize, len: usize },
    /// The position is the end sentinel and has no element.
    EndOfSequence,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CursorError::OutOfBounds { index, len } => write!(
                f,
                "{} (index {}, length {})",
                self.description_in(),
                index,
                len
            ),
            CursorError::EndOfSequence => write!(f, "{}", self.description_in()),
        }
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        impl ::std::error::Error for CursorError {
            fn description(&self) -> &str {
                self.description_in()
            }
        }
    }
}

impl CursorError {
    fn description_in(&self) -> &str {
        match *self {
            CursorError::OutOfBounds { .. } => "position out of bounds",
            CursorError::EndOfSequence => "no element at the end of the sequence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_bounds() {
        let e = CursorError::OutOfBounds { index: 7, len: 6 };
        assert_eq!(
            format!("{}", e),
            "position out of bounds (index 7, length 6)"
        );
    }

    #[test]
    fn display_end_of_sequence() {
        assert_eq!(
            format!("{}", CursorError::EndOfSequence),
            "no element at the end of the sequence"
        );
    }
}
