// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::fmt::Display;

/// The error type for checked construction of ranges over slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The start offset lies after the end offset.
    Inverted {
        /// The requested start offset.
        start: usize,
        /// The requested end offset.
        end: usize,
    },
    /// The range reaches past the end of the slice.
    OutOfBounds {
        /// The offset one past the last requested element.
        end: usize,
        /// The length of the slice.
        len: usize,
    },
    /// The offset arithmetic overflowed `usize`.
    Overflow,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inverted { start, end } => {
                write!(f, "Range start {} lies after range end {}", start, end)
            }
            Self::OutOfBounds { end, len } => write!(
                f,
                "Range end {} is out of bounds for a slice of length {}",
                end, len
            ),
            Self::Overflow => write!(f, "Range offset arithmetic overflowed"),
        }
    }
}

impl std::error::Error for RangeError {}
