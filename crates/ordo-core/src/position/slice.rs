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

//! # Slice Positions
//!
//! `SlicePosition<'a, T>` is a random-access position into a borrowed slice,
//! represented as the slice plus an offset. The offset may equal the slice
//! length, in which case the position denotes the end of the slice and must
//! not be dereferenced.
//!
//! Two positions compare equal when they point into the same slice (same
//! address and length) at the same offset.
//!
//! ## Usage
//!
//! ```rust
//! use ordo_core::position::{Position, RandomAccessPosition, SlicePosition};
//!
//! let data = [10, 20, 30, 40];
//! let mut p = SlicePosition::begin(&data);
//! p.step();
//! assert_eq!(*p.source(), 20);
//! p.advance_by(2);
//! assert_eq!(*p.source(), 40);
//! assert_eq!(p.distance_to(&SlicePosition::end(&data)), 1);
//! ```

use crate::position::{ForwardPosition, Position, RandomAccessPosition};

/// A position into a slice.
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SlicePosition<'a, T> {
    /// Creates a position at the first element of `slice`.
    #[inline]
    pub const fn begin(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    /// Creates the position one past the last element of `slice`.
    #[inline]
    pub const fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: slice.len(),
        }
    }

    /// Creates a position at offset `index` of `slice`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `index > slice.len()`.
    #[inline]
    pub fn at(slice: &'a [T], index: usize) -> Self {
        debug_assert!(
            index <= slice.len(),
            "called `SlicePosition::at` with index {} on a slice of length {}",
            index,
            slice.len()
        );
        Self { slice, index }
    }

    /// Returns the offset of this position from the start of its slice.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the slice this position points into.
    #[inline]
    pub const fn slice(&self) -> &'a [T] {
        self.slice
    }

    /// Returns `true` if the position denotes the end of its slice.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.index == self.slice.len()
    }
}

impl<T> Clone for SlicePosition<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<T> PartialEq for SlicePosition<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.slice, other.slice)
    }
}

impl<T> Eq for SlicePosition<'_, T> {}

impl<T> std::fmt::Debug for SlicePosition<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlicePosition({}/{})", self.index, self.slice.len())
    }
}

impl<T> Position for SlicePosition<'_, T> {
    type Value = T;
    type Distance = usize;

    #[inline(always)]
    fn source(&self) -> &T {
        &self.slice[self.index]
    }

    #[inline(always)]
    fn step(&mut self) {
        debug_assert!(
            self.index < self.slice.len(),
            "called `step` on a slice position at the end of its slice"
        );
        self.index += 1;
    }
}

impl<T> ForwardPosition for SlicePosition<'_, T> {}

impl<T> RandomAccessPosition for SlicePosition<'_, T> {
    #[inline(always)]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(
            n <= self.slice.len() - self.index,
            "called `advance_by` past the end of the slice"
        );
        self.index += n;
    }

    #[inline(always)]
    fn distance_to(&self, last: &Self) -> usize {
        debug_assert!(
            std::ptr::eq(self.slice, last.slice) && self.index <= last.index,
            "called `distance_to` with a position that is not reachable"
        );
        last.index - self.index
    }
}
