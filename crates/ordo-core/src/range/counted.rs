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

//! Counted (weak) ranges: a `first` position and the number of valid steps
//! remaining from it.

use crate::position::{Position, SlicePosition, StreamPosition};
use crate::range::{Range, RangeError};
use num_traits::{One, Zero};

/// A range delimited by a count of remaining elements.
///
/// Counted ranges only need the `Position` capability, which makes them the
/// natural way to drive single-pass streams through the algorithms.
///
/// # Examples
///
/// ```rust
/// # use ordo_core::range::{Counted, Range};
/// let mut r = Counted::from_stream(10..20, 3);
/// let mut seen = Vec::new();
/// while !r.is_empty() {
///     seen.push(*r.source());
///     r.step();
/// }
/// assert_eq!(seen, [10, 11, 12]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counted<P>
where
    P: Position,
{
    first: P,
    remaining: P::Distance,
}

impl<P> Counted<P>
where
    P: Position,
{
    /// Creates the range of `n` elements starting at `first`.
    ///
    /// At least `n` valid steps must remain from `first`.
    #[inline]
    pub fn new(first: P, n: P::Distance) -> Self {
        Self {
            first,
            remaining: n,
        }
    }

    /// Returns the current front position.
    #[inline]
    pub fn first(&self) -> &P {
        &self.first
    }

    /// Returns the number of elements left in the range.
    #[inline]
    pub fn remaining(&self) -> P::Distance {
        self.remaining
    }

    /// Splits the range into its front position and remaining count.
    #[inline]
    pub fn into_parts(self) -> (P, P::Distance) {
        (self.first, self.remaining)
    }
}

impl<'a, T> Counted<SlicePosition<'a, T>> {
    /// Creates a range over the whole of `slice`.
    #[inline]
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::new(SlicePosition::begin(slice), slice.len())
    }

    /// Creates the range of `count` elements starting at offset `start` of
    /// `slice`, validating the offsets.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Overflow` if `start + count` overflows and
    /// `RangeError::OutOfBounds` if it exceeds `slice.len()`.
    pub fn try_from_slice(slice: &'a [T], start: usize, count: usize) -> Result<Self, RangeError> {
        let end = start.checked_add(count).ok_or(RangeError::Overflow)?;
        if end > slice.len() {
            return Err(RangeError::OutOfBounds {
                end,
                len: slice.len(),
            });
        }
        Ok(Self::new(SlicePosition::at(slice, start), count))
    }
}

impl<I> Counted<StreamPosition<I>>
where
    I: Iterator,
{
    /// Creates a range over the first `n` items of `iter`.
    ///
    /// `iter` must yield at least `n` items.
    #[inline]
    pub fn from_stream<T>(iter: T, n: usize) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::new(StreamPosition::new(iter), n)
    }

    /// Creates a range over all items of an iterator of known length.
    #[inline]
    pub fn from_exact_size<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
        I: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let n = iter.len();
        Self::new(StreamPosition::new(iter), n)
    }
}

impl<P> Range for Counted<P>
where
    P: Position,
{
    type Position = P;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.remaining.is_zero()
    }

    #[inline(always)]
    fn position(&self) -> &P {
        &self.first
    }

    #[inline(always)]
    fn step(&mut self) {
        debug_assert!(!self.is_empty(), "called `step` on an empty counted range");
        self.first.step();
        self.remaining = self.remaining - <P::Distance as One>::one();
    }
}
