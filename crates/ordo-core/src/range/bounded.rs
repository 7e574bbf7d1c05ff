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

//! Bounded ranges: a `first` position and a `last` position one past the
//! final element.

use crate::position::{Position, RandomAccessPosition, SlicePosition};
use crate::range::{Range, RangeError};

/// A range delimited by an explicit end position.
///
/// The end position is never dereferenced. The range is empty once `first`
/// compares equal to `last`.
///
/// # Examples
///
/// ```rust
/// # use ordo_core::range::{Bounded, Range};
/// let data = [4, 5, 6];
/// let mut r = Bounded::from_slice(&data);
/// let mut seen = Vec::new();
/// while !r.is_empty() {
///     seen.push(*r.source());
///     r.step();
/// }
/// assert_eq!(seen, [4, 5, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded<P> {
    first: P,
    last: P,
}

impl<P> Bounded<P> {
    /// Creates the range `[first, last)`.
    ///
    /// `last` must be reachable from `first`.
    #[inline]
    pub const fn new(first: P, last: P) -> Self {
        Self { first, last }
    }

    /// Returns the current front position.
    #[inline]
    pub const fn first(&self) -> &P {
        &self.first
    }

    /// Returns the end position.
    #[inline]
    pub const fn last(&self) -> &P {
        &self.last
    }

    /// Splits the range into its `(first, last)` positions.
    #[inline]
    pub fn into_parts(self) -> (P, P) {
        (self.first, self.last)
    }
}

impl<'a, T> Bounded<SlicePosition<'a, T>> {
    /// Creates a range over the whole of `slice`.
    #[inline]
    pub const fn from_slice(slice: &'a [T]) -> Self {
        Self::new(SlicePosition::begin(slice), SlicePosition::end(slice))
    }

    /// Creates the range `[start, end)` over `slice`, validating the offsets.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Inverted` if `start > end` and
    /// `RangeError::OutOfBounds` if `end > slice.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordo_core::range::{Bounded, RangeError};
    /// let data = [1, 2, 3, 4];
    /// let r = Bounded::try_from_slice_bounds(&data, 1, 3).unwrap();
    /// assert_eq!(r.first().index(), 1);
    /// assert_eq!(
    ///     Bounded::try_from_slice_bounds(&data, 2, 5),
    ///     Err(RangeError::OutOfBounds { end: 5, len: 4 })
    /// );
    /// ```
    pub fn try_from_slice_bounds(
        slice: &'a [T],
        start: usize,
        end: usize,
    ) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        if end > slice.len() {
            return Err(RangeError::OutOfBounds {
                end,
                len: slice.len(),
            });
        }
        Ok(Self::new(
            SlicePosition::at(slice, start),
            SlicePosition::at(slice, end),
        ))
    }
}

impl<P> Bounded<P>
where
    P: Position + PartialEq,
{
    /// Returns `true` if the range holds no elements.
    ///
    /// Same as [`Range::is_empty`], callable without the trait in scope.
    #[inline]
    pub fn is_empty(&self) -> bool {
        Range::is_empty(self)
    }
}

impl<P> Bounded<P>
where
    P: RandomAccessPosition,
{
    /// Returns the number of elements in the range.
    #[inline]
    pub fn len(&self) -> P::Distance {
        self.first.distance_to(&self.last)
    }
}

impl<P> Range for Bounded<P>
where
    P: Position + PartialEq,
{
    type Position = P;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.first == self.last
    }

    #[inline(always)]
    fn position(&self) -> &P {
        &self.first
    }

    #[inline(always)]
    fn step(&mut self) {
        debug_assert!(!Range::is_empty(self), "called `step` on an empty bounded range");
        self.first.step();
    }
}
