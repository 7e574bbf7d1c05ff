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

//! # Positions
//!
//! Positions are the cursors that algorithms walk. A position can be
//! dereferenced to the value it denotes and stepped to its successor; stronger
//! capabilities are layered on top as separate traits so that an algorithm
//! states exactly how much it needs from its input.
//!
//! ## Capabilities
//!
//! - `Position`: dereference (`source`) and advance by one (`step`). This is
//!   enough for single-pass scans: once stepped, earlier values may be gone.
//! - `ForwardPosition`: a multi-pass position that can be cloned and compared.
//!   Two clones stepped the same number of times denote the same value.
//! - `RandomAccessPosition`: a forward position that can jump by `n` and
//!   measure the distance to a later position in constant time. The
//!   binary-search family requires it.
//!
//! ## Submodules
//!
//! - `slice`: `SlicePosition<'a, T>`, a random-access position into a slice.
//! - `stream`: `StreamPosition<I>`, a single-pass position over any iterator.
//!
//! Dereferencing a position that denotes the end of its sequence is a
//! precondition violation; the concrete positions here panic rather than read
//! out of bounds.

pub mod slice;
pub mod stream;

use num_traits::{PrimInt, Unsigned};

pub use slice::SlicePosition;
pub use stream::StreamPosition;

/// A cursor over a sequence of values.
pub trait Position {
    /// The type of the values the position denotes.
    type Value;

    /// The type used to count steps between positions.
    type Distance: PrimInt + Unsigned;

    /// Returns the value at this position.
    ///
    /// # Panics
    ///
    /// Implementations may panic if the position denotes the end of its
    /// sequence.
    fn source(&self) -> &Self::Value;

    /// Advances the position by one.
    fn step(&mut self);
}

/// A multi-pass position.
///
/// Cloning a forward position yields an independent cursor that denotes the
/// same value, and equality tells whether two cursors denote the same place.
pub trait ForwardPosition: Position + Clone + PartialEq {}

/// A forward position that supports constant-time jumps and distances.
pub trait RandomAccessPosition: ForwardPosition {
    /// Advances the position by `n` steps at once.
    fn advance_by(&mut self, n: Self::Distance);

    /// Returns the number of steps from `self` to `last`.
    ///
    /// `last` must be reachable from `self`.
    fn distance_to(&self, last: &Self) -> Self::Distance;
}
