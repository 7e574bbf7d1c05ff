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

//! # Ranges
//!
//! A range is a position together with a description of where the sequence
//! stops. Algorithms consume ranges left to right through a single minimal
//! interface and hand back the narrowed range at the point where they stopped,
//! so the same algorithm serves both kinds of range.
//!
//! ## Range kinds
//!
//! - `Bounded<P>`: delimited by an explicit `last` position that is never
//!   dereferenced. Requires positions that can be compared for equality.
//! - `Counted<P>`: delimited by a count of remaining steps. Works with any
//!   position, including single-pass `StreamPosition`s.
//!
//! ## Invariants
//!
//! For a bounded range, `last` must be reachable from `first` by finitely many
//! steps. For a counted range, the count must not exceed the number of valid
//! steps remaining. Both are caller obligations and are not checked, except by
//! the `try_*` slice constructors, which validate offsets against the slice
//! length and report violations through `RangeError`.
//!
//! ## Usage
//!
//! ```rust
//! use ordo_core::range::{Bounded, Counted, Range};
//!
//! let data = [1, 2, 3];
//! let mut bounded = Bounded::from_slice(&data);
//! bounded.step();
//! assert_eq!(*bounded.source(), 2);
//!
//! let mut counted = Counted::from_slice(&data);
//! counted.step();
//! counted.step();
//! assert_eq!(counted.remaining(), 1);
//! ```

pub mod bounded;
pub mod counted;
pub mod error;

use crate::position::Position;

pub use bounded::Bounded;
pub use counted::Counted;
pub use error::RangeError;

/// The value type of the positions of range `R`.
pub type ValueType<R> = <<R as Range>::Position as Position>::Value;

/// The distance type of the positions of range `R`.
pub type DistanceType<R> = <<R as Range>::Position as Position>::Distance;

/// A sequence that can be consumed from the front.
pub trait Range {
    /// The position type the range walks.
    type Position: Position;

    /// Returns `true` if no elements remain.
    fn is_empty(&self) -> bool;

    /// Returns the current front position.
    fn position(&self) -> &Self::Position;

    /// Drops the front element.
    ///
    /// Must not be called on an empty range.
    fn step(&mut self);

    /// Returns the front element.
    ///
    /// Must not be called on an empty range.
    #[inline(always)]
    fn source(&self) -> &ValueType<Self> {
        self.position().source()
    }
}
