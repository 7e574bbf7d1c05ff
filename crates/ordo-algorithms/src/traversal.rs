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

//! # Traversal
//!
//! Side-effecting visits over every element of a range. The callable is
//! invoked once per element, in order, with no early exit, and is handed back
//! afterwards so stateful callables can report what they accumulated.

use ordo_core::concepts::CallableWith;
use ordo_core::position::Position;
use ordo_core::range::{Counted, Range, ValueType};

/// Invokes `op` on every element of `range` in order and returns `op`.
///
/// The return value of each invocation is discarded.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::traversal::for_each;
/// # use ordo_core::range::Bounded;
/// let data = [1, 2, 3];
/// let mut seen = Vec::new();
/// let _ = for_each(Bounded::from_slice(&data), |x: &i32| seen.push(*x * 10));
/// assert_eq!(seen, [10, 20, 30]);
/// ```
pub fn for_each<R, F>(mut range: R, mut op: F) -> F
where
    R: Range,
    F: for<'a> CallableWith<(&'a ValueType<R>,)>,
{
    while !range.is_empty() {
        op.call_with((range.source(),));
        range.step();
    }
    op
}

/// Invokes `op` on the `n` elements starting at `first`.
///
/// Returns `op` together with the position one past the last visited
/// element.
pub fn for_each_n<P, F>(first: P, n: P::Distance, op: F) -> (F, P)
where
    P: Position,
    F: for<'a> CallableWith<(&'a P::Value,)>,
{
    let mut range = Counted::new(first, n);
    let mut op = op;
    while !range.is_empty() {
        op.call_with((range.source(),));
        range.step();
    }
    let (last, _) = range.into_parts();
    (op, last)
}
