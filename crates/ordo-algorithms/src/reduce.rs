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

//! # Reduction
//!
//! Left folds over a range. The operation is applied strictly left to right,
//! `acc = op(acc, proj(x))`, starting from the supplied initial value. The
//! order is never rearranged, so the operation only needs to be partially
//! associative over the values actually encountered.

use ordo_core::concepts::{BinaryOperation, Projection};
use ordo_core::range::{Range, ValueType};

/// Folds `range` with `op`, starting from `init`.
///
/// Elements are cloned out of the range before being combined.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::reduce::reduce;
/// # use ordo_core::range::Bounded;
/// let data = [1, 2, 3, 4];
/// assert_eq!(reduce(Bounded::from_slice(&data), 0, |a: i32, b: i32| a + b), 10);
/// ```
#[inline]
pub fn reduce<R, Op>(range: R, init: ValueType<R>, op: Op) -> ValueType<R>
where
    R: Range,
    ValueType<R>: Clone,
    Op: BinaryOperation<ValueType<R>>,
{
    reduce_by(range, init, op, |x: &ValueType<R>| x.clone())
}

/// Folds `range` with `op` after projecting each element through `proj`.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::reduce::reduce_by;
/// # use ordo_core::range::Bounded;
/// let data = [1, 2, 3, 4, 5];
/// let sum = reduce_by(
///     Bounded::from_slice(&data),
///     0,
///     |a: i32, b: i32| a + b,
///     |x: &i32| x + 1,
/// );
/// assert_eq!(sum, 20);
/// ```
pub fn reduce_by<R, D, Op, Proj>(mut range: R, init: D, mut op: Op, mut proj: Proj) -> D
where
    R: Range,
    Op: BinaryOperation<D>,
    Proj: Projection<ValueType<R>, D>,
{
    let mut acc = init;
    while !range.is_empty() {
        acc = op(acc, proj(range.source()));
        range.step();
    }
    acc
}
