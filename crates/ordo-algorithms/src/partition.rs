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

//! # Partitions and Bound Queries
//!
//! A range is partitioned under a predicate when every element satisfying the
//! predicate precedes every element that does not. The partition point is the
//! first element that does not satisfy it, and it can be found by binary
//! search in a logarithmic number of predicate calls.
//!
//! The bound queries are partition points under predicates derived from a
//! strict weak order `comp`:
//!
//! - `lower_bound`: first element `x` with `!comp(x, value)`.
//! - `upper_bound`: first element `x` with `comp(value, x)`.
//! - `equal_range`: both bounds, delimiting the elements equivalent to
//!   `value`.
//!
//! # Preconditions
//!
//! Binary search requires a `RandomAccessPosition`. The input must be
//! partitioned under the predicate, or sorted under `comp` for the bound
//! queries. In debug builds `partition_point_n` verifies this with an extra
//! linear pass and panics on violation; in release builds a violated
//! precondition yields an unspecified position inside the range.

use crate::search::{find_if, find_if_not};
use num_traits::{One, Zero};
use ordo_core::concepts::{Predicate, Relation};
use ordo_core::position::RandomAccessPosition;
use ordo_core::range::{Bounded, Counted, Range, ValueType};

/// Returns `true` if no element satisfying `pred` follows an element that
/// does not.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::partition::is_partitioned;
/// # use ordo_core::range::Bounded;
/// let small = |x: &i32| *x < 10;
/// assert!(is_partitioned(Bounded::from_slice(&[1, 5, 12, 40]), small));
/// assert!(!is_partitioned(Bounded::from_slice(&[1, 12, 5, 40]), small));
/// ```
pub fn is_partitioned<R, P>(range: R, mut pred: P) -> bool
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    let rest = find_if_not(range, &mut pred);
    find_if(rest, &mut pred).is_empty()
}

/// Returns the partition point of the `n` elements starting at `first`.
///
/// # Panics
///
/// In debug builds, panics if the elements are not partitioned under `pred`.
pub fn partition_point_n<P, Pred>(mut first: P, mut n: P::Distance, mut pred: Pred) -> P
where
    P: RandomAccessPosition,
    Pred: Predicate<P::Value>,
{
    debug_assert!(
        is_partitioned(Counted::new(first.clone(), n), &mut pred),
        "called `partition_point_n` on a range that is not partitioned"
    );

    while !n.is_zero() {
        let half = n >> 1;
        let mut middle = first.clone();
        middle.advance_by(half);
        if pred(middle.source()) {
            middle.step();
            first = middle;
            n = n - (half + <P::Distance as One>::one());
        } else {
            n = half;
        }
    }
    first
}

/// Returns the partition point of the bounded `range`.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::partition::partition_point;
/// # use ordo_core::range::Bounded;
/// let data = [2, 4, 6, 7, 9];
/// let p = partition_point(Bounded::from_slice(&data), |x: &i32| x % 2 == 0);
/// assert_eq!(p.index(), 3);
/// ```
#[inline]
pub fn partition_point<P, Pred>(range: Bounded<P>, pred: Pred) -> P
where
    P: RandomAccessPosition,
    Pred: Predicate<P::Value>,
{
    let (first, last) = range.into_parts();
    let n = first.distance_to(&last);
    partition_point_n(first, n, pred)
}

/// Returns the first position whose element is not less than `value`.
#[inline]
pub fn lower_bound<P>(range: Bounded<P>, value: &P::Value) -> P
where
    P: RandomAccessPosition,
    P::Value: PartialOrd,
{
    lower_bound_by(range, value, |a: &P::Value, b: &P::Value| a < b)
}

/// Returns the first position whose element `x` has `!comp(x, value)`.
///
/// The range must be sorted under the strict weak order `comp`.
#[inline]
pub fn lower_bound_by<P, C>(range: Bounded<P>, value: &P::Value, mut comp: C) -> P
where
    P: RandomAccessPosition,
    C: Relation<P::Value>,
{
    partition_point(range, |x: &P::Value| comp(x, value))
}

/// Returns the first position whose element is greater than `value`.
#[inline]
pub fn upper_bound<P>(range: Bounded<P>, value: &P::Value) -> P
where
    P: RandomAccessPosition,
    P::Value: PartialOrd,
{
    upper_bound_by(range, value, |a: &P::Value, b: &P::Value| a < b)
}

/// Returns the first position whose element `x` has `comp(value, x)`.
///
/// The range must be sorted under the strict weak order `comp`.
#[inline]
pub fn upper_bound_by<P, C>(range: Bounded<P>, value: &P::Value, mut comp: C) -> P
where
    P: RandomAccessPosition,
    C: Relation<P::Value>,
{
    partition_point(range, |x: &P::Value| !comp(value, x))
}

/// Returns the lower and upper bound of `value` in the sorted `range`.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::partition::equal_range;
/// # use ordo_core::range::Bounded;
/// let data = [1, 1, 2, 2, 2, 3];
/// let (lo, hi) = equal_range(Bounded::from_slice(&data), &2);
/// assert_eq!((lo.index(), hi.index()), (2, 5));
/// ```
#[inline]
pub fn equal_range<P>(range: Bounded<P>, value: &P::Value) -> (P, P)
where
    P: RandomAccessPosition,
    P::Value: PartialOrd,
{
    equal_range_by(range, value, |a: &P::Value, b: &P::Value| a < b)
}

/// Returns the lower and upper bound of `value` under `comp`.
///
/// The upper bound is searched only in the part of the range at or after the
/// lower bound.
pub fn equal_range_by<P, C>(range: Bounded<P>, value: &P::Value, mut comp: C) -> (P, P)
where
    P: RandomAccessPosition,
    C: Relation<P::Value>,
{
    let (first, last) = range.into_parts();
    let lower = lower_bound_by(Bounded::new(first, last.clone()), value, &mut comp);
    let upper = upper_bound_by(Bounded::new(lower.clone(), last), value, &mut comp);
    (lower, upper)
}
