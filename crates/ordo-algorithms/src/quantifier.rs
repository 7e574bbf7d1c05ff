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

//! # Quantifiers and Counting
//!
//! `all_of`, `none_of`, and `any_of` are defined purely in terms of
//! `find_if`/`find_if_not` reaching the end of the range, so all three
//! short-circuit identically. Counting has to visit every element and
//! returns the tally in the range's distance type.

use crate::search::{find_if, find_if_not};
use num_traits::{One, Zero};
use ordo_core::concepts::Predicate;
use ordo_core::range::{DistanceType, Range, ValueType};

/// Returns `true` if every element of `range` satisfies `pred`.
///
/// Vacuously `true` for an empty range.
#[inline]
pub fn all_of<R, P>(range: R, pred: P) -> bool
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    find_if_not(range, pred).is_empty()
}

/// Returns `true` if no element of `range` satisfies `pred`.
#[inline]
pub fn none_of<R, P>(range: R, pred: P) -> bool
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    find_if(range, pred).is_empty()
}

/// Returns `true` if some element of `range` satisfies `pred`.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::quantifier::any_of;
/// # use ordo_core::range::Bounded;
/// let data = [1, 2, 3, 4, 5];
/// assert!(any_of(Bounded::from_slice(&data), |x: &i32| *x == 3));
/// assert!(!any_of(Bounded::from_slice(&data), |x: &i32| *x > 5));
/// ```
#[inline]
pub fn any_of<R, P>(range: R, pred: P) -> bool
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    !find_if(range, pred).is_empty()
}

/// Counts the elements of `range` equal to `value`.
#[inline]
pub fn count<R>(range: R, value: &ValueType<R>) -> DistanceType<R>
where
    R: Range,
    ValueType<R>: PartialEq,
{
    count_if(range, |x: &ValueType<R>| x == value)
}

/// Counts the elements of `range` satisfying `pred`.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::quantifier::count_if;
/// # use ordo_core::range::Bounded;
/// let data = [1, 2, 3, 4, 5, 6];
/// assert_eq!(count_if(Bounded::from_slice(&data), |x: &i32| x % 3 == 0), 2);
/// ```
pub fn count_if<R, P>(mut range: R, mut pred: P) -> DistanceType<R>
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    let mut n = <DistanceType<R> as Zero>::zero();
    while !range.is_empty() {
        if pred(range.source()) {
            n = n + <DistanceType<R> as One>::one();
        }
        range.step();
    }
    n
}

/// Counts the elements of `range` not satisfying `pred`.
#[inline]
pub fn count_if_not<R, P>(range: R, mut pred: P) -> DistanceType<R>
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    count_if(range, |x: &ValueType<R>| !pred(x))
}
