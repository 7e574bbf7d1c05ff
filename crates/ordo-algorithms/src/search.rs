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

//! # Linear Search
//!
//! Left-to-right scans that stop at the first element matching a value or a
//! predicate. Every search returns the range narrowed to start at the match:
//! for a bounded range the match is `first()` and "not found" means the
//! returned range is empty (its front equals `last`); for a counted range
//! `into_parts()` yields the match together with the number of elements that
//! remain from it.
//!
//! The `_n` variants take a position and a count directly and return that
//! `(position, remaining)` pair.

use ordo_core::concepts::Predicate;
use ordo_core::position::Position;
use ordo_core::range::{Counted, Range, ValueType};

/// Returns `range` narrowed to its first element equal to `value`.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::search::find;
/// # use ordo_core::range::Bounded;
/// let data = [1, 2, 3, 4, 5];
/// let hit = find(Bounded::from_slice(&data), &3);
/// assert_eq!(hit.first().index(), 2);
///
/// let miss = find(Bounded::from_slice(&data), &9);
/// assert!(miss.is_empty());
/// ```
#[inline]
pub fn find<R>(range: R, value: &ValueType<R>) -> R
where
    R: Range,
    ValueType<R>: PartialEq,
{
    find_if(range, |x: &ValueType<R>| x == value)
}

/// Returns `range` narrowed to its first element satisfying `pred`.
#[inline]
pub fn find_if<R, P>(mut range: R, mut pred: P) -> R
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    while !range.is_empty() && !pred(range.source()) {
        range.step();
    }
    range
}

/// Returns `range` narrowed to its first element not satisfying `pred`.
#[inline]
pub fn find_if_not<R, P>(mut range: R, mut pred: P) -> R
where
    R: Range,
    P: Predicate<ValueType<R>>,
{
    while !range.is_empty() && pred(range.source()) {
        range.step();
    }
    range
}

/// Searches the `n` elements from `first` for `value`.
///
/// Returns the matching position and the count remaining from it, or the
/// position after the last element and zero if there is no match.
#[inline]
pub fn find_n<P>(first: P, n: P::Distance, value: &P::Value) -> (P, P::Distance)
where
    P: Position,
    P::Value: PartialEq,
{
    find(Counted::new(first, n), value).into_parts()
}

/// Searches the `n` elements from `first` for one satisfying `pred`.
#[inline]
pub fn find_if_n<P, Pred>(first: P, n: P::Distance, pred: Pred) -> (P, P::Distance)
where
    P: Position,
    Pred: Predicate<P::Value>,
{
    find_if(Counted::new(first, n), pred).into_parts()
}

/// Searches the `n` elements from `first` for one not satisfying `pred`.
#[inline]
pub fn find_if_not_n<P, Pred>(first: P, n: P::Distance, pred: Pred) -> (P, P::Distance)
where
    P: Position,
    Pred: Predicate<P::Value>,
{
    find_if_not(Counted::new(first, n), pred).into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::instrument::CallCounter;
    use ordo_core::position::{SlicePosition, StreamPosition};
    use ordo_core::range::Bounded;

    #[test]
    fn test_find_returns_first_match() {
        let data = [1, 2, 3, 4, 5];
        let r = find(Bounded::from_slice(&data), &3);
        assert_eq!(r.first().index(), 2);
        assert_eq!(*r.source(), 3);
    }

    #[test]
    fn test_find_prefers_earliest_of_duplicates() {
        let data = [7, 3, 3, 3];
        assert_eq!(find(Bounded::from_slice(&data), &3).first().index(), 1);
    }

    #[test]
    fn test_find_absent_returns_last() {
        let data = [1, 2, 3];
        let r = find(Bounded::from_slice(&data), &42);
        assert!(r.is_empty());
        assert_eq!(r.first(), r.last());
    }

    #[test]
    fn test_find_on_empty_range_returns_last() {
        let data: [i32; 0] = [];
        let r = find(Bounded::from_slice(&data), &1);
        assert!(r.is_empty());
        assert_eq!(r.first().index(), 0);
    }

    #[test]
    fn test_find_if_on_empty_range_returns_last() {
        let data = [1, 2, 3];
        let counter = CallCounter::new();
        let empty = Bounded::new(SlicePosition::at(&data, 2), SlicePosition::at(&data, 2));
        let r = find_if(empty, counter.predicate(|_: &i32| true));
        assert!(r.is_empty());
        assert_eq!(r.first().index(), 2);
        assert_eq!(counter.calls(), 0);

        let (p, rest) = find_if_n(SlicePosition::begin(&data), 0, |_: &i32| true);
        assert_eq!((p.index(), rest), (0, 0));
    }

    #[test]
    fn test_find_if_and_find_if_not() {
        let data = [2, 4, 5, 6, 7];
        let odd = find_if(Bounded::from_slice(&data), |x: &i32| x % 2 == 1);
        assert_eq!(odd.first().index(), 2);

        let not_even = find_if_not(Bounded::from_slice(&data), |x: &i32| x % 2 == 0);
        assert_eq!(not_even.first(), odd.first());
    }

    #[test]
    fn test_find_if_short_circuits() {
        let data = [1, 2, 3, 4, 5, 6];
        let counter = CallCounter::new();
        let r = find_if(
            Bounded::from_slice(&data),
            counter.predicate(|x: &i32| *x == 3),
        );
        assert_eq!(r.first().index(), 2);
        assert_eq!(counter.calls(), 3);
    }

    #[test]
    fn test_find_if_not_after_find_if_is_identity() {
        let data = [1, 3, 4, 4, 5];
        let even = |x: &i32| x % 2 == 0;
        let hit = find_if(Bounded::from_slice(&data), even);
        assert!(!hit.is_empty());
        let again = find_if_not(hit, |x: &i32| !even(x));
        assert_eq!(again.first(), hit.first());
    }

    #[test]
    fn test_find_on_counted_range_reports_remaining() {
        let data = [9, 8, 7, 6, 5];
        let r = find(Counted::from_slice(&data), &7);
        let (position, remaining) = r.into_parts();
        assert_eq!(position.index(), 2);
        assert_eq!(remaining, 3);
    }

    #[test]
    fn test_find_n_variants() {
        let data = [1, 2, 3, 4, 5, 6];
        let first = SlicePosition::begin(&data);

        let (p, rest) = find_n(first, 4, &4);
        assert_eq!((p.index(), rest), (3, 1));

        // the match at index 4 lies outside the first four elements
        let (p, rest) = find_n(first, 4, &5);
        assert_eq!((p.index(), rest), (4, 0));

        let (p, rest) = find_if_n(first, 6, |x: &i32| *x > 4);
        assert_eq!((p.index(), rest), (4, 2));

        let (p, rest) = find_if_not_n(first, 6, |x: &i32| *x < 3);
        assert_eq!((p.index(), rest), (2, 4));
    }

    #[test]
    fn test_find_on_single_pass_stream() {
        let words = "alpha beta gamma delta".split(' ');
        let (p, rest) = find_if_n(StreamPosition::new(words), 4, |w: &&str| w.starts_with('g'));
        assert_eq!(*p.source(), "gamma");
        assert_eq!(p.offset(), 2);
        assert_eq!(rest, 2);
    }
}
