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

//! # Mismatch and Adjacent Relations
//!
//! Lockstep comparison of two ranges, and scans over consecutive pairs of a
//! single range.
//!
//! Adjacent scans come in two flavors with identical results:
//!
//! - `adjacent_mismatch_by` caches the previous *value*. It works on any
//!   position, including single-pass streams, at the cost of one clone per
//!   element.
//! - `adjacent_mismatch_forward_by` caches the previous *position* and reads
//!   through it again. It needs a `ForwardPosition` but never clones values.
//!
//! The relation is always invoked as `rel(previous, current)`. Nothing checks
//! that an "equality" relation really is an equivalence.

use ordo_core::concepts::Relation;
use ordo_core::position::{ForwardPosition, Position};
use ordo_core::range::{Range, ValueType};

/// Advances both ranges while their elements compare equal.
///
/// Returns both ranges narrowed to the first divergence. Afterwards either
/// one of them is empty or their front elements differ.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::mismatch::mismatch;
/// # use ordo_core::range::Bounded;
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 9, 4];
/// let (ra, rb) = mismatch(Bounded::from_slice(&a), Bounded::from_slice(&b));
/// assert_eq!(ra.first().index(), 2);
/// assert_eq!(rb.first().index(), 2);
/// ```
#[inline]
pub fn mismatch<R0, R1>(r0: R0, r1: R1) -> (R0, R1)
where
    R0: Range,
    R1: Range,
    R1::Position: Position<Value = ValueType<R0>>,
    ValueType<R0>: PartialEq,
{
    mismatch_by(r0, r1, |a: &ValueType<R0>, b: &ValueType<R0>| a == b)
}

/// Advances both ranges while `rel` holds between their front elements.
pub fn mismatch_by<R0, R1, Rel>(mut r0: R0, mut r1: R1, mut rel: Rel) -> (R0, R1)
where
    R0: Range,
    R1: Range,
    R1::Position: Position<Value = ValueType<R0>>,
    Rel: Relation<ValueType<R0>>,
{
    while !r0.is_empty() && !r1.is_empty() && rel(r0.source(), r1.source()) {
        r0.step();
        r1.step();
    }
    (r0, r1)
}

/// Returns `range` narrowed to the first element that differs from its
/// predecessor.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::mismatch::adjacent_mismatch;
/// # use ordo_core::range::Bounded;
/// let data = [1, 1, 1, 2, 2, 3];
/// let r = adjacent_mismatch(Bounded::from_slice(&data));
/// assert_eq!(r.first().index(), 3);
/// ```
#[inline]
pub fn adjacent_mismatch<R>(range: R) -> R
where
    R: Range,
    ValueType<R>: PartialEq + Clone,
{
    adjacent_mismatch_by(range, |a: &ValueType<R>, b: &ValueType<R>| a == b)
}

/// Returns `range` narrowed to the first element `x` for which
/// `rel(previous, x)` fails, caching the previous value.
///
/// An empty range is returned unchanged, and a range whose every adjacent
/// pair satisfies `rel` is returned empty.
pub fn adjacent_mismatch_by<R, Rel>(mut range: R, mut rel: Rel) -> R
where
    R: Range,
    ValueType<R>: Clone,
    Rel: Relation<ValueType<R>>,
{
    if range.is_empty() {
        return range;
    }
    let mut previous = range.source().clone();
    range.step();
    while !range.is_empty() && rel(&previous, range.source()) {
        previous = range.source().clone();
        range.step();
    }
    range
}

/// Position-caching counterpart of `adjacent_mismatch`.
#[inline]
pub fn adjacent_mismatch_forward<R>(range: R) -> R
where
    R: Range,
    R::Position: ForwardPosition,
    ValueType<R>: PartialEq,
{
    adjacent_mismatch_forward_by(range, |a: &ValueType<R>, b: &ValueType<R>| a == b)
}

/// Position-caching counterpart of `adjacent_mismatch_by`.
///
/// Keeps a clone of the previous position instead of the previous value, so
/// it requires multi-pass positions.
pub fn adjacent_mismatch_forward_by<R, Rel>(mut range: R, mut rel: Rel) -> R
where
    R: Range,
    R::Position: ForwardPosition,
    Rel: Relation<ValueType<R>>,
{
    if range.is_empty() {
        return range;
    }
    let mut previous = range.position().clone();
    range.step();
    while !range.is_empty() && rel(previous.source(), range.source()) {
        previous = range.position().clone();
        range.step();
    }
    range
}

/// Returns `true` if `rel(x, y)` holds for every adjacent pair `x, y`.
///
/// Ranges with fewer than two elements trivially preserve any relation.
#[inline]
pub fn relation_preserving<R, Rel>(range: R, rel: Rel) -> bool
where
    R: Range,
    ValueType<R>: Clone,
    Rel: Relation<ValueType<R>>,
{
    adjacent_mismatch_by(range, rel).is_empty()
}

/// Returns `true` if `range` is strictly increasing under the strict order
/// `rel`.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::mismatch::strictly_increasing_range;
/// # use ordo_core::range::Bounded;
/// let less = |a: &i32, b: &i32| a < b;
/// assert!(strictly_increasing_range(Bounded::from_slice(&[1, 2, 5]), less));
/// assert!(!strictly_increasing_range(Bounded::from_slice(&[1, 2, 2]), less));
/// ```
#[inline]
pub fn strictly_increasing_range<R, Rel>(range: R, rel: Rel) -> bool
where
    R: Range,
    ValueType<R>: Clone,
    Rel: Relation<ValueType<R>>,
{
    relation_preserving(range, rel)
}

/// Returns `true` if `range` is non-decreasing under the strict order `rel`.
///
/// Checks that `rel(next, current)` fails for every adjacent pair, that is,
/// the complement of the converse of `rel` is preserved.
#[inline]
pub fn increasing_range<R, Rel>(range: R, mut rel: Rel) -> bool
where
    R: Range,
    ValueType<R>: Clone,
    Rel: Relation<ValueType<R>>,
{
    relation_preserving(range, |a: &ValueType<R>, b: &ValueType<R>| !rel(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::range::{Bounded, Counted};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn less(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn test_mismatch_identical_ranges_reach_both_ends() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let (ra, rb) = mismatch(Bounded::from_slice(&a), Bounded::from_slice(&b));
        assert!(ra.is_empty());
        assert!(rb.is_empty());
        assert_eq!(ra.first().index(), 3);
        assert_eq!(rb.first().index(), 3);
    }

    #[test]
    fn test_mismatch_stops_at_first_difference() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 2, 3, 0, 5];
        let (ra, rb) = mismatch(Bounded::from_slice(&a), Bounded::from_slice(&b));
        assert_eq!(ra.first().index(), 3);
        assert_eq!(rb.first().index(), 3);
        assert_ne!(ra.source(), rb.source());
    }

    #[test]
    fn test_mismatch_stops_when_shorter_range_runs_out() {
        let a = [1, 2];
        let b = [1, 2, 3, 4];
        let (ra, rb) = mismatch(Bounded::from_slice(&a), Bounded::from_slice(&b));
        assert!(ra.is_empty());
        assert_eq!(rb.first().index(), 2);
    }

    #[test]
    fn test_mismatch_by_custom_relation() {
        let a = ["Alpha", "BETA", "gamma"];
        let b = ["alpha", "beta", "delta"];
        let (ra, rb) = mismatch_by(
            Bounded::from_slice(&a),
            Bounded::from_slice(&b),
            |x: &&str, y: &&str| x.eq_ignore_ascii_case(y),
        );
        assert_eq!(ra.first().index(), 2);
        assert_eq!(rb.first().index(), 2);
    }

    #[test]
    fn test_mismatch_across_range_kinds() {
        let a = [4, 5, 6, 7];
        let (ra, rb) = mismatch(Bounded::from_slice(&a), Counted::from_stream(vec![4, 5, 0], 3));
        assert_eq!(ra.first().index(), 2);
        let (stream, remaining) = rb.into_parts();
        assert_eq!(*stream.source(), 0);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_adjacent_mismatch_finds_first_change() {
        let data = [1, 1, 1, 2, 2, 3];
        let r = adjacent_mismatch(Bounded::from_slice(&data));
        assert_eq!(r.first().index(), 3);
        assert_eq!(*r.source(), 2);
    }

    #[test]
    fn test_adjacent_mismatch_none_found() {
        let data = [4, 4, 4];
        assert!(adjacent_mismatch(Bounded::from_slice(&data)).is_empty());

        let single = [4];
        assert!(adjacent_mismatch(Bounded::from_slice(&single)).is_empty());

        let empty: [i32; 0] = [];
        assert!(adjacent_mismatch(Bounded::from_slice(&empty)).is_empty());
    }

    #[test]
    fn test_adjacent_mismatch_relation_sees_previous_then_current() {
        let data = [1, 3, 2, 5];
        let r = adjacent_mismatch_by(Bounded::from_slice(&data), less);
        // 3 < 2 fails, so the mismatch is the element 2
        assert_eq!(r.first().index(), 2);
    }

    #[test]
    fn test_adjacent_mismatch_on_single_pass_stream() {
        let r = adjacent_mismatch_by(Counted::from_stream(vec![1, 2, 3, 3, 4], 5), less);
        let (p, remaining) = r.into_parts();
        assert_eq!(p.offset(), 3);
        assert_eq!(remaining, 2);
    }

    #[test]
    fn test_value_and_position_caching_agree_on_random_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for len in 0..60 {
            let data: Vec<i32> = (0..len).map(|_| rng.random_range(0..4)).collect();
            let by_value = adjacent_mismatch_by(Bounded::from_slice(&data), less);
            let by_position = adjacent_mismatch_forward_by(Bounded::from_slice(&data), less);
            assert_eq!(by_value.first(), by_position.first());

            let eq_value = adjacent_mismatch(Bounded::from_slice(&data));
            let eq_position = adjacent_mismatch_forward(Bounded::from_slice(&data));
            assert_eq!(eq_value.first(), eq_position.first());
        }
    }

    #[test]
    fn test_forward_variant_does_not_clone_values() {
        struct Opaque(u32);
        let data = [Opaque(1), Opaque(2), Opaque(2)];
        let r = adjacent_mismatch_forward_by(Counted::from_slice(&data), |a: &Opaque, b: &Opaque| {
            a.0 < b.0
        });
        assert_eq!(r.first().index(), 2);
    }

    #[test]
    fn test_relation_preserving() {
        let increasing = [1, 2, 4, 8];
        let with_plateau = [1, 2, 2, 8];
        let with_drop = [1, 5, 3, 8];
        assert!(relation_preserving(Bounded::from_slice(&increasing), less));
        assert!(!relation_preserving(Bounded::from_slice(&with_plateau), less));
        assert!(!relation_preserving(Bounded::from_slice(&with_drop), less));
    }

    #[test]
    fn test_strictly_increasing_and_increasing_range() {
        let strict = [1, 2, 3];
        let plateau = [1, 2, 2, 3];
        let unsorted = [3, 1, 2];
        let empty: [i32; 0] = [];
        let single = [7];

        assert!(strictly_increasing_range(Bounded::from_slice(&strict), less));
        assert!(!strictly_increasing_range(Bounded::from_slice(&plateau), less));
        assert!(increasing_range(Bounded::from_slice(&plateau), less));
        assert!(increasing_range(Bounded::from_slice(&strict), less));
        assert!(!increasing_range(Bounded::from_slice(&unsorted), less));
        assert!(increasing_range(Bounded::from_slice(&empty), less));
        assert!(strictly_increasing_range(Bounded::from_slice(&single), less));
    }
}
