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

//! # Transformations
//!
//! Algorithms on a single value driven by a transformation `f: D -> D`:
//! repeated application and the length of the path between two points of an
//! orbit. The transformation may take its argument by value or by reference;
//! see `ordo_core::concepts::Transformation`.

use num_traits::PrimInt;
use ordo_core::concepts::Transformation;

/// Applies `f` to `x` exactly `n` times.
///
/// # Panics
///
/// In debug builds, panics if `n` is negative.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::transform::power_unary;
/// assert_eq!(power_unary(1, 5u32, |x: i32| x * 2), 32);
/// assert_eq!(power_unary(7, 0u32, |x: i32| x * 2), 7);
/// assert_eq!(power_unary(vec![1], 2u8, |v: &Vec<i32>| [&v[..], &v[..]].concat()), [1; 4]);
/// ```
pub fn power_unary<D, N, F, M>(mut x: D, mut n: N, mut f: F) -> D
where
    N: PrimInt,
    F: Transformation<D, M>,
{
    debug_assert!(
        n >= N::zero(),
        "called `power_unary` with a negative exponent"
    );
    while n != N::zero() {
        n = n - N::one();
        x = f.apply(x);
    }
    x
}

/// Returns the number of applications of `f` needed to get from `x` to `y`.
///
/// `y` must be reachable from `x` under `f`; otherwise the function does not
/// terminate.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::transform::orbit_distance;
/// let steps: u32 = orbit_distance(3, 24, |x: i32| x * 2);
/// assert_eq!(steps, 3);
/// ```
pub fn orbit_distance<D, N, F, M>(mut x: D, y: D, mut f: F) -> N
where
    D: PartialEq,
    N: PrimInt,
    F: Transformation<D, M>,
{
    let mut n = N::zero();
    while x != y {
        x = f.apply(x);
        n = n + N::one();
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::instrument::CallCounter;

    fn increment(x: i32) -> i32 {
        x + 1
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Digits(Vec<u8>);

    fn append_digit(d: &Digits) -> Digits {
        let mut next = d.0.clone();
        next.push(next.len() as u8);
        Digits(next)
    }

    #[test]
    fn test_power_unary_applies_n_times() {
        assert_eq!(power_unary(0, 10u8, increment), 10);
        assert_eq!(power_unary(0, 10i64, increment), 10);
    }

    #[test]
    fn test_power_unary_zero_is_identity() {
        let counter = CallCounter::new();
        let append = counter.transformation(|s: String| s + "x");
        let result = power_unary(String::from("x"), 0usize, append);
        assert_eq!(result, "x");
        assert_eq!(counter.calls(), 0);
    }

    #[test]
    fn test_power_unary_counts_applications() {
        let counter = CallCounter::new();
        let result = power_unary(1u64, 4u32, counter.transformation(|x: u64| x * 3));
        assert_eq!(result, 81);
        assert_eq!(counter.calls(), 4);
    }

    #[test]
    fn test_power_unary_with_by_reference_transformation() {
        let result = power_unary(Digits(Vec::new()), 3u32, append_digit);
        assert_eq!(result, Digits(vec![0, 1, 2]));

        let counter = CallCounter::new();
        let result = power_unary(Digits(vec![7]), 2u8, counter.transformation(append_digit));
        assert_eq!(result, Digits(vec![7, 1, 2]));
        assert_eq!(counter.calls(), 2);
    }

    #[test]
    fn test_orbit_distance_with_by_reference_transformation() {
        let start = Digits(Vec::new());
        let target = power_unary(start.clone(), 5u32, append_digit);
        assert_eq!(orbit_distance::<_, u32, _, _>(start, target, append_digit), 5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative exponent")]
    fn test_power_unary_rejects_negative_exponent_in_debug() {
        power_unary(0, -1i32, increment);
    }

    #[test]
    fn test_orbit_distance_inverts_power_unary() {
        let x = 5;
        for n in 0u32..20 {
            let y = power_unary(x, n, increment);
            assert_eq!(orbit_distance::<_, u32, _, _>(x, y, increment), n);
        }
    }

    #[test]
    fn test_orbit_distance_in_cyclic_orbit() {
        let next = |x: u8| (x + 1) % 7;
        assert_eq!(orbit_distance::<_, usize, _, _>(5, 2, next), 4);
        assert_eq!(orbit_distance::<_, usize, _, _>(3, 3, next), 0);
    }
}
