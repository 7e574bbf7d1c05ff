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

//! # Order Selection
//!
//! Stable selection of the k-th smallest of a handful of values under a
//! strict weak order `r`, using the minimum number of comparisons. "Stable"
//! means that among equivalent values the one passed earlier is treated as
//! the smaller, exactly as a stable sort would order them.

use ordo_core::concepts::Relation;

/// Returns the smaller of `a` and `b`, preferring `a` when they are
/// equivalent.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::selection::select_0_2;
/// let less = |x: &(i32, char), y: &(i32, char)| x.0 < y.0;
/// assert_eq!(select_0_2(&(1, 'a'), &(1, 'b'), less), &(1, 'a'));
/// assert_eq!(select_0_2(&(2, 'a'), &(1, 'b'), less), &(1, 'b'));
/// ```
#[inline]
pub fn select_0_2<'a, D, R>(a: &'a D, b: &'a D, mut r: R) -> &'a D
where
    R: Relation<D>,
{
    min_of_two(a, b, &mut r)
}

/// Returns the larger of `a` and `b`, preferring `b` when they are
/// equivalent.
#[inline]
pub fn select_1_2<'a, D, R>(a: &'a D, b: &'a D, mut r: R) -> &'a D
where
    R: Relation<D>,
{
    max_of_two(a, b, &mut r)
}

/// Returns the third smallest of four values (index 2 of their stable sort).
///
/// Always uses exactly four comparisons.
///
/// # Examples
///
/// ```rust
/// # use ordo_algorithms::selection::select_2_4;
/// let less = |x: &i32, y: &i32| x < y;
/// assert_eq!(*select_2_4(&4, &1, &3, &2, less), 3);
/// ```
pub fn select_2_4<'a, D, R>(a: &'a D, b: &'a D, c: &'a D, d: &'a D, mut r: R) -> &'a D
where
    R: Relation<D>,
{
    if r(b, a) {
        select_2_4_ab(b, a, c, d, &mut r)
    } else {
        select_2_4_ab(a, b, c, d, &mut r)
    }
}

#[inline(always)]
fn min_of_two<'a, D, R>(a: &'a D, b: &'a D, r: &mut R) -> &'a D
where
    R: Relation<D>,
{
    if r(b, a) { b } else { a }
}

#[inline(always)]
fn max_of_two<'a, D, R>(a: &'a D, b: &'a D, r: &mut R) -> &'a D
where
    R: Relation<D>,
{
    if r(b, a) { a } else { b }
}

// Requires a <= b.
#[inline(always)]
fn select_2_4_ab<'a, D, R>(a: &'a D, b: &'a D, c: &'a D, d: &'a D, r: &mut R) -> &'a D
where
    R: Relation<D>,
{
    if r(d, c) {
        select_2_4_ab_cd(a, b, d, c, r)
    } else {
        select_2_4_ab_cd(a, b, c, d, r)
    }
}

// Requires a <= b and c <= d.
#[inline(always)]
fn select_2_4_ab_cd<'a, D, R>(a: &'a D, b: &'a D, c: &'a D, d: &'a D, r: &mut R) -> &'a D
where
    R: Relation<D>,
{
    if r(d, b) {
        max_of_two(a, d, r)
    } else {
        max_of_two(b, c, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tagged = (i32, usize);

    fn by_key(x: &Tagged, y: &Tagged) -> bool {
        x.0 < y.0
    }

    #[test]
    fn test_select_0_2_and_1_2_are_stable() {
        let a = (5, 0);
        let b = (5, 1);
        assert_eq!(select_0_2(&a, &b, by_key), &a);
        assert_eq!(select_1_2(&a, &b, by_key), &b);
    }

    #[test]
    fn test_select_0_2_and_1_2_order() {
        let lo = (1, 0);
        let hi = (2, 1);
        assert_eq!(select_0_2(&hi, &lo, by_key), &lo);
        assert_eq!(select_1_2(&hi, &lo, by_key), &hi);
    }

    #[test]
    fn test_select_2_4_matches_stable_sort_for_all_permutations() {
        // keys with duplicates so stability is exercised
        let keys = [3, 1, 3, 2];
        let mut perms = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    for l in 0..4 {
                        let idx = [i, j, k, l];
                        let mut seen = [false; 4];
                        idx.iter().for_each(|&n| seen[n] = true);
                        if seen.iter().all(|&s| s) {
                            perms.push(idx);
                        }
                    }
                }
            }
        }
        assert_eq!(perms.len(), 24);

        for idx in perms {
            let values: Vec<Tagged> = idx
                .iter()
                .enumerate()
                .map(|(position, &n)| (keys[n], position))
                .collect();

            let mut sorted = values.clone();
            sorted.sort_by_key(|v| v.0);

            let picked = select_2_4(&values[0], &values[1], &values[2], &values[3], by_key);
            assert_eq!(picked, &sorted[2], "permutation {:?}", idx);
        }
    }

    #[test]
    fn test_select_2_4_uses_four_comparisons() {
        let mut comparisons = 0;
        let picked = select_2_4(&9, &7, &8, &6, |x: &i32, y: &i32| {
            comparisons += 1;
            x < y
        });
        assert_eq!(*picked, 8);
        assert_eq!(comparisons, 4);
    }
}
