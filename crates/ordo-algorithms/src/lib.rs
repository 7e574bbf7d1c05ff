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

//! # Ordo Algorithms
//!
//! Generic algorithm building blocks over `ordo-core` ranges: traversal,
//! search, counting, reduction, mismatch, and partition/bound queries. Every
//! algorithm consumes its range once, left to right (or by binary search for
//! the partition family), invoking caller-supplied callables that are
//! constrained by the capability traits of `ordo_core::concepts`.
//!
//! ## Modules
//!
//! - `traversal`: `for_each`, `for_each_n`.
//! - `search`: `find`, `find_if`, `find_if_not` and their `_n` forms.
//! - `quantifier`: `all_of`, `none_of`, `any_of`, `count`, `count_if`,
//!   `count_if_not`.
//! - `reduce`: left folds with an optional projection.
//! - `mismatch`: lockstep `mismatch`, `adjacent_mismatch` in value-caching and
//!   position-caching forms, `relation_preserving`, and the increasing-range
//!   checks built on it.
//! - `partition`: `is_partitioned`, `partition_point`, `lower_bound`,
//!   `upper_bound`, `equal_range`.
//! - `transform`: `power_unary` and `orbit_distance`.
//! - `selection`: stable order selection among two or four values.
//!
//! ## Conventions
//!
//! Algorithms that locate an element return the input range narrowed to that
//! element. The plain form of an algorithm uses the natural default (`==` or
//! `<`); the `_by` form takes the relation explicitly.
//!
//! None of the algorithms report errors. Precondition violations (invalid
//! ranges, unsorted input to bound queries, relations without the required
//! properties) are caller obligations; they never cause memory unsafety but
//! may yield unspecified positions or panics.
//!
//! ## Usage
//!
//! ```rust
//! use ordo_algorithms::{partition::lower_bound, quantifier::count, search::find};
//! use ordo_core::range::Bounded;
//!
//! let data = [1, 1, 2, 2, 2, 3];
//! let range = Bounded::from_slice(&data);
//! assert_eq!(find(range, &2).first().index(), 2);
//! assert_eq!(count(range, &2), 3);
//! assert_eq!(lower_bound(range, &3).index(), 5);
//! ```

pub mod mismatch;
pub mod partition;
pub mod quantifier;
pub mod reduce;
pub mod search;
pub mod selection;
pub mod transform;
pub mod traversal;
