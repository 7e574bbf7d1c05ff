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

//! # Call Instrumentation
//!
//! `CallCounter` counts how often the callables handed to an algorithm are
//! invoked. Wrapping a predicate or relation leaves its results untouched, so
//! the wrapped callable can be passed to any algorithm in place of the
//! original. This makes algorithmic behavior observable: how early a search
//! short-circuits, or how many comparisons a bound query needs.
//!
//! The counter uses interior mutability, so several wrappers can share one
//! counter while the algorithm holds them mutably.
//!
//! ## Usage
//!
//! ```rust
//! use ordo_core::instrument::CallCounter;
//!
//! let counter = CallCounter::new();
//! let mut positive = counter.predicate(|x: &i32| *x > 0);
//! assert!(positive(&3));
//! assert!(!positive(&-3));
//! assert_eq!(counter.calls(), 2);
//! ```

use crate::concepts::{Predicate, Relation, Transformation};
use std::cell::Cell;

/// A shared tally of callable invocations.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<u64>,
}

impl CallCounter {
    /// Creates a counter starting at zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    /// Returns the number of invocations recorded so far.
    #[inline]
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    /// Resets the tally to zero.
    #[inline]
    pub fn reset(&self) {
        self.calls.set(0);
    }

    #[inline(always)]
    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Wraps a predicate so that every invocation is counted.
    pub fn predicate<'a, D, P>(&'a self, mut pred: P) -> impl FnMut(&D) -> bool + 'a
    where
        D: ?Sized + 'a,
        P: Predicate<D> + 'a,
    {
        move |x: &D| {
            self.record();
            pred(x)
        }
    }

    /// Wraps a relation so that every invocation is counted.
    pub fn relation<'a, D, R>(&'a self, mut rel: R) -> impl FnMut(&D, &D) -> bool + 'a
    where
        D: ?Sized + 'a,
        R: Relation<D> + 'a,
    {
        move |a: &D, b: &D| {
            self.record();
            rel(a, b)
        }
    }

    /// Wraps a transformation so that every invocation is counted.
    ///
    /// The wrapper always takes its argument by value, whichever way `f`
    /// receives it.
    pub fn transformation<'a, D, M, F>(&'a self, mut f: F) -> impl FnMut(D) -> D + 'a
    where
        D: 'a,
        M: 'a,
        F: Transformation<D, M> + 'a,
    {
        move |x: D| {
            self.record();
            f.apply(x)
        }
    }
}

impl std::fmt::Display for CallCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallCounter(calls: {})", self.calls())
    }
}

#[cfg(test)]
mod tests {
    use super::CallCounter;

    #[test]
    fn test_new_counter_is_zero() {
        let counter = CallCounter::new();
        assert_eq!(counter.calls(), 0);
        assert_eq!(CallCounter::default().calls(), 0);
    }

    #[test]
    fn test_predicate_wrapper_counts_and_forwards() {
        let counter = CallCounter::new();
        let mut even = counter.predicate(|x: &u32| x % 2 == 0);
        assert!(even(&2));
        assert!(!even(&3));
        assert!(even(&4));
        assert_eq!(counter.calls(), 3);
    }

    #[test]
    fn test_relation_wrapper_counts_and_forwards() {
        let counter = CallCounter::new();
        let mut less = counter.relation(|a: &str, b: &str| a < b);
        assert!(less("a", "b"));
        assert!(!less("b", "a"));
        assert_eq!(counter.calls(), 2);
    }

    #[test]
    fn test_transformation_wrapper_counts_and_forwards() {
        let counter = CallCounter::new();
        let mut double = counter.transformation(|x: i32| x * 2);
        let once = double(1);
        assert_eq!(double(once), 4);
        assert_eq!(counter.calls(), 2);
    }

    #[test]
    fn test_transformation_wrapper_accepts_by_reference_callable() {
        let counter = CallCounter::new();
        let mut shout = counter.transformation(|s: &String| s.to_uppercase());
        assert_eq!(shout(String::from("abc")), "ABC");
        assert_eq!(counter.calls(), 1);
    }

    #[test]
    fn test_shared_counter_across_wrappers() {
        let counter = CallCounter::new();
        let mut p = counter.predicate(|x: &i32| *x > 0);
        let mut r = counter.relation(|a: &i32, b: &i32| a == b);
        p(&1);
        r(&1, &1);
        p(&2);
        assert_eq!(counter.calls(), 3);
    }

    #[test]
    fn test_reset() {
        let counter = CallCounter::new();
        let mut p = counter.predicate(|_: &i32| true);
        p(&0);
        p(&0);
        counter.reset();
        assert_eq!(counter.calls(), 0);
    }

    #[test]
    fn test_display() {
        let counter = CallCounter::new();
        let mut p = counter.predicate(|_: &i32| false);
        p(&1);
        assert_eq!(format!("{}", counter), "CallCounter(calls: 1)");
    }
}
