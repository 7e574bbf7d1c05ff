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

//! # Capability Constraints
//!
//! Compile-time gates over callables. Every algorithm in the ordo ecosystem
//! bounds its callable parameters by one of these traits rather than by a raw
//! closure signature, so an argument of the wrong shape is rejected at build
//! time with a diagnostic that names the missing capability.
//!
//! ## Traits
//!
//! - `Transformation<D, M>`: an endomorphism `D -> D`, taking its argument
//!   by value (`M = ByValue`) or by shared reference (`M = ByRef`).
//! - `Predicate<D>`: a test `&D -> bool`.
//! - `Relation<D>`: a binary test `(&D, &D) -> bool`, typically an equality or
//!   an ordering. Symmetry, transitivity, and strict weak ordering are never
//!   checked; algorithms that need them document it as a caller obligation.
//! - `BinaryOperation<D>`: a combining operation `(D, D) -> D`.
//! - `Projection<D, C>`: a view `&D -> C` applied before combining.
//! - `CallableWith<Args>`: anything invocable with the argument tuple `Args`,
//!   with an unconstrained return type.
//!
//! All traits are implemented automatically for every closure, function item,
//! and function pointer with the matching signature. `Transformation` is
//! invoked through `apply`; the others are plain `FnMut` bounds and are called
//! directly. None of them add runtime cost.
//!
//! ## Usage
//!
//! ```rust
//! use ordo_core::concepts::{Predicate, Transformation};
//!
//! fn apply_twice<M, F: Transformation<i32, M>>(mut f: F, x: i32) -> i32 {
//!     let y = f.apply(x);
//!     f.apply(y)
//! }
//!
//! fn holds<P: Predicate<i32>>(mut p: P, x: &i32) -> bool {
//!     p(x)
//! }
//!
//! assert_eq!(apply_twice(|x: i32| x * 3, 2), 18);
//! assert_eq!(apply_twice(|x: &i32| x + 1, 2), 4);
//! assert!(holds(|x: &i32| *x > 0, &5));
//! ```

/// Marks a [`Transformation`] that consumes its argument, `FnMut(D) -> D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByValue;

/// Marks a [`Transformation`] that borrows its argument, `FnMut(&D) -> D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByRef;

/// An operation mapping a value of domain `D` to another value of `D`.
///
/// The marker `M` records how the callable receives its argument and is
/// inferred at the call site; generic code carries it as an extra type
/// parameter and invokes the callable through [`Transformation::apply`].
///
/// # Examples
///
/// ```rust
/// # use ordo_core::concepts::Transformation;
/// fn successor<M, F: Transformation<u8, M>>(mut f: F) -> u8 {
///     f.apply(1)
/// }
///
/// assert_eq!(successor(|x: u8| x + 1), 2);
/// assert_eq!(successor(|x: &u8| x + 1), 2);
/// ```
pub trait Transformation<D, M = ByValue> {
    /// Maps `x` to its image.
    fn apply(&mut self, x: D) -> D;
}

impl<D, F> Transformation<D, ByValue> for F
where
    F: FnMut(D) -> D,
{
    #[inline(always)]
    fn apply(&mut self, x: D) -> D {
        (self)(x)
    }
}

impl<D, F> Transformation<D, ByRef> for F
where
    F: FnMut(&D) -> D,
{
    #[inline(always)]
    fn apply(&mut self, x: D) -> D {
        (self)(&x)
    }
}

/// An operation mapping a borrowed value of domain `D` to a boolean.
pub trait Predicate<D: ?Sized>: FnMut(&D) -> bool {}

impl<D: ?Sized, F> Predicate<D> for F where F: FnMut(&D) -> bool {}

/// A binary operation mapping two borrowed values of domain `D` to a boolean.
///
/// Nothing about the mathematical properties of the relation is enforced;
/// bound and partition queries require a strict weak order and produce
/// unspecified (but memory safe) results otherwise.
pub trait Relation<D: ?Sized>: FnMut(&D, &D) -> bool {}

impl<D: ?Sized, F> Relation<D> for F where F: FnMut(&D, &D) -> bool {}

/// A binary operation combining two values of domain `D` into a third.
///
/// Reductions only require the operation to be partially associative over
/// the values they encounter, since they always apply it strictly left to
/// right.
pub trait BinaryOperation<D>: FnMut(D, D) -> D {}

impl<D, F> BinaryOperation<D> for F where F: FnMut(D, D) -> D {}

/// A view of a borrowed `D` as a `C`.
pub trait Projection<D: ?Sized, C>: FnMut(&D) -> C {}

impl<D: ?Sized, C, F> Projection<D, C> for F where F: FnMut(&D) -> C {}

/// A callable that can be invoked with the argument tuple `Args`.
///
/// The return type is left unconstrained and exposed as `Output`. Traversal
/// algorithms use this for per-element side effects, discarding the result
/// but handing the callable back to the caller afterwards.
///
/// # Examples
///
/// ```rust
/// # use ordo_core::concepts::CallableWith;
/// let mut total = 0;
/// let mut add = |a: i32, b: i32| total += a + b;
/// add.call_with((2, 3));
/// add.call_with((4, 1));
/// assert_eq!(total, 10);
/// ```
pub trait CallableWith<Args> {
    /// The value produced by an invocation.
    type Output;

    /// Invokes the callable with the unpacked argument tuple.
    fn call_with(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_callable_with {
    ($($arg:ident => $val:ident),*) => {
        impl<Func, Ret, $($arg),*> CallableWith<($($arg,)*)> for Func
        where
            Func: FnMut($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[inline(always)]
            fn call_with(&mut self, ($($val,)*): ($($arg,)*)) -> Ret {
                (self)($($val),*)
            }
        }
    };
}

impl_callable_with!();
impl_callable_with!(A => a);
impl_callable_with!(A => a, B => b);
impl_callable_with!(A => a, B => b, C => c);
