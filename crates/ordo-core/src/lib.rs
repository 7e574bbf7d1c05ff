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

//! # Ordo Core
//!
//! Foundational abstractions for the ordo generic algorithms. This crate
//! defines what an algorithm may ask of its arguments: the shape of the
//! callables it invokes, and the capabilities of the positions and ranges it
//! walks. The algorithms themselves live in `ordo-algorithms`.
//!
//! ## Modules
//!
//! - `concepts`: Capability traits over callables (`Transformation`,
//!   `Predicate`, `Relation`, `BinaryOperation`, `Projection`,
//!   `CallableWith`) with blanket implementations for closures and functions,
//!   so ill-shaped arguments are rejected at compile time.
//! - `position`: Cursor traits layered by capability (`Position`,
//!   `ForwardPosition`, `RandomAccessPosition`) and the concrete
//!   `SlicePosition` and single-pass `StreamPosition`.
//! - `range`: The `Range` trait and its two implementations, `Bounded`
//!   (first/last) and `Counted` (first/count), plus checked slice
//!   constructors reporting `RangeError`.
//! - `instrument`: `CallCounter`, which wraps callables to count invocations.
//!
//! ## Preconditions
//!
//! Range validity, partitioning, and ordering requirements are caller
//! obligations. They are documented per item and, where cheap enough to be
//! worth it during development, checked with `debug_assert!` only.

pub mod concepts;
pub mod instrument;
pub mod position;
pub mod range;
