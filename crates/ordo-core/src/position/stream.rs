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

//! # Stream Positions
//!
//! `StreamPosition<I>` adapts any `Iterator` into a single-pass position. The
//! current item is pulled eagerly and cached so it can be borrowed through
//! `source`; stepping replaces it with the next item.
//!
//! Stream positions are deliberately neither `Clone` nor `PartialEq`: once a
//! stream has been stepped, earlier items are gone, so they only satisfy the
//! plain `Position` capability. They pair with counted ranges, where the end
//! is expressed as a number of steps rather than as another position.
//!
//! ## Usage
//!
//! ```rust
//! use ordo_core::position::{Position, StreamPosition};
//!
//! let mut p = StreamPosition::new("a b c".split(' '));
//! assert_eq!(*p.source(), "a");
//! p.step();
//! assert_eq!(*p.source(), "b");
//! assert_eq!(p.offset(), 1);
//! ```

use crate::position::Position;

/// A single-pass position over an iterator.
#[derive(Debug)]
pub struct StreamPosition<I>
where
    I: Iterator,
{
    inner: I,
    current: Option<I::Item>,
    offset: usize,
}

impl<I> StreamPosition<I>
where
    I: Iterator,
{
    /// Creates a position at the first item of `iter`.
    #[inline]
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        let mut inner = iter.into_iter();
        let current = inner.next();
        Self {
            inner,
            current,
            offset: 0,
        }
    }

    /// Returns the number of steps taken since the position was created.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the underlying iterator has been exhausted.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Consumes the position and returns the current item, if any.
    #[inline]
    pub fn into_current(self) -> Option<I::Item> {
        self.current
    }
}

impl<I> Position for StreamPosition<I>
where
    I: Iterator,
{
    type Value = I::Item;
    type Distance = usize;

    #[inline]
    fn source(&self) -> &I::Item {
        match &self.current {
            Some(item) => item,
            None => panic!("called `source` on an exhausted stream position"),
        }
    }

    #[inline]
    fn step(&mut self) {
        self.current = self.inner.next();
        self.offset += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_walks_iterator_in_order() {
        let mut p = StreamPosition::new(vec![3, 1, 4]);
        assert_eq!(*p.source(), 3);
        p.step();
        assert_eq!(*p.source(), 1);
        p.step();
        assert_eq!(*p.source(), 4);
        p.step();
        assert!(p.is_exhausted());
        assert_eq!(p.offset(), 3);
    }

    #[test]
    fn test_stream_over_empty_iterator_is_exhausted() {
        let p = StreamPosition::new(std::iter::empty::<u8>());
        assert!(p.is_exhausted());
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_stream_pulls_lazily_one_item_ahead() {
        let mut pulled = 0;
        let source = (0..10).inspect(|_| pulled += 1);
        let mut p = StreamPosition::new(source);
        p.step();
        p.step();
        let current = p.into_current();
        assert_eq!(current, Some(2));
        assert_eq!(pulled, 3);
    }

    #[test]
    #[should_panic(expected = "exhausted stream position")]
    fn test_source_on_exhausted_stream_panics() {
        let p = StreamPosition::new(Vec::<i32>::new());
        let _ = p.source();
    }
}
