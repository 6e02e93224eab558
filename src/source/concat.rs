//! Concatenation of two streams.

use super::Source;
use crate::stream::StreamIter;

/// Draws from `first` until it is exhausted, then from `second`.
///
/// Created by [`Stream::concat`](crate::Stream::concat).
#[derive(Debug)]
pub struct Concat<'a, T> {
    first: StreamIter<'a, T>,
    second: StreamIter<'a, T>,
}

impl<'a, T: 'a> Concat<'a, T> {
    /// Chain two stream iterators.
    pub fn new(first: StreamIter<'a, T>, second: StreamIter<'a, T>) -> Self {
        Self { first, second }
    }
}

impl<'a, T: 'a> Source for Concat<'a, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.first.has_next() || self.second.has_next()
    }

    fn get(&mut self) -> Option<T> {
        self.first.next().or_else(|| self.second.next())
    }
}
