//! Ways to start a stream.

use std::collections::VecDeque;

use super::Stream;
use crate::pipeline::ProcessorPipeline;
use crate::source::{
    ArraySource, Concat, Generate, IterSource, Iterate, RangeSource, RangeStep, Source,
};

impl<'a, T: 'a> Stream<'a, T> {
    /// Start a stream at any [`Source`].
    pub fn from_source<S>(source: S) -> Self
    where
        S: Source<Item = T> + 'a,
    {
        Stream::from_pipeline(ProcessorPipeline::new(source))
    }

    /// A finite stream over a copy of `items`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// assert_eq!(Stream::of([1, 2, 3]).count(), 3);
    /// ```
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: VecDeque<T> = items.into_iter().collect();
        Stream::from_source(ArraySource::new(items))
    }

    /// A stream pulling lazily from an iterator.
    ///
    /// The iterator is advanced only on demand, so infinite iterators work.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// let evens = Stream::from_iterator((0..).step_by(2)).limit(3).to_vec();
    /// assert_eq!(evens, vec![0, 2, 4]);
    /// ```
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Stream::from_source(IterSource::new(iter.into_iter()))
    }

    /// A stream with no elements.
    pub fn empty() -> Self {
        Stream::from_source(ArraySource::new(VecDeque::new()))
    }

    /// An infinite stream calling `generator` once per pulled element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// let mut calls = 0;
    /// let ones = Stream::generate(|| {
    ///     calls += 1;
    ///     1
    /// })
    /// .limit(3)
    /// .to_vec();
    /// assert_eq!(ones, vec![1, 1, 1]);
    /// assert_eq!(calls, 3);
    /// ```
    pub fn generate<F>(generator: F) -> Self
    where
        F: FnMut() -> T + 'a,
    {
        Stream::from_source(Generate::new(generator))
    }

    /// An infinite stream `seed, step(seed), step(step(seed)), ...`.
    pub fn iterate<F>(seed: T, step: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> T + 'a,
    {
        Stream::from_source(Iterate::new(seed, step))
    }

    /// Concatenate two streams: all of `first`, then all of `second`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// let joined = Stream::concat(Stream::of([1, 2]), Stream::of([3, 4])).to_vec();
    /// assert_eq!(joined, vec![1, 2, 3, 4]);
    /// ```
    pub fn concat(first: Stream<'a, T>, second: Stream<'a, T>) -> Self {
        Stream::from_source(Concat::new(first.into_iter(), second.into_iter()))
    }
}

impl<'a, T: RangeStep + 'a> Stream<'a, T> {
    /// Numbers from `start` (inclusive) to `end` (exclusive) by unit steps.
    ///
    /// Counts down when `start > end`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// assert_eq!(Stream::range(5, 0).to_vec(), vec![5, 4, 3, 2, 1]);
    /// assert!(Stream::range(0, 0).to_vec().is_empty());
    /// ```
    pub fn range(start: T, end: T) -> Self {
        Stream::from_source(RangeSource::new(start, end))
    }

    /// Numbers from `start` to `end` by `step`.
    ///
    /// Only the magnitude of `step` matters; the direction comes from
    /// comparing `start` and `end`.
    pub fn range_step(start: T, end: T, step: T) -> Self {
        Stream::from_source(RangeSource::with_step(start, end, step))
    }
}

impl<'a, T: 'a> FromIterator<T> for Stream<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stream::of(iter)
    }
}
