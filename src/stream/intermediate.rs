//! Intermediate operations: each appends one stage and pulls nothing.

use std::cmp::Ordering;

use super::Stream;
use crate::optional::Optional;
use crate::processor::{
    Distinct, Filter, FlatMapList, FlatMapOptional, FlatMapStream, Limit, Map, Peek, Skip, Sorted,
};

impl<'a, T: 'a> Stream<'a, T> {
    /// Transform each element.
    pub fn map<U, F>(self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(Map::new(f)))
    }

    /// Keep only elements matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Stream<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(Filter::new(predicate)))
    }

    /// Replace each element with the elements of the stream `f` returns.
    ///
    /// Inner streams are pulled lazily, one at a time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// let out = Stream::of([1, 3])
    ///     .flat_map(|n| Stream::range(n, n + 2))
    ///     .to_vec();
    /// assert_eq!(out, vec![1, 2, 3, 4]);
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> Stream<'a, U> + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(FlatMapStream::new(f)))
    }

    /// Replace each element with the items of the collection `f` returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// let chars = Stream::of(["ab", "c"])
    ///     .flat_map_list(|s| s.chars().collect::<Vec<_>>())
    ///     .to_vec();
    /// assert_eq!(chars, vec!['a', 'b', 'c']);
    /// ```
    pub fn flat_map_list<U, R, F>(self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        R: IntoIterator<Item = U>,
        F: FnMut(T) -> R + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(FlatMapList::new(f)))
    }

    /// Map each element to an [`Optional`] and keep only present results.
    pub fn flat_map_optional<U, F>(self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> Optional<U> + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(FlatMapOptional::new(f)))
    }

    /// Observe each element as it is pulled, without changing it.
    pub fn peek<F>(self, consumer: F) -> Stream<'a, T>
    where
        F: FnMut(&T) + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(Peek::new(consumer)))
    }

    /// Drop repeated elements, keeping first occurrences in order.
    ///
    /// Stateful: the first pull drains everything upstream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// let unique = Stream::of([4, 1, 2, 3, 2, 1, 1]).distinct().to_vec();
    /// assert_eq!(unique, vec![4, 1, 2, 3]);
    /// ```
    pub fn distinct(self) -> Stream<'a, T>
    where
        T: PartialEq,
    {
        self.distinct_by(|a, b| a == b)
    }

    /// Drop elements equal, under `eq`, to an earlier element.
    pub fn distinct_by<E>(self, eq: E) -> Stream<'a, T>
    where
        E: FnMut(&T, &T) -> bool + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(Distinct::new(eq)))
    }

    /// Sort elements by their natural order.
    ///
    /// Stateful: the first pull drains everything upstream.
    pub fn sorted(self) -> Stream<'a, T>
    where
        T: Ord,
    {
        self.sorted_by(|a, b| a.cmp(b))
    }

    /// Sort elements with a comparator. The sort is stable.
    pub fn sorted_by<C>(self, cmp: C) -> Stream<'a, T>
    where
        C: FnMut(&T, &T) -> Ordering + 'a,
    {
        Stream::from_pipeline(self.pipeline.add_processor(Sorted::new(cmp)))
    }

    /// Emit at most `max` elements.
    ///
    /// Short-circuiting: once `max` elements have passed, nothing further is
    /// pulled from upstream, so this bounds infinite streams.
    pub fn limit(self, max: usize) -> Stream<'a, T> {
        Stream::from_pipeline(self.pipeline.add_processor(Limit::new(max)))
    }

    /// Discard the first `n` elements.
    pub fn skip(self, n: usize) -> Stream<'a, T> {
        Stream::from_pipeline(self.pipeline.add_processor(Skip::new(n)))
    }
}
