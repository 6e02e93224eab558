//! Terminal operations: each consumes the stream and drives the pipeline.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use super::Stream;
use crate::collector::Collector;
use crate::optional::Optional;

impl<'a, T: 'a> Stream<'a, T> {
    /// Pull until exhausted or until `f` breaks.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn drive<F>(mut self, op: &'static str, mut f: F)
    where
        F: FnMut(T) -> ControlFlow<()>,
    {
        while let Some(value) = self.pipeline.get_next_result() {
            if f(value).is_break() {
                #[cfg(feature = "tracing")]
                tracing::trace!(op, "terminal operation short-circuited");
                return;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(op, "terminal operation exhausted stream");
    }

    /// Run `f` on every element.
    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(T),
    {
        self.drive("for_each", |value| {
            f(value);
            ControlFlow::Continue(())
        });
    }

    /// Collect every element into a `Vec`, in order.
    pub fn to_vec(self) -> Vec<T> {
        let mut out = Vec::new();
        self.drive("to_vec", |value| {
            out.push(value);
            ControlFlow::Continue(())
        });
        out
    }

    /// Reduce every element with a [`Collector`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::{collector, Stream};
    ///
    /// let csv = Stream::of([1, 2, 3]).collect(collector::joining(","));
    /// assert_eq!(csv, "1,2,3");
    /// ```
    pub fn collect<A, R>(self, mut collector: Collector<'_, T, A, R>) -> R {
        let mut acc = collector.supply();
        self.drive("collect", |value| {
            collector.accumulate(&mut acc, value);
            ControlFlow::Continue(())
        });
        collector.finish(acc)
    }

    /// Number of elements.
    pub fn count(self) -> usize {
        let mut count = 0;
        self.drive("count", |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    /// `true` if every element matches. Stops at the first mismatch.
    ///
    /// An empty stream matches vacuously without calling `predicate`.
    pub fn all_match<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut result = true;
        self.drive("all_match", |value| {
            if predicate(&value) {
                ControlFlow::Continue(())
            } else {
                result = false;
                ControlFlow::Break(())
            }
        });
        result
    }

    /// `true` if any element matches. Stops at the first match.
    pub fn any_match<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut result = false;
        self.drive("any_match", |value| {
            if predicate(&value) {
                result = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        result
    }

    /// `true` if no element matches. Stops at the first match.
    pub fn none_match<P>(self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    /// The first element, pulling exactly once.
    pub fn find_first(mut self) -> Optional<T> {
        Optional::of_nullable(self.pipeline.get_next_result())
    }

    /// Some element. Streams are sequential, so this is the first one.
    pub fn find_any(self) -> Optional<T> {
        self.find_first()
    }

    /// The smallest element by natural order.
    pub fn min(self) -> Optional<T>
    where
        T: Ord,
    {
        self.min_by(|a, b| a.cmp(b))
    }

    /// The largest element by natural order.
    pub fn max(self) -> Optional<T>
    where
        T: Ord,
    {
        self.max_by(|a, b| a.cmp(b))
    }

    /// The smallest element under `cmp`. Ties keep the earliest element.
    pub fn min_by<C>(self, mut cmp: C) -> Optional<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.best_by("min", move |candidate, best| {
            cmp(candidate, best) == Ordering::Less
        })
    }

    /// The largest element under `cmp`. Ties keep the earliest element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// let longest = Stream::of(["go", "rust", "zig"]).max_by(|a, b| a.len().cmp(&b.len()));
    /// assert_eq!(longest.get(), Ok("rust"));
    /// ```
    pub fn max_by<C>(self, mut cmp: C) -> Optional<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.best_by("max", move |candidate, best| {
            cmp(candidate, best) == Ordering::Greater
        })
    }

    fn best_by<B>(self, op: &'static str, mut beats: B) -> Optional<T>
    where
        B: FnMut(&T, &T) -> bool,
    {
        let mut best: Option<T> = None;
        self.drive(op, |value| {
            best = match best.take() {
                Some(current) if !beats(&value, &current) => Some(current),
                _ => Some(value),
            };
            ControlFlow::Continue(())
        });
        Optional::of_nullable(best)
    }

    /// Fold elements left to right, starting from the first element.
    ///
    /// Empty streams produce an empty [`Optional`].
    pub fn reduce<F>(self, mut f: F) -> Optional<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut acc: Option<T> = None;
        self.drive("reduce", |value| {
            acc = Some(match acc.take() {
                Some(current) => f(current, value),
                None => value,
            });
            ControlFlow::Continue(())
        });
        Optional::of_nullable(acc)
    }

    /// Fold elements left to right, starting from `seed`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Stream;
    ///
    /// assert_eq!(Stream::range(1, 5).fold(10, |acc, x| acc + x), 20);
    /// assert_eq!(Stream::<i32>::empty().fold(10, |acc, x| acc + x), 10);
    /// ```
    pub fn fold<A, F>(self, seed: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.into_iter().fold(seed, f)
    }
}
