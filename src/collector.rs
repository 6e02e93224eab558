//! Terminal reductions for [`Stream::collect`](crate::Stream::collect).
//!
//! A [`Collector`] is the classic four-part reduction:
//!
//! - **supplier**: builds a fresh accumulator
//! - **accumulator**: folds one element into it
//! - **combiner**: merges two accumulators
//! - **finisher**: turns the accumulator into the result
//!
//! Streams are evaluated sequentially, so the combiner is never called by
//! [`Stream::collect`](crate::Stream::collect). It is kept so collectors can
//! be merged by callers that split work themselves.
//!
//! # Example
//!
//! ```rust
//! use pullstream::{collector, Stream};
//!
//! let words = Stream::of(["apple", "avocado", "banana"]);
//! let by_initial = words.collect(collector::grouping_by(|w: &&str| w.chars().next()));
//!
//! assert_eq!(by_initial[&Some('a')], vec!["apple", "avocado"]);
//! assert_eq!(by_initial[&Some('b')], vec!["banana"]);
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// A supplier/accumulator/combiner/finisher reduction over elements of `T`.
///
/// `'c` bounds the captured closures, so collectors can work over borrowed
/// elements and borrow from the caller's scope.
pub struct Collector<'c, T, A, R> {
    supplier: Box<dyn Fn() -> A + 'c>,
    accumulator: Box<dyn FnMut(&mut A, T) + 'c>,
    combiner: Box<dyn Fn(A, A) -> A + 'c>,
    finisher: Box<dyn FnOnce(A) -> R + 'c>,
}

impl<T, A, R> std::fmt::Debug for Collector<'_, T, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collector")
            .field("supplier", &"<function>")
            .field("accumulator", &"<function>")
            .field("combiner", &"<function>")
            .field("finisher", &"<function>")
            .finish()
    }
}

impl<'c, T: 'c, A: 'c> Collector<'c, T, A, A> {
    /// Build a collector whose result is the accumulator itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::{Collector, Stream};
    ///
    /// let product = Collector::new(|| 1i64, |acc: &mut i64, x: i64| *acc *= x, |a, b| a * b);
    /// assert_eq!(Stream::range(1i64, 6).collect(product), 120);
    /// ```
    pub fn new<S, F, C>(supplier: S, accumulator: F, combiner: C) -> Self
    where
        S: Fn() -> A + 'c,
        F: FnMut(&mut A, T) + 'c,
        C: Fn(A, A) -> A + 'c,
    {
        Self {
            supplier: Box::new(supplier),
            accumulator: Box::new(accumulator),
            combiner: Box::new(combiner),
            finisher: Box::new(|acc| acc),
        }
    }
}

impl<'c, T: 'c, A: 'c, R: 'c> Collector<'c, T, A, R> {
    /// Post-process the result with `f`.
    pub fn with_finisher<R2, F>(self, f: F) -> Collector<'c, T, A, R2>
    where
        R2: 'c,
        F: FnOnce(R) -> R2 + 'c,
    {
        let finisher = self.finisher;
        Collector {
            supplier: self.supplier,
            accumulator: self.accumulator,
            combiner: self.combiner,
            finisher: Box::new(move |acc| f(finisher(acc))),
        }
    }
}

impl<T, A, R> Collector<'_, T, A, R> {
    /// Create a fresh accumulator.
    pub fn supply(&self) -> A {
        (self.supplier)()
    }

    /// Fold one element into `acc`.
    pub fn accumulate(&mut self, acc: &mut A, value: T) {
        (self.accumulator)(acc, value)
    }

    /// Merge two accumulators.
    pub fn combine(&self, left: A, right: A) -> A {
        (self.combiner)(left, right)
    }

    /// Produce the final result, consuming the collector.
    pub fn finish(self, acc: A) -> R {
        (self.finisher)(acc)
    }
}

/// Collect into a `Vec` in encounter order.
pub fn to_list<'c, T: 'c>() -> Collector<'c, T, Vec<T>, Vec<T>> {
    Collector::new(Vec::new, |acc: &mut Vec<T>, value| acc.push(value), |mut a, b| {
        a.extend(b);
        a
    })
}

/// Count elements.
pub fn counting<'c, T: 'c>() -> Collector<'c, T, usize, usize> {
    Collector::new(|| 0, |acc: &mut usize, _| *acc += 1, |a, b| a + b)
}

/// Join the `Display` form of each element with `separator`.
pub fn joining<'c, T: Display + 'c>(separator: &str) -> Collector<'c, T, Vec<String>, String> {
    let separator = separator.to_string();
    Collector::new(
        Vec::new,
        |acc: &mut Vec<String>, value: T| acc.push(value.to_string()),
        |mut a, b| {
            a.extend(b);
            a
        },
    )
    .with_finisher(move |parts| parts.join(separator.as_str()))
}

/// Sum the values `f` extracts from each element.
pub fn summing<'c, T, N, F>(f: F) -> Collector<'c, T, N, N>
where
    T: 'c,
    N: Default + std::ops::Add<Output = N> + 'c,
    F: Fn(&T) -> N + 'c,
{
    Collector::new(
        N::default,
        move |acc: &mut N, value: T| {
            let current = std::mem::take(acc);
            *acc = current + f(&value);
        },
        |a, b| a + b,
    )
}

/// Group elements into a map keyed by `key_fn`, preserving encounter order
/// within each group.
pub fn grouping_by<'c, T, K, F>(
    key_fn: F,
) -> Collector<'c, T, HashMap<K, Vec<T>>, HashMap<K, Vec<T>>>
where
    T: 'c,
    K: Eq + Hash + 'c,
    F: Fn(&T) -> K + 'c,
{
    Collector::new(
        HashMap::new,
        move |acc: &mut HashMap<K, Vec<T>>, value: T| {
            acc.entry(key_fn(&value)).or_default().push(value);
        },
        |mut a, b| {
            for (key, values) in b {
                a.entry(key).or_default().extend(values);
            }
            a
        },
    )
}
