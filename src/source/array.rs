//! Finite sources backed by owned storage or an external iterator.

use std::collections::VecDeque;

use super::Source;

/// A finite source that yields a copy of a sequence, earliest element first.
///
/// # Example
///
/// ```rust
/// use pullstream::source::{ArraySource, Source};
///
/// let mut source = ArraySource::new(vec!["a", "b"]);
/// assert_eq!(source.get(), Some("a"));
/// assert_eq!(source.get(), Some("b"));
/// assert!(!source.has_next());
/// ```
#[derive(Debug, Clone)]
pub struct ArraySource<T> {
    remaining: VecDeque<T>,
}

impl<T> ArraySource<T> {
    /// Create a source over the given elements.
    pub fn new(items: impl Into<VecDeque<T>>) -> Self {
        Self {
            remaining: items.into(),
        }
    }

    /// Number of elements not yet pulled.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Returns `true` if every element has been pulled.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl<T> Source for ArraySource<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    fn get(&mut self) -> Option<T> {
        self.remaining.pop_front()
    }
}

/// A source that pulls from an [`Iterator`] one element at a time.
///
/// The iterator is never advanced ahead of demand, so `has_next` stays `true`
/// until a pull comes back empty. That final empty pull is reported as an
/// absent value, after which the source is exhausted.
#[derive(Debug)]
pub struct IterSource<I> {
    iter: Option<I>,
}

impl<I: Iterator> IterSource<I> {
    /// Wrap an iterator.
    pub fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    fn has_next(&self) -> bool {
        self.iter.is_some()
    }

    fn get(&mut self) -> Option<I::Item> {
        let next = self.iter.as_mut()?.next();
        if next.is_none() {
            self.iter = None;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_source_drains_in_order() {
        let mut source = ArraySource::new(vec![1, 2, 3]);
        assert_eq!(source.len(), 3);

        let mut out = Vec::new();
        while source.has_next() {
            out.extend(source.get());
        }
        assert_eq!(out, vec![1, 2, 3]);
        assert!(source.is_empty());
    }

    #[test]
    fn test_array_source_empty() {
        let source = ArraySource::<i32>::new(Vec::new());
        assert!(!source.has_next());
    }

    #[test]
    fn test_array_source_copies_input() {
        let input = vec![1, 2];
        let mut source = ArraySource::new(input.clone());
        source.get();
        assert_eq!(input, vec![1, 2]);
    }

    #[test]
    fn test_iter_source_exhausts_after_empty_pull() {
        let mut source = IterSource::new(vec![7].into_iter());
        assert!(source.has_next());
        assert_eq!(source.get(), Some(7));
        assert!(source.has_next());
        assert_eq!(source.get(), None);
        assert!(!source.has_next());
        assert_eq!(source.get(), None);
    }

    #[test]
    fn test_iter_source_does_not_read_ahead() {
        let mut pulled = 0;
        {
            let mut source = IterSource::new((0..).inspect(|_| pulled += 1));
            assert!(source.has_next());
            source.get();
            source.get();
        }
        assert_eq!(pulled, 2);
    }
}
