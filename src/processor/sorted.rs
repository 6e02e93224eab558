//! Sorted stage - order elements with a comparator.

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::{Processor, ProcessorKind};

/// Sorts everything buffered before emitting the first element.
///
/// Stateful in the same drain-then-emit shape as
/// [`Distinct`](super::Distinct). The sort is stable.
///
/// Created by [`Stream::sorted`](crate::Stream::sorted) and
/// [`Stream::sorted_by`](crate::Stream::sorted_by).
pub struct Sorted<T, C> {
    buffer: VecDeque<T>,
    kept: VecDeque<T>,
    cmp: C,
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for Sorted<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sorted")
            .field("buffer", &self.buffer)
            .field("kept", &self.kept)
            .field("cmp", &"<function>")
            .finish()
    }
}

impl<T, C> Sorted<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    /// Create a sorting stage using `cmp` to order elements.
    pub fn new(cmp: C) -> Self {
        Self {
            buffer: VecDeque::new(),
            kept: VecDeque::new(),
            cmp,
        }
    }
}

impl<T, C> Processor for Sorted<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    type Input = T;
    type Output = T;

    fn add(&mut self, input: T) {
        self.buffer.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.buffer.is_empty() || !self.kept.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<T> {
        if !self.buffer.is_empty() {
            self.kept.append(&mut self.buffer);
            let cmp = &mut self.cmp;
            self.kept.make_contiguous().sort_by(|a, b| cmp(a, b));
        }
        self.kept.pop_front()
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateful
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_before_emitting() {
        let mut sorted = Sorted::new(|a: &i32, b: &i32| a.cmp(b));
        for x in [3, 1, 2] {
            sorted.add(x);
        }
        assert_eq!(sorted.process_and_get_next(), Some(1));
        assert_eq!(sorted.process_and_get_next(), Some(2));
        assert_eq!(sorted.process_and_get_next(), Some(3));
        assert!(!sorted.has_next());
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut sorted = Sorted::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        for pair in [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')] {
            sorted.add(pair);
        }
        let mut out = Vec::new();
        while let Some(pair) = sorted.process_and_get_next() {
            out.push(pair.1);
        }
        assert_eq!(out, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_reverse_comparator() {
        let mut sorted = Sorted::new(|a: &i32, b: &i32| b.cmp(a));
        sorted.add(1);
        sorted.add(5);
        assert_eq!(sorted.process_and_get_next(), Some(5));
    }
}
