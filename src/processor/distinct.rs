//! Distinct stage - drop repeated elements.

use std::collections::VecDeque;

use super::{Processor, ProcessorKind};

/// Keeps the first occurrence of each element under an equality function.
///
/// This stage is stateful: on the first demand it consumes everything
/// buffered, comparing each input against the elements already kept, and
/// then emits the kept elements one per call in first-seen order. The engine
/// drains upstream completely before that first demand.
///
/// Created by [`Stream::distinct`](crate::Stream::distinct) and
/// [`Stream::distinct_by`](crate::Stream::distinct_by).
pub struct Distinct<T, E> {
    buffer: VecDeque<T>,
    kept: VecDeque<T>,
    eq: E,
}

impl<T: std::fmt::Debug, E> std::fmt::Debug for Distinct<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Distinct")
            .field("buffer", &self.buffer)
            .field("kept", &self.kept)
            .field("eq", &"<function>")
            .finish()
    }
}

impl<T, E> Distinct<T, E>
where
    E: FnMut(&T, &T) -> bool,
{
    /// Create a distinct stage using `eq` to compare elements.
    pub fn new(eq: E) -> Self {
        Self {
            buffer: VecDeque::new(),
            kept: VecDeque::new(),
            eq,
        }
    }
}

impl<T, E> Processor for Distinct<T, E>
where
    E: FnMut(&T, &T) -> bool,
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
        let Self { buffer, kept, eq } = self;
        for candidate in buffer.drain(..) {
            if !kept.iter().any(|seen| eq(seen, &candidate)) {
                kept.push_back(candidate);
            }
        }
        kept.pop_front()
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateful
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut distinct = Distinct::new(|a: &i32, b: &i32| a == b);
        for x in [4, 1, 2, 3, 2, 1, 1] {
            distinct.add(x);
        }
        let mut out = Vec::new();
        while distinct.has_next() {
            out.extend(distinct.process_and_get_next());
        }
        assert_eq!(out, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_custom_equality() {
        let mut distinct = Distinct::new(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
        for word in ["Rust", "rust", "Go", "RUST", "go"] {
            distinct.add(word);
        }
        assert_eq!(distinct.process_and_get_next(), Some("Rust"));
        assert_eq!(distinct.process_and_get_next(), Some("Go"));
        assert_eq!(distinct.process_and_get_next(), None);
    }

    #[test]
    fn test_empty() {
        let mut distinct = Distinct::new(|a: &u8, b: &u8| a == b);
        assert!(!distinct.has_next());
        assert_eq!(distinct.process_and_get_next(), None);
    }
}
