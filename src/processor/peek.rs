//! Peek stage - observe elements without changing them.

use std::collections::VecDeque;

use super::{Processor, ProcessorKind};

/// Runs a side effect on each element as it passes through.
///
/// Created by [`Stream::peek`](crate::Stream::peek).
pub struct Peek<T, F> {
    buffer: VecDeque<T>,
    consumer: F,
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for Peek<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Peek")
            .field("buffer", &self.buffer)
            .field("consumer", &"<function>")
            .finish()
    }
}

impl<T, F> Peek<T, F>
where
    F: FnMut(&T),
{
    /// Create a peek stage.
    pub fn new(consumer: F) -> Self {
        Self {
            buffer: VecDeque::new(),
            consumer,
        }
    }
}

impl<T, F> Processor for Peek<T, F>
where
    F: FnMut(&T),
{
    type Input = T;
    type Output = T;

    fn add(&mut self, input: T) {
        self.buffer.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.buffer.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<T> {
        let value = self.buffer.pop_front()?;
        (self.consumer)(&value);
        Some(value)
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateless
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_passes_value_through() {
        let mut seen = Vec::new();
        {
            let mut peek = Peek::new(|x: &&str| seen.push(x.len()));
            peek.add("one");
            peek.add("three");
            assert_eq!(peek.process_and_get_next(), Some("one"));
            assert_eq!(peek.process_and_get_next(), Some("three"));
        }
        assert_eq!(seen, vec![3, 5]);
    }

    #[test]
    fn test_debug_hides_consumer() {
        let mut peek = Peek::new(|_: &u8| {});
        peek.add(7);
        let rendered = format!("{:?}", peek);
        assert!(rendered.contains("Peek"));
        assert!(rendered.contains("buffer: [7]"));
        assert!(rendered.contains("<function>"));
    }
}
