//! Skip stage - drop the first `n` elements.

use std::collections::VecDeque;

use super::{Processor, ProcessorKind};

/// Discards the first `n` popped inputs, then passes the rest through.
///
/// Each discard still consumes one buffered slot and yields `None`.
///
/// Created by [`Stream::skip`](crate::Stream::skip).
#[derive(Debug, Clone)]
pub struct Skip<T> {
    buffer: VecDeque<T>,
    remaining: usize,
}

impl<T> Skip<T> {
    /// Create a stage that skips `n` elements.
    pub fn new(n: usize) -> Self {
        Self {
            buffer: VecDeque::new(),
            remaining: n,
        }
    }
}

impl<T> Processor for Skip<T> {
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
        if self.remaining > 0 {
            self.remaining -= 1;
            return None;
        }
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
    fn test_skip_discards_then_passes() {
        let mut skip = Skip::new(2);
        for x in 1..=4 {
            skip.add(x);
        }
        let out: Vec<Option<i32>> = (0..4).map(|_| skip.process_and_get_next()).collect();
        assert_eq!(out, vec![None, None, Some(3), Some(4)]);
        assert!(!skip.has_next());
    }

    #[test]
    fn test_skip_zero() {
        let mut skip = Skip::new(0);
        skip.add('a');
        assert_eq!(skip.process_and_get_next(), Some('a'));
    }
}
