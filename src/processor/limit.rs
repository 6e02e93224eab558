//! Limit stage - bounded take.

use std::collections::VecDeque;

use super::{Processor, ProcessorKind};

/// Emits at most `n` elements, then closes for good.
///
/// Once `n` values have been emitted the stage reports itself exhausted and
/// `has_next` is permanently `false`, whatever is still buffered. The
/// evaluation engine uses that to stop pulling from upstream, which is what
/// lets a bounded take terminate an infinite source.
///
/// Created by [`Stream::limit`](crate::Stream::limit).
#[derive(Debug, Clone)]
pub struct Limit<T> {
    buffer: VecDeque<T>,
    max: usize,
    emitted: usize,
}

impl<T> Limit<T> {
    /// Create a stage that emits at most `max` elements.
    pub fn new(max: usize) -> Self {
        Self {
            buffer: VecDeque::new(),
            max,
            emitted: 0,
        }
    }

    /// Number of elements emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl<T> Processor for Limit<T> {
    type Input = T;
    type Output = T;

    fn add(&mut self, input: T) {
        self.buffer.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.is_exhausted() && !self.buffer.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<T> {
        if self.is_exhausted() {
            return None;
        }
        let value = self.buffer.pop_front()?;
        self.emitted += 1;
        #[cfg(feature = "tracing")]
        if self.is_exhausted() {
            tracing::debug!(max = self.max, "limit reached, closing stage");
        }
        Some(value)
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::ShortCircuiting
    }

    fn is_exhausted(&self) -> bool {
        self.emitted >= self.max
    }
}
