//! Filter stage - keep elements matching a predicate.

use std::collections::VecDeque;

use super::{Processor, ProcessorKind};

/// Emits a popped input only if the predicate holds.
///
/// A rejected input yields `None` without the stage being finished.
///
/// Created by [`Stream::filter`](crate::Stream::filter).
pub struct Filter<T, P> {
    buffer: VecDeque<T>,
    predicate: P,
}

impl<T, P> std::fmt::Debug for Filter<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("buffered", &self.buffer.len())
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<T, P> Filter<T, P>
where
    P: FnMut(&T) -> bool,
{
    /// Create a filter stage.
    pub fn new(predicate: P) -> Self {
        Self {
            buffer: VecDeque::new(),
            predicate,
        }
    }
}

impl<T, P> Processor for Filter<T, P>
where
    P: FnMut(&T) -> bool,
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
        self.buffer.pop_front().filter(&mut self.predicate)
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateless
    }
}
