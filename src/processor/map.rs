//! Map stage - transform each element.

use std::collections::VecDeque;

use super::{Processor, ProcessorKind};

/// Applies a function to each buffered input, oldest first.
///
/// Created by [`Stream::map`](crate::Stream::map).
pub struct Map<I, F> {
    buffer: VecDeque<I>,
    f: F,
}

impl<I, F> std::fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("buffered", &self.buffer.len())
            .field("f", &"<function>")
            .finish()
    }
}

impl<I, O, F> Map<I, F>
where
    F: FnMut(I) -> O,
{
    /// Create a map stage.
    pub fn new(f: F) -> Self {
        Self {
            buffer: VecDeque::new(),
            f,
        }
    }
}

impl<I, O, F> Processor for Map<I, F>
where
    F: FnMut(I) -> O,
{
    type Input = I;
    type Output = O;

    fn add(&mut self, input: I) {
        self.buffer.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.buffer.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<O> {
        self.buffer.pop_front().map(&mut self.f)
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateless
    }
}
