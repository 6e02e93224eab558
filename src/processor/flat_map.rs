//! Flattening stages - one input, zero or more outputs.
//!
//! All three variants buffer inputs and expand them one at a time: the
//! outputs produced by one input are drained before the next input is
//! touched. An input that expands to nothing yields `None` without the stage
//! being finished.

use std::collections::VecDeque;

use super::{Processor, ProcessorKind};
use crate::optional::Optional;
use crate::stream::{Stream, StreamIter};

/// Expands each input into a collection of outputs.
///
/// Created by [`Stream::flat_map_list`](crate::Stream::flat_map_list).
pub struct FlatMapList<I, O, F> {
    inputs: VecDeque<I>,
    pending: VecDeque<O>,
    f: F,
}

impl<I, O: std::fmt::Debug, F> std::fmt::Debug for FlatMapList<I, O, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMapList")
            .field("inputs", &self.inputs.len())
            .field("pending", &self.pending)
            .field("f", &"<function>")
            .finish()
    }
}

impl<I, O, R, F> FlatMapList<I, O, F>
where
    F: FnMut(I) -> R,
    R: IntoIterator<Item = O>,
{
    /// Create a list-flattening stage.
    pub fn new(f: F) -> Self {
        Self {
            inputs: VecDeque::new(),
            pending: VecDeque::new(),
            f,
        }
    }
}

impl<I, O, R, F> Processor for FlatMapList<I, O, F>
where
    F: FnMut(I) -> R,
    R: IntoIterator<Item = O>,
{
    type Input = I;
    type Output = O;

    fn add(&mut self, input: I) {
        self.inputs.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.pending.is_empty() || !self.inputs.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<O> {
        if self.pending.is_empty() {
            let input = self.inputs.pop_front()?;
            self.pending.extend((self.f)(input));
        }
        self.pending.pop_front()
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateless
    }
}

/// Expands each input into a [`Stream`] and pulls from it lazily.
///
/// The inner stream is only pulled as far as downstream demands, so an
/// infinite inner stream is fine as long as something bounds it later.
///
/// Created by [`Stream::flat_map`](crate::Stream::flat_map).
pub struct FlatMapStream<'a, I, O, F> {
    inputs: VecDeque<I>,
    current: Option<StreamIter<'a, O>>,
    f: F,
}

impl<I, O, F> std::fmt::Debug for FlatMapStream<'_, I, O, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMapStream")
            .field("inputs", &self.inputs.len())
            .field("current", &self.current.is_some())
            .field("f", &"<function>")
            .finish()
    }
}

impl<'a, I, O: 'a, F> FlatMapStream<'a, I, O, F>
where
    F: FnMut(I) -> Stream<'a, O>,
{
    /// Create a stream-flattening stage.
    pub fn new(f: F) -> Self {
        Self {
            inputs: VecDeque::new(),
            current: None,
            f,
        }
    }
}

impl<'a, I, O: 'a, F> Processor for FlatMapStream<'a, I, O, F>
where
    F: FnMut(I) -> Stream<'a, O>,
{
    type Input = I;
    type Output = O;

    fn add(&mut self, input: I) {
        self.inputs.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.inputs.is_empty() || self.current.as_ref().is_some_and(StreamIter::has_next)
    }

    fn process_and_get_next(&mut self) -> Option<O> {
        if let Some(current) = self.current.as_mut() {
            if let Some(value) = current.next() {
                return Some(value);
            }
            self.current = None;
        }
        let input = self.inputs.pop_front()?;
        let mut inner = (self.f)(input).into_iter();
        let first = inner.next();
        if inner.has_next() {
            self.current = Some(inner);
        }
        first
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateless
    }
}

/// Maps each input to an [`Optional`] and unwraps one level.
///
/// Created by [`Stream::flat_map_optional`](crate::Stream::flat_map_optional).
pub struct FlatMapOptional<I, F> {
    inputs: VecDeque<I>,
    f: F,
}

impl<I, F> std::fmt::Debug for FlatMapOptional<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMapOptional")
            .field("inputs", &self.inputs.len())
            .field("f", &"<function>")
            .finish()
    }
}

impl<I, O, F> FlatMapOptional<I, F>
where
    F: FnMut(I) -> Optional<O>,
{
    /// Create an optional-flattening stage.
    pub fn new(f: F) -> Self {
        Self {
            inputs: VecDeque::new(),
            f,
        }
    }
}

impl<I, O, F> Processor for FlatMapOptional<I, F>
where
    F: FnMut(I) -> Optional<O>,
{
    type Input = I;
    type Output = O;

    fn add(&mut self, input: I) {
        self.inputs.push_back(input);
    }

    fn has_next(&self) -> bool {
        !self.inputs.is_empty()
    }

    fn process_and_get_next(&mut self) -> Option<O> {
        let input = self.inputs.pop_front()?;
        (self.f)(input).into_option()
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Stateless
    }
}
