//! Feed and processor nodes.

use super::{Node, NodeId};
use crate::processor::{Processor, ProcessorKind};
use crate::source::Source;

/// The head of every chain: delegates straight to a [`Source`].
#[derive(Debug)]
pub struct FeedNode<S> {
    source: S,
}

impl<S: Source> FeedNode<S> {
    /// Wrap a source.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Source> Node for FeedNode<S> {
    type Output = S::Item;

    fn has_next(&self) -> bool {
        self.source.has_next()
    }

    fn get_processed_value(&mut self) -> Option<S::Item> {
        if !self.source.has_next() {
            return None;
        }
        self.source.get()
    }

    fn id(&self) -> NodeId {
        NodeId(0)
    }
}

/// A node wrapping one [`Processor`] and owning its upstream.
pub struct ProcessorNode<'a, P: Processor> {
    id: NodeId,
    processor: P,
    previous: Box<dyn Node<Output = P::Input> + 'a>,
}

impl<P: Processor + std::fmt::Debug> std::fmt::Debug for ProcessorNode<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorNode")
            .field("id", &self.id)
            .field("processor", &self.processor)
            .field("previous", &self.previous.id())
            .finish()
    }
}

impl<'a, P: Processor> ProcessorNode<'a, P> {
    /// Link `processor` after `previous`.
    pub fn new(processor: P, previous: Box<dyn Node<Output = P::Input> + 'a>) -> Self {
        Self {
            id: previous.id().next(),
            processor,
            previous,
        }
    }

    /// The wrapped processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    fn stateless_get(&mut self) -> Option<P::Output> {
        if self.processor.is_exhausted() {
            return None;
        }
        if self.processor.has_next() {
            return self.processor.process_and_get_next();
        }
        let value = self.previous.get_processed_value()?;
        self.processor.add(value);
        self.processor.process_and_get_next()
    }

    fn stateful_pull_and_get(&mut self) -> Option<P::Output> {
        if self.previous.has_next() {
            while self.previous.has_next() {
                if let Some(value) = self.previous.get_processed_value() {
                    self.processor.add(value);
                }
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(node = %self.id, "stateful stage drained upstream");
        }
        self.processor.process_and_get_next()
    }
}

impl<'a, P: Processor> Node for ProcessorNode<'a, P> {
    type Output = P::Output;

    fn has_next(&self) -> bool {
        match self.processor.kind() {
            ProcessorKind::ShortCircuiting => {
                !self.processor.is_exhausted()
                    && (self.processor.has_next() || self.previous.has_next())
            }
            ProcessorKind::Stateless | ProcessorKind::Stateful => {
                self.processor.has_next() || self.previous.has_next()
            }
        }
    }

    fn get_processed_value(&mut self) -> Option<P::Output> {
        match self.processor.kind() {
            ProcessorKind::Stateless | ProcessorKind::ShortCircuiting => self.stateless_get(),
            ProcessorKind::Stateful => self.stateful_pull_and_get(),
        }
    }

    fn id(&self) -> NodeId {
        self.id
    }
}
