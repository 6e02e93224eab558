//! The pull-based evaluation engine.
//!
//! A pipeline is a chain of [`Node`]s. The head is a [`FeedNode`] wrapping a
//! [`Source`](crate::source::Source); every appended stage is a
//! [`ProcessorNode`] that owns its upstream. Pulling the tail recursively
//! pulls the chain:
//!
//! - a stateless node serves a buffered value if it has one, otherwise pulls
//!   exactly one value from upstream, feeds it in, and processes once;
//! - a stateful node drains its upstream completely before its first output;
//! - a short-circuiting node that has reached its bound reports no more
//!   values, which stops pulls from reaching an infinite source.
//!
//! A pull can come back empty while the chain is not finished (an element
//! was filtered or skipped). [`ProcessorPipeline::get_next_result`] retries
//! in a loop until it gets a value or the chain reports exhaustion.
//!
//! # Ownership
//!
//! Appending a stage consumes the pipeline and returns a new one, so every
//! node has exactly one upstream, set when it is created, and there is one
//! path from the feed node to the tail. A pipeline can be drained by only one
//! consumer.

mod chain;
mod node;

pub use chain::ProcessorPipeline;
pub use node::{FeedNode, ProcessorNode};

/// Position of a node in its chain. The feed node is `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The id of the stage appended after this one.
    pub fn next(self) -> NodeId {
        NodeId(self.0 + 1)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A link in the evaluation chain.
pub trait Node {
    /// Element type this node produces.
    type Output;

    /// Whether pulling this node might still produce a value.
    fn has_next(&self) -> bool;

    /// Pull one value through this node. `None` does not imply exhaustion.
    fn get_processed_value(&mut self) -> Option<Self::Output>;

    /// Position of this node in its chain.
    fn id(&self) -> NodeId;
}

impl<N: Node + ?Sized> Node for Box<N> {
    type Output = N::Output;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn get_processed_value(&mut self) -> Option<Self::Output> {
        (**self).get_processed_value()
    }

    fn id(&self) -> NodeId {
        (**self).id()
    }
}
