//! Transformation stages that sit between a source and a terminal operation.
//!
//! Every stage is a [`Processor`]: a buffer of not-yet-processed inputs plus
//! whatever state the stage needs. Stages are classified by [`ProcessorKind`]:
//!
//! - **Stateless** stages can emit from whatever has been added so far
//!   ([`Map`], [`Filter`], [`FlatMapList`], [`FlatMapStream`],
//!   [`FlatMapOptional`], [`Peek`], [`Skip`]).
//! - **Short-circuiting** stages are stateless but close permanently after a
//!   bound is reached, independent of upstream ([`Limit`]).
//! - **Stateful** stages need every upstream element before their first
//!   emission is valid ([`Distinct`], [`Sorted`]).
//!
//! The evaluation engine in [`pipeline`](crate::pipeline) matches on the kind
//! to decide whether to pull one element at a time or drain upstream first.
//!
//! Most users never touch these types directly; the
//! [`Stream`](crate::Stream) methods construct them.

mod distinct;
mod filter;
mod flat_map;
mod limit;
mod map;
mod peek;
mod skip;
mod sorted;

pub use distinct::Distinct;
pub use filter::Filter;
pub use flat_map::{FlatMapList, FlatMapOptional, FlatMapStream};
pub use limit::Limit;
pub use map::Map;
pub use peek::Peek;
pub use skip::Skip;
pub use sorted::Sorted;

/// How a processor must be driven by the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorKind {
    /// Emits from the inputs added so far, one at a time.
    Stateless,
    /// Stateless, and additionally closes for good once its bound is reached.
    ShortCircuiting,
    /// Needs all upstream inputs before the first emission.
    Stateful,
}

impl std::fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stateless => write!(f, "stateless"),
            Self::ShortCircuiting => write!(f, "short-circuiting"),
            Self::Stateful => write!(f, "stateful"),
        }
    }
}

/// A single transformation stage.
///
/// `add` only buffers. `has_next` looks at buffered state alone and never
/// reaches upstream. `process_and_get_next` may return `None` without the
/// stage being finished, e.g. when a filter rejects the element it popped;
/// callers retry instead of treating that as the end of the stream.
pub trait Processor {
    /// Element type accepted from upstream.
    type Input;
    /// Element type emitted downstream.
    type Output;

    /// Buffer an input. No side effects run here.
    fn add(&mut self, input: Self::Input);

    /// Whether a call to [`process_and_get_next`](Processor::process_and_get_next)
    /// might yield a value using only what is already buffered.
    fn has_next(&self) -> bool;

    /// Process buffered input and return the next output, if any.
    fn process_and_get_next(&mut self) -> Option<Self::Output>;

    /// How the engine must drive this stage.
    fn kind(&self) -> ProcessorKind;

    /// Whether a short-circuiting stage has reached its bound.
    ///
    /// Always `false` for stages that do not short-circuit.
    fn is_exhausted(&self) -> bool {
        false
    }

    /// Returns `true` unless the stage is [`ProcessorKind::Stateful`].
    fn is_stateless(&self) -> bool {
        !matches!(self.kind(), ProcessorKind::Stateful)
    }

    /// Returns `true` for [`ProcessorKind::ShortCircuiting`] stages.
    fn is_short_circuiting(&self) -> bool {
        matches!(self.kind(), ProcessorKind::ShortCircuiting)
    }
}
