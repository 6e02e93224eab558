//! The pipeline: a feed node plus an append-only chain of stages.

use super::{FeedNode, Node, ProcessorNode};
use crate::processor::Processor;
use crate::source::Source;

/// An append-only chain of nodes ending in a tail that yields `T`.
///
/// # Example
///
/// ```rust
/// use pullstream::pipeline::ProcessorPipeline;
/// use pullstream::processor::{Filter, Map};
/// use pullstream::source::ArraySource;
///
/// let mut pipeline = ProcessorPipeline::new(ArraySource::new(vec![1, 2, 3, 4]))
///     .add_processor(Filter::new(|x: &i32| x % 2 == 0))
///     .add_processor(Map::new(|x: i32| x * 100));
///
/// assert_eq!(pipeline.stage_count(), 2);
/// assert_eq!(pipeline.get_next_result(), Some(200));
/// assert_eq!(pipeline.get_next_result(), Some(400));
/// assert_eq!(pipeline.get_next_result(), None);
/// ```
pub struct ProcessorPipeline<'a, T> {
    tail: Box<dyn Node<Output = T> + 'a>,
    stages: usize,
}

impl<T> std::fmt::Debug for ProcessorPipeline<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorPipeline")
            .field("tail", &self.tail.id())
            .field("stages", &self.stages)
            .finish()
    }
}

impl<'a, T: 'a> ProcessorPipeline<'a, T> {
    /// Start a pipeline at `source`.
    pub fn new<S>(source: S) -> Self
    where
        S: Source<Item = T> + 'a,
    {
        Self {
            tail: Box::new(FeedNode::new(source)),
            stages: 0,
        }
    }

    /// Link `processor` after the current tail and return the extended pipeline.
    pub fn add_processor<P>(self, processor: P) -> ProcessorPipeline<'a, P::Output>
    where
        P: Processor<Input = T> + 'a,
        P::Output: 'a,
    {
        let node = ProcessorNode::new(processor, self.tail);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            node = %node.id(),
            kind = %node.processor().kind(),
            "appended pipeline stage"
        );
        ProcessorPipeline {
            tail: Box::new(node),
            stages: self.stages + 1,
        }
    }

    /// Whether another pull might produce a value.
    pub fn has_next(&self) -> bool {
        self.tail.has_next()
    }

    /// Pull until a value comes out or the chain is exhausted.
    ///
    /// Once this returns `None` the pipeline stays exhausted.
    pub fn get_next_result(&mut self) -> Option<T> {
        while self.tail.has_next() {
            if let Some(value) = self.tail.get_processed_value() {
                return Some(value);
            }
        }
        None
    }

    /// Number of stages appended after the feed node.
    pub fn stage_count(&self) -> usize {
        self.stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::{Distinct, FlatMapList, Limit, Map, Skip};
    use crate::source::{ArraySource, Generate};

    #[test]
    fn test_identity_pipeline() {
        let mut pipeline =
            ProcessorPipeline::new(ArraySource::new(vec!['x', 'y'])).add_processor(Map::new(|c: char| c));
        assert_eq!(pipeline.get_next_result(), Some('x'));
        assert_eq!(pipeline.get_next_result(), Some('y'));
        assert_eq!(pipeline.get_next_result(), None);
        assert!(!pipeline.has_next());
    }

    #[test]
    fn test_retries_through_long_rejected_runs() {
        let mut pipeline = ProcessorPipeline::new(ArraySource::new((0..100_000).collect::<Vec<u32>>()))
            .add_processor(Skip::new(99_999));
        assert_eq!(pipeline.get_next_result(), Some(99_999));
        assert_eq!(pipeline.get_next_result(), None);
    }

    #[test]
    fn test_limit_before_distinct_over_flattened_input() {
        let mut pipeline = ProcessorPipeline::new(ArraySource::new(vec!["abc", "123"]))
            .add_processor(FlatMapList::new(|s: &str| s.chars().collect::<Vec<_>>()))
            .add_processor(Limit::new(2))
            .add_processor(Distinct::new(|a: &char, b: &char| a == b));
        assert_eq!(pipeline.get_next_result(), Some('a'));
        assert_eq!(pipeline.get_next_result(), Some('b'));
        assert_eq!(pipeline.get_next_result(), None);
    }

    #[test]
    fn test_infinite_source_terminates_under_limit() {
        let mut calls = 0;
        {
            let mut pipeline = ProcessorPipeline::new(Generate::new(|| {
                calls += 1;
                calls
            }))
            .add_processor(Map::new(|x: i32| x * 2))
            .add_processor(Limit::new(3));
            let mut out = Vec::new();
            while let Some(v) = pipeline.get_next_result() {
                out.push(v);
            }
            assert_eq!(out, vec![2, 4, 6]);
        }
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_stage_count() {
        let pipeline = ProcessorPipeline::new(ArraySource::new(vec![1]));
        assert_eq!(pipeline.stage_count(), 0);
        let pipeline = pipeline.add_processor(Limit::new(1));
        assert_eq!(pipeline.stage_count(), 1);
    }
}
