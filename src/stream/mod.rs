//! The public stream facade.
//!
//! A [`Stream`] wraps a [`ProcessorPipeline`]. Intermediate operations
//! (`map`, `filter`, `limit`, ...) append one stage and return a new stream
//! without pulling anything. Terminal operations (`to_vec`, `count`,
//! `all_match`, ...) consume the stream and pull values through the chain
//! until they have what they need.
//!
//! # Example
//!
//! ```rust
//! use pullstream::Stream;
//!
//! let squares: Vec<u64> = Stream::iterate(1u64, |x| x + 1)
//!     .map(|x| x * x)
//!     .filter(|x| x % 2 == 1)
//!     .limit(4)
//!     .to_vec();
//! assert_eq!(squares, vec![1, 9, 25, 49]);
//! ```
//!
//! # Single consumer
//!
//! Every operation takes `self` by value, so a stream cannot be reused after
//! it has been extended or consumed. To interleave pulls with other work, turn
//! the stream into a [`StreamIter`] with `into_iter()`.

mod constructors;
mod intermediate;
mod terminal;


use crate::pipeline::ProcessorPipeline;

/// A lazy, pull-based sequence of `T`.
///
/// `'a` bounds every closure and source captured by the stream, so stages may
/// borrow from the caller's scope.
pub struct Stream<'a, T> {
    pipeline: ProcessorPipeline<'a, T>,
}

impl<T> std::fmt::Debug for Stream<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Wrap an existing pipeline.
    pub fn from_pipeline(pipeline: ProcessorPipeline<'a, T>) -> Self {
        Self { pipeline }
    }

    /// Unwrap into the underlying pipeline.
    pub fn into_pipeline(self) -> ProcessorPipeline<'a, T> {
        self.pipeline
    }

    /// Number of stages appended after the source.
    pub fn stage_count(&self) -> usize {
        self.pipeline.stage_count()
    }
}

/// A pulling iterator over a [`Stream`].
///
/// Each call to `next` is one full pull through the pipeline.
pub struct StreamIter<'a, T> {
    pipeline: ProcessorPipeline<'a, T>,
}

impl<T> std::fmt::Debug for StreamIter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamIter")
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

impl<'a, T: 'a> StreamIter<'a, T> {
    /// Whether another pull might produce a value.
    ///
    /// A `true` answer does not guarantee that `next` yields `Some`; the
    /// remaining elements may all be filtered out.
    pub fn has_next(&self) -> bool {
        self.pipeline.has_next()
    }
}

impl<'a, T: 'a> Iterator for StreamIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pipeline.get_next_result()
    }
}

impl<'a, T: 'a> IntoIterator for Stream<'a, T> {
    type Item = T;
    type IntoIter = StreamIter<'a, T>;

    fn into_iter(self) -> StreamIter<'a, T> {
        StreamIter {
            pipeline: self.pipeline,
        }
    }
}
