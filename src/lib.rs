//! # Pullstream
//!
//! Lazy, pull-based stream pipelines.
//!
//! A [`Stream`] is a chain of transformation stages hanging off a source. No
//! work happens while the chain is built; a terminal operation pulls values
//! through one at a time, and each stage asks its upstream for exactly as
//! much as it needs.
//!
//! ## Stage kinds
//!
//! - **Stateless** stages (`map`, `filter`, `flat_map`, `peek`, `skip`) handle
//!   one element at a time.
//! - **Stateful** stages (`distinct`, `sorted`) drain everything upstream
//!   before emitting their first element.
//! - **Short-circuiting** stages (`limit`) stop pulling upstream once their
//!   bound is reached, which is what makes infinite sources usable.
//!
//! ## Quick Example
//!
//! ```rust
//! use pullstream::Stream;
//!
//! let letters = Stream::of(["abc", "123"])
//!     .flat_map_list(|s| s.chars().collect::<Vec<_>>())
//!     .limit(2)
//!     .distinct()
//!     .to_vec();
//! assert_eq!(letters, vec!['a', 'b']);
//!
//! // Infinite sources are fine as long as something bounds them.
//! let mut calls = 0;
//! let first_three = Stream::generate(|| {
//!     calls += 1;
//!     calls * 10
//! })
//! .limit(3)
//! .to_vec();
//! assert_eq!(first_three, vec![10, 20, 30]);
//! assert_eq!(calls, 3);
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit `tracing` events for stage appends, stateful drains,
//!   limit exhaustion and terminal operations
//! - `serde`: `Serialize`/`Deserialize` for [`Optional`]
//! - `proptest`: `Arbitrary` for [`Optional`] in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collector;
pub mod error;
pub mod optional;
pub mod pipeline;
pub mod processor;
pub mod source;
pub mod stream;
pub mod testing;

// Re-exports
pub use collector::Collector;
pub use error::OptionalError;
pub use optional::Optional;
pub use pipeline::ProcessorPipeline;
pub use processor::{Processor, ProcessorKind};
pub use source::Source;
pub use stream::{Stream, StreamIter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collector::{self, Collector};
    pub use crate::error::OptionalError;
    pub use crate::optional::Optional;
    pub use crate::stream::{Stream, StreamIter};
}
