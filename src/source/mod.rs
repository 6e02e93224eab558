//! Pull producers that sit at the head of every pipeline.
//!
//! A [`Source`] is the single pull point a pipeline bottoms out at. Sources are
//! either *finite* (they report `has_next() == false` once drained) or
//! *infinite* (they always report more values). Each source is owned by the
//! feed node that wraps it and is never shared.
//!
//! # Variants
//!
//! - [`ArraySource`]: owns a copy of a sequence, yields it front to back
//! - [`IterSource`]: wraps any [`Iterator`], finite or not
//! - [`Generate`]: calls a zero-argument generator on every pull
//! - [`Iterate`]: yields a seed, then applies a transform to the previous value
//! - [`RangeSource`]: numeric range with inferred direction
//! - [`Concat`]: drains one stream, then another
//!
//! # Example
//!
//! ```rust
//! use pullstream::source::{RangeSource, Source};
//!
//! let mut range = RangeSource::new(5, 0);
//! let mut seen = Vec::new();
//! while range.has_next() {
//!     seen.extend(range.get());
//! }
//! assert_eq!(seen, vec![5, 4, 3, 2, 1]);
//! ```

mod array;
mod concat;
mod generate;
mod range;

pub use array::{ArraySource, IterSource};
pub use concat::Concat;
pub use generate::{Generate, Iterate};
pub use range::{RangeSource, RangeStep};

/// A pull point producing values of type `Item`.
///
/// Callers check [`has_next`](Source::has_next) before each
/// [`get`](Source::get). A `get` may still return `None` while the source is
/// not yet known to be exhausted; the pipeline treats that like any other
/// empty-but-not-finished pull and asks again.
pub trait Source {
    /// The type of value produced.
    type Item;

    /// Whether another pull might produce a value.
    fn has_next(&self) -> bool;

    /// Pull the next value.
    fn get(&mut self) -> Option<Self::Item>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn get(&mut self) -> Option<Self::Item> {
        (**self).get()
    }
}
