//! Testing utilities for code built on streams.
//!
//! Laziness is the property most worth testing in a pull-based pipeline, and
//! the easiest to break by accident. This module provides a cloneable
//! [`CallCounter`] for counting how often a closure runs, assertion macros for
//! [`Optional`](crate::Optional), and `proptest` support behind the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use pullstream::testing::CallCounter;
//! use pullstream::{assert_present_eq, Stream};
//!
//! let calls = CallCounter::new();
//! let counted = calls.clone();
//! let first = Stream::generate(move || {
//!     counted.tick();
//!     7
//! })
//! .find_first();
//!
//! assert_present_eq!(first, 7);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// A shared call counter.
///
/// Clones share the same count, so one clone can move into a closure while
/// the test keeps another to read from.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    count: Rc<Cell<usize>>,
}

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn tick(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Number of calls recorded across every clone.
    pub fn get(&self) -> usize {
        self.count.get()
    }

    /// Wrap a one-argument function so each call is counted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::testing::CallCounter;
    /// use pullstream::Stream;
    ///
    /// let calls = CallCounter::new();
    /// let out = Stream::of([1, 2, 3])
    ///     .map(calls.counting(|x: i32| x + 1))
    ///     .limit(2)
    ///     .to_vec();
    ///
    /// assert_eq!(out, vec![2, 3]);
    /// assert_eq!(calls.get(), 2);
    /// ```
    pub fn counting<A, R, F>(&self, mut f: F) -> impl FnMut(A) -> R
    where
        F: FnMut(A) -> R,
    {
        let counter = self.clone();
        move |arg| {
            counter.tick();
            f(arg)
        }
    }
}

/// Assert that an optional holds a value.
///
/// # Example
///
/// ```rust
/// use pullstream::{assert_present, Optional};
///
/// assert_present!(Optional::of(1));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($optional:expr) => {
        if $optional.is_empty() {
            panic!("Expected present value, got empty Optional");
        }
    };
}

/// Assert that an optional is empty.
///
/// # Example
///
/// ```rust
/// use pullstream::{assert_absent, Optional};
///
/// assert_absent!(Optional::<i32>::empty());
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($optional:expr) => {
        if let Some(value) = $crate::Optional::into_option($optional) {
            panic!("Expected empty Optional, got {:?}", value);
        }
    };
}

/// Assert that an optional holds a specific value.
///
/// # Example
///
/// ```rust
/// use pullstream::{assert_present_eq, Optional};
///
/// assert_present_eq!(Optional::of("x"), "x");
/// ```
#[macro_export]
macro_rules! assert_present_eq {
    ($optional:expr, $expected:expr) => {
        match $crate::Optional::into_option($optional) {
            Some(value) => assert_eq!(value, $expected),
            None => panic!("Expected present value {:?}, got empty Optional", $expected),
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Optional<T>
where
    T: Arbitrary + Clone + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(crate::Optional::empty()),
            any_with::<T>(args).prop_map(crate::Optional::of),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Optional;

    #[test]
    fn call_counter_shares_count_between_clones() {
        let counter = CallCounter::new();
        let clone = counter.clone();
        clone.tick();
        clone.tick();
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn counting_wraps_function() {
        let counter = CallCounter::new();
        let mut double = counter.counting(|x: i32| x * 2);
        assert_eq!(double(2), 4);
        assert_eq!(double(5), 10);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn assert_present_macro() {
        assert_present!(Optional::of(3));
    }

    #[test]
    fn assert_absent_macro() {
        assert_absent!(Optional::<u8>::empty());
    }

    #[test]
    fn assert_present_eq_macro() {
        assert_present_eq!(Optional::of(vec![1]), vec![1]);
    }

    #[test]
    #[should_panic(expected = "Expected present value, got empty Optional")]
    fn assert_present_panics_on_empty() {
        assert_present!(Optional::<i32>::empty());
    }

    #[test]
    #[should_panic(expected = "Expected empty Optional, got 4")]
    fn assert_absent_panics_on_present() {
        assert_absent!(Optional::of(4));
    }

    #[test]
    #[should_panic(expected = "Expected present value 1, got empty Optional")]
    fn assert_present_eq_panics_on_empty() {
        assert_present_eq!(Optional::<i32>::empty(), 1);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn optional_arbitrary_generates_valid_instances(
                opt in any::<Optional<i32>>()
            ) {
                prop_assert_eq!(opt.is_present(), !opt.is_empty());
            }
        }
    }
}
