//! A present/absent value container.
//!
//! `Optional<T>` is what terminal stream operations such as
//! [`Stream::find_first`](crate::Stream::find_first) and
//! [`Stream::reduce`](crate::Stream::reduce) hand back. It is a thin wrapper
//! around [`Option<T>`] that adds the fallible accessors streams expose
//! (`get`, `or_else_throw`) and converts freely in both directions.
//!
//! Every transformer argument (`map`, `filter`, `flat_map`, `or_else_get`, ...)
//! is invoked at most once and only when it is needed. Nothing runs against an
//! absent value.
//!
//! # Examples
//!
//! ```rust
//! use pullstream::Optional;
//!
//! let name = Optional::of("ada")
//!     .filter(|n| n.len() > 2)
//!     .map(|n| n.to_uppercase());
//! assert_eq!(name.or_else("nobody".to_string()), "ADA");
//!
//! let missing: Optional<i32> = Optional::of_nullable(None);
//! assert!(!missing.is_present());
//! ```

use crate::error::OptionalError;

#[cfg(feature = "serde")]
mod serde_impl;

/// A value that may or may not be present.
///
/// # Example
///
/// ```rust
/// use pullstream::Optional;
///
/// let present = Optional::of(42);
/// let absent: Optional<i32> = Optional::empty();
///
/// assert_eq!(present.get(), Ok(42));
/// assert_eq!(absent.or_else(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Create an optional holding `value`.
    #[inline]
    pub fn of(value: T) -> Self {
        Optional(Some(value))
    }

    /// Create an optional that must hold a value.
    ///
    /// Fails with [`OptionalError::NullPointer`] when given `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::{Optional, OptionalError};
    ///
    /// assert_eq!(Optional::try_of(Some(1)), Ok(Optional::of(1)));
    /// assert_eq!(Optional::<i32>::try_of(None), Err(OptionalError::NullPointer));
    /// ```
    pub fn try_of(value: Option<T>) -> Result<Self, OptionalError> {
        value.map(Optional::of).ok_or(OptionalError::NullPointer)
    }

    /// Create an optional from a possibly absent value. Never fails.
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        Optional(value)
    }

    /// Create an empty optional.
    #[inline]
    pub fn empty() -> Self {
        Optional(None)
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    // ========== Extractors ==========

    /// Take the value out.
    ///
    /// Fails with [`OptionalError::NoSuchElement`] when empty.
    pub fn get(self) -> Result<T, OptionalError> {
        self.0.ok_or(OptionalError::NoSuchElement)
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Convert into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Return the value, or `default` when empty.
    pub fn or_else(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Return the value, or the result of `supplier` when empty.
    ///
    /// `supplier` only runs when the optional is empty.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(supplier)
    }

    /// Return the value, or the error built by `error_supplier` when empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Optional;
    ///
    /// let missing: Optional<i32> = Optional::empty();
    /// assert_eq!(missing.or_else_throw(|| "no config"), Err("no config"));
    /// ```
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.0.ok_or_else(error_supplier)
    }

    /// Return `self` if present, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        Optional(self.0.or(other.0))
    }

    // ========== Transformers ==========

    /// Keep the value only if `predicate` holds.
    ///
    /// The predicate is not evaluated on an empty optional.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Optional(self.0.filter(predicate))
    }

    /// Transform the contained value.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(f))
    }

    /// Transform the contained value with a function that may itself
    /// produce nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullstream::Optional;
    ///
    /// let parsed = Optional::of("42").flat_map(|s| Optional::of_nullable(s.parse::<i32>().ok()));
    /// assert_eq!(parsed, Optional::of(42));
    ///
    /// let bad = Optional::of("x").flat_map(|s| Optional::of_nullable(s.parse::<i32>().ok()));
    /// assert!(bad.is_empty());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.0 {
            Some(value) => f(value),
            None => Optional::empty(),
        }
    }

    /// Run `consumer` on the value if present.
    pub fn if_present<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.0 {
            consumer(value);
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
