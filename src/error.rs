//! Error types for [`Optional`](crate::Optional) misuse.
//!
//! Pipeline evaluation itself never fails: an exhausted stream reports
//! `has_next() == false` and yields absent values. The only failures in this
//! crate come from unwrapping or constructing an `Optional` incorrectly.

/// Error returned when an [`Optional`](crate::Optional) is used in a way its
/// contents do not allow.
///
/// # Examples
///
/// ```rust
/// use pullstream::{Optional, OptionalError};
///
/// let err = Optional::<i32>::empty().get().unwrap_err();
/// assert_eq!(err, OptionalError::NoSuchElement);
///
/// let err = Optional::<i32>::try_of(None).unwrap_err();
/// assert_eq!(err, OptionalError::NullPointer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalError {
    /// A present value was required at construction but none was given.
    NullPointer,
    /// A value was requested from an empty optional.
    NoSuchElement,
}

impl OptionalError {
    /// Returns true if this error came from constructing an optional.
    pub fn is_null_pointer(&self) -> bool {
        matches!(self, Self::NullPointer)
    }

    /// Returns true if this error came from unwrapping an empty optional.
    pub fn is_no_such_element(&self) -> bool {
        matches!(self, Self::NoSuchElement)
    }
}

impl std::fmt::Display for OptionalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullPointer => write!(f, "optional constructed from an absent value"),
            Self::NoSuchElement => write!(f, "no value present"),
        }
    }
}

impl std::error::Error for OptionalError {}
