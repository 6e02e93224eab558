//! Numeric range source with inferred direction.

use super::Source;

/// Numeric types a [`RangeSource`] can walk over.
///
/// Implemented for every primitive integer and float type.
pub trait RangeStep: Copy + PartialOrd {
    /// The default step size.
    fn unit() -> Self;

    /// The absolute value of a step.
    fn magnitude(self) -> Self;

    /// Returns `true` for a step that would never move.
    fn is_zero(self) -> bool;

    /// `self + step`, or `None` when the result is not representable.
    fn forward(self, step: Self) -> Option<Self>;

    /// `self - step`, or `None` when the result is not representable.
    fn backward(self, step: Self) -> Option<Self>;
}

macro_rules! impl_range_step_signed {
    ($($t:ty),*) => {
        $(
            impl RangeStep for $t {
                #[inline]
                fn unit() -> Self {
                    1
                }

                #[inline]
                fn magnitude(self) -> Self {
                    if self < 0 {
                        self.checked_neg().unwrap_or(<$t>::MAX)
                    } else {
                        self
                    }
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn forward(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                #[inline]
                fn backward(self, step: Self) -> Option<Self> {
                    self.checked_sub(step)
                }
            }
        )*
    };
}

macro_rules! impl_range_step_unsigned {
    ($($t:ty),*) => {
        $(
            impl RangeStep for $t {
                #[inline]
                fn unit() -> Self {
                    1
                }

                #[inline]
                fn magnitude(self) -> Self {
                    self
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn forward(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                #[inline]
                fn backward(self, step: Self) -> Option<Self> {
                    self.checked_sub(step)
                }
            }
        )*
    };
}

macro_rules! impl_range_step_float {
    ($($t:ty),*) => {
        $(
            impl RangeStep for $t {
                #[inline]
                fn unit() -> Self {
                    1.0
                }

                #[inline]
                fn magnitude(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0.0
                }

                #[inline]
                fn forward(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }

                #[inline]
                fn backward(self, step: Self) -> Option<Self> {
                    Some(self - step)
                }
            }
        )*
    };
}

impl_range_step_signed!(i8, i16, i32, i64, i128, isize);
impl_range_step_unsigned!(u8, u16, u32, u64, u128, usize);
impl_range_step_float!(f32, f64);

/// A finite numeric range from `start` (inclusive) to `end` (exclusive).
///
/// Direction is inferred: ascending when `start <= end`, descending otherwise.
/// The sign of a caller-supplied step is ignored and replaced by the
/// direction's sign, so `-2` and `2` walk an ascending range identically.
/// A zero step falls back to the unit step.
///
/// # Example
///
/// ```rust
/// use pullstream::source::{RangeSource, Source};
///
/// let mut odd = RangeSource::with_step(1, 10, -2);
/// let mut out = Vec::new();
/// while odd.has_next() {
///     out.extend(odd.get());
/// }
/// assert_eq!(out, vec![1, 3, 5, 7, 9]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RangeSource<T> {
    next: Option<T>,
    end: T,
    step: T,
    ascending: bool,
}

impl<T: RangeStep> RangeSource<T> {
    /// Range with the unit step.
    pub fn new(start: T, end: T) -> Self {
        Self::with_step(start, end, T::unit())
    }

    /// Range with an explicit step size.
    pub fn with_step(start: T, end: T, step: T) -> Self {
        let step = if step.is_zero() {
            T::unit()
        } else {
            step.magnitude()
        };
        Self {
            next: Some(start),
            end,
            step,
            ascending: start <= end,
        }
    }

    /// Returns `true` if this range counts upward.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl<T: RangeStep> Source for RangeSource<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        match self.next {
            Some(next) if self.ascending => next < self.end,
            Some(next) => next > self.end,
            None => false,
        }
    }

    fn get(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = if self.ascending {
            current.forward(self.step)
        } else {
            current.backward(self.step)
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T: RangeStep>(mut range: RangeSource<T>) -> Vec<T> {
        let mut out = Vec::new();
        while range.has_next() {
            out.extend(range.get());
        }
        out
    }

    #[test]
    fn test_empty_when_start_equals_end() {
        assert!(drain(RangeSource::new(0, 0)).is_empty());
        assert!(drain(RangeSource::new(-4, -4)).is_empty());
    }

    #[test]
    fn test_ascending_default_step() {
        assert_eq!(drain(RangeSource::new(0, 4)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_descending_default_step() {
        let range = RangeSource::new(5, 0);
        assert!(!range.is_ascending());
        assert_eq!(drain(range), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_step_sign_is_normalised() {
        assert_eq!(
            drain(RangeSource::with_step(1, 10, -2)),
            drain(RangeSource::with_step(1, 10, 2))
        );
        assert_eq!(drain(RangeSource::with_step(10, 0, 5)), vec![10, 5]);
        assert_eq!(drain(RangeSource::with_step(0, 12, -5)), vec![0, 5, 10]);
    }

    #[test]
    fn test_zero_step_uses_unit() {
        assert_eq!(drain(RangeSource::with_step(0, 3, 0)), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsigned_descending() {
        assert_eq!(drain(RangeSource::new(3u8, 0)), vec![3, 2, 1]);
    }

    #[test]
    fn test_overflow_ends_range() {
        assert_eq!(drain(RangeSource::with_step(250u8, 255, 10)), vec![250]);
        assert_eq!(
            drain(RangeSource::with_step(i8::MIN + 1, i8::MIN, 100)),
            vec![i8::MIN + 1]
        );
    }

    #[test]
    fn test_float_range() {
        assert_eq!(drain(RangeSource::with_step(0.0, 1.0, 0.25)), vec![0.0, 0.25, 0.5, 0.75]);
    }
}
