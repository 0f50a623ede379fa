use core::fmt;

use num_traits::Float;

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Trait for numeric types that can be used as the values of a `StepRange`.
///
/// This trait is sealed and only implemented for `f32` and `f64`. Ranges are
/// plain floating-point progressions: no operation rounds its inputs, and
/// infinities or NaN produced by the arithmetic flow through unchanged.
///
/// | Type  | Precision | Size of `StepRange<T>` fields |
/// |-------|-----------|-------------------------------|
/// | `f32` | single    | 5 x 4 bytes + id              |
/// | `f64` | double    | 5 x 8 bytes + id              |
pub trait RangeValue: private::Sealed + Float + fmt::Debug + fmt::Display + 'static {
    /// Index returned by [`StepRange::index_of`](crate::StepRange::index_of)
    /// for values that do not sit on the step grid: `-1`.
    const NOT_ON_GRID: Self;

    /// Rounds `self` to the nearest integer, with halves going toward
    /// positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
    #[inline]
    fn round_half_up(self) -> Self {
        let floor = self.floor();
        if self - floor >= Self::half() {
            floor + Self::one()
        } else {
            floor
        }
    }

    /// Returns `0.5`.
    fn half() -> Self;

    /// Returns `2`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Replaces a zero or NaN step with `1`.
    #[inline]
    fn or_one(self) -> Self {
        if self == Self::zero() || self.is_nan() {
            Self::one()
        } else {
            self
        }
    }

    /// Returns the larger value, or NaN if either value is NaN.
    #[inline]
    fn max_nan(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            Self::nan()
        } else {
            self.max(other)
        }
    }

    /// Returns the smaller value, or NaN if either value is NaN.
    #[inline]
    fn min_nan(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            Self::nan()
        } else {
            self.min(other)
        }
    }

    /// Converts to a member count, saturating at zero for negative or NaN values.
    #[inline]
    fn to_count(self) -> usize {
        if self > Self::zero() {
            self.to_usize().unwrap_or(usize::MAX)
        } else {
            0
        }
    }
}

impl RangeValue for f32 {
    const NOT_ON_GRID: Self = -1.0;

    #[inline]
    fn half() -> Self {
        0.5
    }
}

impl RangeValue for f64 {
    const NOT_ON_GRID: Self = -1.0;

    #[inline]
    fn half() -> Self {
        0.5
    }
}
