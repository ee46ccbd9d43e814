//! Numeric type abstractions for indicator computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! so that series operations and indicators can be written generically.

use num_traits::{Float, FromPrimitive, ToPrimitive};
use serde::{de::DeserializeOwned, Serialize};

/// Trait for floating-point types used in indicator calculations.
///
/// This trait provides a common interface for `f32` and `f64`. Absent values
/// in a derived series are always represented by [`TaFloat::NAN`]; a value is
/// "defined" exactly when it is not NaN.
///
/// # Example
///
/// ```rust
/// use tvkit_core::TaFloat;
///
/// fn oscillator_scale<T: TaFloat>(ratio: T) -> T {
///     T::HUNDRED - T::HUNDRED / (T::ONE + ratio)
/// }
///
/// assert_eq!(oscillator_scale(1.0_f64), 50.0);
/// ```
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + Serialize + DeserializeOwned + 'static
{
    /// Not-a-number value, used as the absent-value sentinel.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Hundred value, used by percentage-scaled oscillators.
    const HUNDRED: Self;

    /// Convert from `f64`, possibly losing precision for `f32`.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is defined (not NaN) and finite.
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl TaFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
