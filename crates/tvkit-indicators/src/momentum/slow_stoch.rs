//! Slow Stochastic Oscillator.

use tvkit_core::num::TaFloat;
use tvkit_core::series::Series;

use crate::ma::MaMethod;
use crate::momentum::stoch::stoch;

/// The %K and %D lines of the slow stochastic.
#[derive(Clone, Debug)]
pub struct SlowStochOutput<T: TaFloat> {
    /// Smoothed raw stochastic.
    pub k: Series<T>,
    /// Smoothed %K.
    pub d: Series<T>,
}

/// Compute the Slow Stochastic Oscillator.
///
/// %K is the chosen moving average of the raw stochastic over
/// `k_smoothing`; %D is the same average applied to %K over `d_smoothing`.
/// With `k_smoothing = 1` %K degenerates to the raw stochastic.
#[must_use]
pub fn slow_stoch<T: TaFloat>(
    source: &Series<T>,
    high: &Series<T>,
    low: &Series<T>,
    k_length: usize,
    k_smoothing: usize,
    d_smoothing: usize,
    ma_method: MaMethod,
) -> SlowStochOutput<T> {
    let raw = stoch(source, high, low, k_length);
    let k = ma_method.apply(raw.as_slice(), k_smoothing);
    let d = ma_method.apply(k.as_slice(), d_smoothing);

    SlowStochOutput { k, d }
}
