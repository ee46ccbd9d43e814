//! Fast Stochastic Oscillator.

use tvkit_core::num::TaFloat;
use tvkit_core::rolling::{rolling_max, rolling_min};
use tvkit_core::series::Series;

/// Compute the raw (fast) stochastic oscillator.
///
/// `100 * (source - lowestLow) / (highestHigh - lowestLow)` over a trailing
/// window of `length`. A window with zero range yields 0/0 and propagates
/// NaN.
#[must_use]
pub fn stoch<T: TaFloat>(
    source: &Series<T>,
    high: &Series<T>,
    low: &Series<T>,
    length: usize,
) -> Series<T> {
    let lowest_low = rolling_min(low.as_slice(), length);
    let highest_high = rolling_max(high.as_slice(), length);

    let numerator = source.zip_with(&lowest_low, |price, lo| price - lo);
    let range = highest_high.zip_with(&lowest_low, |hi, lo| hi - lo);

    numerator.zip_with(&range, |num, span| T::HUNDRED * num / span)
}
