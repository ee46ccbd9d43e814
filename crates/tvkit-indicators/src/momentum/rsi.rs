//! Relative Strength Index (RSI).
//!
//! A momentum oscillator measuring the speed and magnitude of recent price
//! changes, scaled to [0, 100].

use tvkit_core::num::TaFloat;
use tvkit_core::series::Series;

use crate::ma::MaMethod;

/// Compute the Relative Strength Index.
///
/// Upward and downward first differences are separated (the opposite side
/// clipped to zero), each smoothed independently with the chosen moving
/// average, and combined as `RSI = 100 - 100 / (1 + up/down)`.
///
/// A window with no losses drives the ratio to infinity and the output to
/// 100; a window with neither gains nor losses yields 0/0 and the output
/// stays NaN, per the library-wide rule that numerical degeneracy
/// propagates instead of raising.
///
/// # Example
///
/// ```rust
/// use tvkit_core::Series;
/// use tvkit_indicators::ma::MaMethod;
/// use tvkit_indicators::momentum::rsi;
///
/// let closes: Series<f64> = (1..=20).map(f64::from).collect();
/// let result = rsi(&closes, 14, MaMethod::Rma);
/// // Monotonically rising prices pin the oscillator at 100.
/// assert_eq!(result[19], 100.0);
/// ```
#[must_use]
pub fn rsi<T: TaFloat>(source: &Series<T>, periods: usize, ma_method: MaMethod) -> Series<T> {
    let change = source.diff(1);
    let upward = change.map(clip_positive);
    let downward = change.map(|d| clip_positive(-d));

    let smoothed_up = ma_method.apply(upward.as_slice(), periods);
    let smoothed_down = ma_method.apply(downward.as_slice(), periods);

    let relative_strength = smoothed_up.zip_with(&smoothed_down, |up, down| up / down);
    relative_strength.map(|rs| T::HUNDRED - T::HUNDRED / (T::ONE + rs))
}

/// `max(value, 0)` that keeps NaN absent instead of clipping it to zero.
fn clip_positive<T: TaFloat>(value: T) -> T {
    if value.is_nan() || value > T::ZERO {
        value
    } else {
        T::ZERO
    }
}
