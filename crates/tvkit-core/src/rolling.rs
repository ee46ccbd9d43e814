//! Rolling-window primitives.
//!
//! These are the low-level building blocks the moving-average engine and the
//! indicators are composed from. Every function tolerates a contiguous
//! leading run of NaN in its input (the warm-up prefix of an upstream
//! stage): the window starts after the prefix and the output stays NaN until
//! the window is full, so warm-up lengths accumulate across staged
//! computations without any bookkeeping at the call sites.

use crate::num::TaFloat;
use crate::series::Series;

/// Position of the first defined value, or `data.len()` when none exists.
fn valid_start<T: TaFloat>(data: &[T]) -> usize {
    data.iter().position(|x| !x.is_nan()).unwrap_or(data.len())
}

/// Compute the rolling arithmetic mean over a trailing window.
///
/// The first `window - 1` defined positions (after any inherited NaN
/// prefix) are NaN.
///
/// # Example
///
/// ```rust
/// use tvkit_core::rolling::rolling_mean;
///
/// let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let result = rolling_mean(&data, 3);
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0); // (1+2+3)/3
/// assert_eq!(result[4], 4.0); // (3+4+5)/3
/// ```
#[must_use]
pub fn rolling_mean<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if data.is_empty() || window == 0 {
        return Series::new();
    }

    let start = valid_start(data);
    let valid = &data[start..];
    let mut result = vec![T::NAN; data.len()];

    if valid.len() >= window {
        let mut sum = T::ZERO;
        for &x in &valid[..window] {
            sum = sum + x;
        }
        result[start + window - 1] = sum / <T as TaFloat>::from_usize(window);

        // Sliding window
        for i in window..valid.len() {
            sum = sum - valid[i - window] + valid[i];
            result[start + i] = sum / <T as TaFloat>::from_usize(window);
        }
    }

    Series::from_vec(result)
}

/// Compute the rolling standard deviation over a trailing window.
///
/// Uses the sample convention (`ddof = 1`) expected by Bollinger Bands;
/// pass `ddof = 0` for the population deviation.
#[must_use]
pub fn rolling_std<T: TaFloat>(data: &[T], window: usize, ddof: usize) -> Series<T> {
    if data.is_empty() || window == 0 {
        return Series::new();
    }
    if window <= ddof {
        // No degrees of freedom left; pandas leaves the whole column NaN.
        return Series::nan(data.len());
    }

    let start = valid_start(data);
    let valid = &data[start..];
    let means = rolling_mean(valid, window);
    let mut result = vec![T::NAN; data.len()];
    let divisor = <T as TaFloat>::from_usize(window - ddof);

    for i in (window.saturating_sub(1))..valid.len() {
        let mean = means[i];
        let mut sum_sq = T::ZERO;
        for &x in &valid[i + 1 - window..=i] {
            let dev = x - mean;
            sum_sq = sum_sq + dev * dev;
        }
        result[start + i] = (sum_sq / divisor).sqrt();
    }

    Series::from_vec(result)
}

/// Compute the rolling mean absolute deviation over a trailing window.
///
/// Each window's deviation is measured from that window's own mean.
#[must_use]
pub fn rolling_mad<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    if data.is_empty() || window == 0 {
        return Series::new();
    }

    let start = valid_start(data);
    let valid = &data[start..];
    let means = rolling_mean(valid, window);
    let mut result = vec![T::NAN; data.len()];

    for i in (window.saturating_sub(1))..valid.len() {
        let mean = means[i];
        let mut sum_abs = T::ZERO;
        for &x in &valid[i + 1 - window..=i] {
            sum_abs = sum_abs + (x - mean).abs();
        }
        result[start + i] = sum_abs / <T as TaFloat>::from_usize(window);
    }

    Series::from_vec(result)
}

/// Compute the rolling maximum over a trailing window.
#[must_use]
pub fn rolling_max<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    rolling_extreme(data, window, |a, b| if b > a { b } else { a })
}

/// Compute the rolling minimum over a trailing window.
#[must_use]
pub fn rolling_min<T: TaFloat>(data: &[T], window: usize) -> Series<T> {
    rolling_extreme(data, window, |a, b| if b < a { b } else { a })
}

fn rolling_extreme<T: TaFloat>(data: &[T], window: usize, pick: impl Fn(T, T) -> T) -> Series<T> {
    if data.is_empty() || window == 0 {
        return Series::new();
    }

    let start = valid_start(data);
    let valid = &data[start..];
    let mut result = vec![T::NAN; data.len()];

    for i in (window.saturating_sub(1))..valid.len() {
        let mut extreme = valid[i + 1 - window];
        for &x in &valid[i + 2 - window..=i] {
            extreme = pick(extreme, x);
        }
        result[start + i] = extreme;
    }

    Series::from_vec(result)
}
