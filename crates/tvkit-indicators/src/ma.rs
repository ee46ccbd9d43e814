//! The moving-average engine.
//!
//! Four primitives with the exact warm-up and seeding semantics of the
//! reference charting platform:
//!
//! - [`sma`] - rolling arithmetic mean
//! - [`ema`] - exponential average seeded by the first window's SMA
//! - [`sema`] - a chain of EMAs combined with an un-lag correction
//!   (`smooth = 2` is the conventional "dema", `smooth = 3` is "tema")
//! - [`rma`] - Wilder's smoothing (`alpha = 1/length`), with a choice of
//!   recurrence strategy via [`RmaMethod`]
//!
//! Indicators select a primitive through [`MaMethod`], a closed set that
//! rejects unknown wire-level strings synchronously.

use serde::{Deserialize, Serialize};
use tvkit_core::error::{Result, TaError};
use tvkit_core::num::TaFloat;
use tvkit_core::rolling::rolling_mean;
use tvkit_core::series::Series;

fn valid_start<T: TaFloat>(data: &[T]) -> usize {
    data.iter().position(|x| !x.is_nan()).unwrap_or(data.len())
}

/// Compute the Simple Moving Average.
///
/// The first `length - 1` defined positions (after any inherited warm-up
/// prefix) are NaN.
#[must_use]
pub fn sma<T: TaFloat>(source: &[T], length: usize) -> Series<T> {
    rolling_mean(source, length)
}

/// Compute the Exponential Moving Average.
///
/// Seeded with the SMA of the first `length` defined values, which becomes
/// the output at the window's last position; the recurrence
/// `ema[t] = alpha * x[t] + (1 - alpha) * ema[t-1]` with
/// `alpha = 2 / (length + 1)` runs forward from there.
///
/// # Example
///
/// ```rust
/// use tvkit_indicators::ma::ema;
///
/// let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let result = ema(&data, 3);
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0); // SMA seed
/// assert_eq!(result[3], 3.0); // 0.5 * 4 + 0.5 * 2
/// ```
#[must_use]
pub fn ema<T: TaFloat>(source: &[T], length: usize) -> Series<T> {
    if source.is_empty() || length == 0 {
        return Series::new();
    }

    let start = valid_start(source);
    let valid = &source[start..];
    let mut result = vec![T::NAN; source.len()];

    if valid.len() >= length {
        let alpha = T::TWO / <T as TaFloat>::from_usize(length + 1);
        let one_minus_alpha = T::ONE - alpha;

        let mut value = T::ZERO;
        for &x in &valid[..length] {
            value = value + x;
        }
        value = value / <T as TaFloat>::from_usize(length);
        result[start + length - 1] = value;

        for i in length..valid.len() {
            value = alpha * valid[i] + one_minus_alpha * value;
            result[start + i] = value;
        }
    }

    Series::from_vec(result)
}

/// Compute the Smoothed Exponential Moving Average.
///
/// A chain of `smooth` EMAs is computed, each applied to the previous
/// stage's output, then combined as
/// `stage[smooth] + smooth * (stage[1] - stage[smooth - 1])`.
/// With `smooth = 1` this degenerates to a plain EMA; `smooth = 3` yields
/// the classic `3*ema1 - 3*ema2 + ema3` triple EMA. Each chained stage adds
/// `length - 1` positions of warm-up, so the absent prefix grows to
/// `smooth * (length - 1)`.
#[must_use]
pub fn sema<T: TaFloat>(source: &[T], length: usize, smooth: usize) -> Series<T> {
    if source.is_empty() || length == 0 || smooth == 0 {
        return Series::new();
    }

    let mut stages: Vec<Series<T>> = Vec::with_capacity(smooth);
    stages.push(ema(source, length));
    for _ in 1..smooth {
        let next = ema(stages.last().expect("chain is non-empty").as_slice(), length);
        stages.push(next);
    }

    if smooth == 1 {
        return stages.pop().expect("chain is non-empty");
    }

    let first = &stages[0];
    let penultimate = &stages[smooth - 2];
    let last = &stages[smooth - 1];
    let factor = <T as TaFloat>::from_usize(smooth);

    let mut result = Vec::with_capacity(source.len());
    for i in 0..source.len() {
        result.push(last[i] + factor * (first[i] - penultimate[i]));
    }

    Series::from_vec(result)
}

/// Recurrence strategy for [`rma_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RmaMethod {
    /// Scalar-loop recurrence `rma[t] = alpha*x[t] + (1-alpha)*rma[t-1]`;
    /// reproduces the charting platform's first values exactly.
    #[default]
    Precise,
    /// Adjust-weighted exponential mean over the seed-concatenated series,
    /// matching `pandas.ewm(alpha=1/length).mean()`.
    PandasEquivalent,
}

impl RmaMethod {
    /// Parse a wire-level selector string.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::InvalidArgument`] naming the offending value and
    /// the allowed set.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "precise" => Ok(Self::Precise),
            "pandas-equivalent" => Ok(Self::PandasEquivalent),
            _ => Err(TaError::invalid_argument(
                "method",
                "'precise' or 'pandas-equivalent'",
                value,
            )),
        }
    }
}

impl core::str::FromStr for RmaMethod {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Compute Wilder's smoothed average with the default precise recurrence.
///
/// `alpha = 1/length`, seeded with the SMA of the first `length` defined
/// values.
#[must_use]
pub fn rma<T: TaFloat>(source: &[T], length: usize) -> Series<T> {
    rma_with(source, length, RmaMethod::Precise)
}

/// Compute Wilder's smoothed average with an explicit recurrence strategy.
///
/// Both strategies share the SMA seed; they differ only in how the values
/// after the seed are accumulated, and converge within floating tolerance
/// once the warm-up is past.
#[must_use]
pub fn rma_with<T: TaFloat>(source: &[T], length: usize, method: RmaMethod) -> Series<T> {
    if source.is_empty() || length == 0 {
        return Series::new();
    }

    let start = valid_start(source);
    let valid = &source[start..];
    let mut result = vec![T::NAN; source.len()];

    if valid.len() >= length {
        let alpha = T::ONE / <T as TaFloat>::from_usize(length);
        let one_minus_alpha = T::ONE - alpha;

        let mut seed = T::ZERO;
        for &x in &valid[..length] {
            seed = seed + x;
        }
        seed = seed / <T as TaFloat>::from_usize(length);
        result[start + length - 1] = seed;

        match method {
            RmaMethod::Precise => {
                let mut value = seed;
                for i in length..valid.len() {
                    value = alpha * valid[i] + one_minus_alpha * value;
                    result[start + i] = value;
                }
            }
            RmaMethod::PandasEquivalent => {
                // Adjust-weighted mean: y[t] = sum (1-a)^i x[t-i] / sum (1-a)^i,
                // over the virtual sequence [seed, x[length], x[length+1], ...].
                let mut numerator = seed;
                let mut denominator = T::ONE;
                for i in length..valid.len() {
                    numerator = valid[i] + one_minus_alpha * numerator;
                    denominator = T::ONE + one_minus_alpha * denominator;
                    result[start + i] = numerator / denominator;
                }
            }
        }
    }

    Series::from_vec(result)
}

/// The closed set of moving-average strategies indicators select from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaMethod {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    #[default]
    Ema,
    /// Double-smoothed EMA chain ([`sema`] with `smooth = 2`).
    Dema,
    /// Triple EMA ([`sema`] with `smooth = 3`).
    Tema,
    /// Wilder's smoothing (precise recurrence).
    Rma,
}

impl MaMethod {
    /// Parse a wire-level `ma_method` selector string.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::InvalidArgument`] naming the offending value and
    /// the allowed set:
    ///
    /// ```rust
    /// use tvkit_indicators::ma::MaMethod;
    ///
    /// let err = MaMethod::parse("xyz").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "ma_method must be 'sma', 'ema', 'dema', 'tema', or 'rma', got 'xyz'."
    /// );
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        Self::parse_as("ma_method", value)
    }

    /// Parse a selector that travels under a different parameter name
    /// (e.g. `signal_method`); the error message cites that name.
    pub fn parse_as(parameter: &str, value: &str) -> Result<Self> {
        match value {
            "sma" => Ok(Self::Sma),
            "ema" => Ok(Self::Ema),
            "dema" => Ok(Self::Dema),
            "tema" => Ok(Self::Tema),
            "rma" => Ok(Self::Rma),
            _ => Err(TaError::invalid_argument(
                parameter,
                "'sma', 'ema', 'dema', 'tema', or 'rma'",
                value,
            )),
        }
    }

    /// The wire-level name of this strategy.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Dema => "dema",
            Self::Tema => "tema",
            Self::Rma => "rma",
        }
    }

    /// Apply this strategy to a source slice.
    #[must_use]
    pub fn apply<T: TaFloat>(&self, source: &[T], length: usize) -> Series<T> {
        match self {
            Self::Sma => sma(source, length),
            Self::Ema => ema(source, length),
            Self::Dema => sema(source, length, 2),
            Self::Tema => sema(source, length, 3),
            Self::Rma => rma(source, length),
        }
    }
}

impl core::str::FromStr for MaMethod {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma_warm_up_length() {
        let data: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let result = sma(&data, 4);
        assert_eq!(result.nan_count(), 3);
        assert_eq!(result.first_valid_index(), Some(3));
    }

    #[test]
    fn test_ema_seed_equals_first_sma() {
        let data: [f64; 8] = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let sma_result = sma(&data, 5);
        let ema_result = ema(&data, 5);
        assert_eq!(ema_result[4], sma_result[4]);
    }

    #[test]
    fn test_ema_inherits_nan_prefix() {
        let data: [f64; 7] = [f64::NAN, f64::NAN, 1.0, 2.0, 3.0, 4.0, 5.0];
        let result = ema(&data, 3);
        assert_eq!(result.first_valid_index(), Some(4));
        assert_eq!(result[4], 2.0);
    }

    #[test]
    fn test_sema_smooth_one_is_ema() {
        let data: [f64; 10] = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0];
        let single = sema(&data, 3, 1);
        let plain = ema(&data, 3);
        for i in 0..data.len() {
            if plain[i].is_nan() {
                assert!(single[i].is_nan());
            } else {
                assert_relative_eq!(single[i], plain[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_sema_prefix_compounds() {
        let data: Vec<f64> = (1..=20).map(f64::from).collect();
        // smooth = 3 with length 4: prefix is 3 * (4 - 1) = 9
        let result = sema(&data, 4, 3);
        assert_eq!(result.first_valid_index(), Some(9));
    }

    #[test]
    fn test_tema_combination() {
        let data: Vec<f64> = (1..=20).map(f64::from).collect();
        let e1 = ema(&data, 4);
        let e2 = ema(e1.as_slice(), 4);
        let e3 = ema(e2.as_slice(), 4);
        let tema = sema(&data, 4, 3);

        for i in 9..data.len() {
            let expected = 3.0 * e1[i] - 3.0 * e2[i] + e3[i];
            assert_relative_eq!(tema[i], expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_rma_strategies_share_seed() {
        let data: [f64; 9] = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0];
        let precise = rma_with(&data, 5, RmaMethod::Precise);
        let pandas = rma_with(&data, 5, RmaMethod::PandasEquivalent);
        assert_eq!(precise[4], pandas[4]);
        // Diverging after the seed, but in the same direction
        assert!(precise[5] != pandas[5]);
    }

    #[test]
    fn test_rma_method_parse() {
        assert_eq!(RmaMethod::parse("precise").unwrap(), RmaMethod::Precise);
        assert_eq!(
            RmaMethod::parse("pandas-equivalent").unwrap(),
            RmaMethod::PandasEquivalent
        );

        let err = RmaMethod::parse("numpy").unwrap_err();
        assert_eq!(
            err.to_string(),
            "method must be 'precise' or 'pandas-equivalent', got 'numpy'."
        );
    }

    #[test]
    fn test_ma_method_parse_and_roundtrip() {
        for name in ["sma", "ema", "dema", "tema", "rma"] {
            let method = MaMethod::parse(name).unwrap();
            assert_eq!(method.as_str(), name);
        }

        let err = MaMethod::parse("xyz").unwrap_err();
        assert_eq!(
            err.to_string(),
            "ma_method must be 'sma', 'ema', 'dema', 'tema', or 'rma', got 'xyz'."
        );
    }

    #[test]
    fn test_ma_method_parse_as_cites_parameter() {
        let err = MaMethod::parse_as("signal_method", "median").unwrap_err();
        assert_eq!(
            err.to_string(),
            "signal_method must be 'sma', 'ema', 'dema', 'tema', or 'rma', got 'median'."
        );
    }

    #[test]
    fn test_apply_dispatch() {
        let data: Vec<f64> = (1..=15).map(f64::from).collect();
        let direct = sema(&data, 4, 2);
        let dispatched = MaMethod::Dema.apply(&data, 4);
        for i in 0..data.len() {
            if direct[i].is_nan() {
                assert!(dispatched[i].is_nan());
            } else {
                assert_eq!(direct[i], dispatched[i]);
            }
        }
    }

    #[test]
    fn test_short_input_is_all_nan() {
        let data: [f64; 3] = [1.0, 2.0, 3.0];
        assert_eq!(ema(&data, 5).nan_count(), 3);
        assert_eq!(rma(&data, 5).nan_count(), 3);
    }
}
