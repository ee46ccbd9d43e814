//! Moving Average Convergence Divergence (MACD).

use serde::{Deserialize, Serialize};
use tvkit_core::align::{DistanceMethod, DynamicTimeWarping};
use tvkit_core::error::{Result, TaError};
use tvkit_core::frame::Frame;
use tvkit_core::num::TaFloat;
use tvkit_core::series::Series;

use crate::ma::MaMethod;

/// How the two moving averages (and the histogram pair) are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacdDiffMethod {
    /// Plain subtraction.
    #[default]
    Absolute,
    /// Division.
    Ratio,
    /// DTW-aligned absolute distance.
    Dtw,
}

impl MacdDiffMethod {
    /// Parse a wire-level `diff_method` selector string.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::InvalidArgument`] naming the offending value and
    /// the allowed set.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "absolute" => Ok(Self::Absolute),
            "ratio" => Ok(Self::Ratio),
            "dtw" => Ok(Self::Dtw),
            _ => Err(TaError::invalid_argument(
                "diff_method",
                "'absolute', 'ratio', or 'dtw'",
                value,
            )),
        }
    }

    fn combine<T: TaFloat>(self, a: &Series<T>, b: &Series<T>) -> Series<T> {
        match self {
            Self::Absolute => a.zip_with(b, |x, y| x - y),
            Self::Ratio => a.zip_with(b, |x, y| x / y),
            Self::Dtw => DynamicTimeWarping::new(a, b).distance(DistanceMethod::Absolute, true),
        }
    }
}

impl core::str::FromStr for MacdDiffMethod {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The three MACD series.
#[derive(Clone, Debug)]
pub struct MacdOutput<T: TaFloat> {
    /// Fast MA combined with slow MA.
    pub macd: Series<T>,
    /// Smoothed MACD line.
    pub signal: Series<T>,
    /// MACD combined with the signal line.
    pub histogram: Series<T>,
}

impl<T: TaFloat> MacdOutput<T> {
    /// Render the output as a three-column frame.
    ///
    /// # Errors
    ///
    /// Propagates frame construction failures; the columns share one
    /// length, so this only fails if that invariant is broken.
    pub fn to_frame(&self) -> Result<Frame<T>> {
        Frame::from_columns([
            ("macd", self.macd.clone()),
            ("signal", self.signal.clone()),
            ("histogram", self.histogram.clone()),
        ])
    }
}

/// Compute the Moving Average Convergence Divergence indicator.
///
/// The MACD line combines a fast and a slow moving average of the source
/// (strategy per `ma_method`, combination per `diff_method`); the signal
/// line smooths the MACD line with `signal_method`; the histogram combines
/// the MACD and signal lines with the same `diff_method` family.
///
/// Sources that are frames rather than single series must pass through
/// [`Frame::require_series`], which rejects table-shaped input.
#[must_use]
pub fn macd<T: TaFloat>(
    source: &Series<T>,
    fast_length: usize,
    slow_length: usize,
    signal_length: usize,
    diff_method: MacdDiffMethod,
    ma_method: MaMethod,
    signal_method: MaMethod,
) -> MacdOutput<T> {
    let fast_ma = ma_method.apply(source.as_slice(), fast_length);
    let slow_ma = ma_method.apply(source.as_slice(), slow_length);

    let macd_line = diff_method.combine(&fast_ma, &slow_ma);
    let signal_line = signal_method.apply(macd_line.as_slice(), signal_length);
    let histogram = diff_method.combine(&macd_line, &signal_line);

    MacdOutput {
        macd: macd_line,
        signal: signal_line,
        histogram,
    }
}
