//! Bollinger Bands and the Bollinger Trend oscillator.

use serde::{Deserialize, Serialize};
use tvkit_core::align::{DistanceMethod, DynamicTimeWarping};
use tvkit_core::error::{Result, TaError};
use tvkit_core::frame::Frame;
use tvkit_core::num::TaFloat;
use tvkit_core::rolling::rolling_std;
use tvkit_core::series::Series;

use crate::ma::MaMethod;

/// The three Bollinger band lines.
#[derive(Clone, Debug)]
pub struct BollingerBands<T: TaFloat> {
    /// The chosen moving average of the source.
    pub basis: Series<T>,
    /// Basis plus the scaled deviation.
    pub upper: Series<T>,
    /// Basis minus the scaled deviation.
    pub lower: Series<T>,
}

impl<T: TaFloat> BollingerBands<T> {
    /// Render the bands as a three-column frame.
    ///
    /// # Errors
    ///
    /// Propagates frame construction failures; the columns share one
    /// length, so this only fails if that invariant is broken.
    pub fn to_frame(&self) -> Result<Frame<T>> {
        Frame::from_columns([
            ("basis", self.basis.clone()),
            ("upper", self.upper.clone()),
            ("lower", self.lower.clone()),
        ])
    }
}

/// Compute Bollinger Bands.
///
/// The basis is the chosen moving average over `length`; the deviation is
/// `mult` times the rolling sample standard deviation over the same window.
#[must_use]
pub fn bollinger_bands<T: TaFloat>(
    source: &Series<T>,
    length: usize,
    mult: T,
    ma_method: MaMethod,
) -> BollingerBands<T> {
    let basis = ma_method.apply(source.as_slice(), length);
    let deviation = rolling_std(source.as_slice(), length, 1).map(|sd| mult * sd);

    let upper = basis.zip_with(&deviation, |base, dev| base + dev);
    let lower = basis.zip_with(&deviation, |base, dev| base - dev);

    BollingerBands {
        basis,
        upper,
        lower,
    }
}

/// How the short- and long-window band pairs are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdevMethod {
    /// Short band minus long band.
    #[default]
    Absolute,
    /// Short band divided by long band.
    Ratio,
    /// DTW-aligned ratio distance of each pair.
    Dtw,
}

impl StdevMethod {
    /// Parse a wire-level `stdev_method` selector string.
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
                "stdev_method",
                "'absolute', 'ratio', or 'dtw'",
                value,
            )),
        }
    }

    fn combine<T: TaFloat>(self, short: &Series<T>, long: &Series<T>) -> Series<T> {
        match self {
            Self::Absolute => short.zip_with(long, |s, l| s - l),
            Self::Ratio => short.zip_with(long, |s, l| s / l),
            Self::Dtw => {
                DynamicTimeWarping::new(short, long).distance(DistanceMethod::Ratio, true)
            }
        }
    }
}

impl core::str::FromStr for StdevMethod {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// How the band differences are folded into the final trend line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDiffMethod {
    /// `(lowerDiff - upperDiff) / middle * 100`.
    #[default]
    Normal,
    /// `(lowerDiff - upperDiff) - middle * 100`.
    Absolute,
    /// `(lowerDiff / upperDiff) / middle * 100`.
    Ratio,
    /// DTW-ratio alignment of the band-diff quotient against the middle.
    Dtw,
}

impl TrendDiffMethod {
    /// Parse a wire-level `diff_method` selector string.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::InvalidArgument`] naming the offending value and
    /// the allowed set.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "normal" => Ok(Self::Normal),
            "absolute" => Ok(Self::Absolute),
            "ratio" => Ok(Self::Ratio),
            "dtw" => Ok(Self::Dtw),
            _ => Err(TaError::invalid_argument(
                "diff_method",
                "'normal', 'absolute', 'ratio', or 'dtw'",
                value,
            )),
        }
    }
}

impl core::str::FromStr for TrendDiffMethod {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Which window's basis becomes the middle reference line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasedOn {
    /// The short-window basis.
    #[default]
    ShortLength,
    /// The long-window basis.
    LongLength,
}

impl BasedOn {
    /// Parse a wire-level `based_on` selector string.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::InvalidArgument`] naming the offending value and
    /// the allowed set.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "short_length" => Ok(Self::ShortLength),
            "long_length" => Ok(Self::LongLength),
            _ => Err(TaError::invalid_argument(
                "based_on",
                "'short_length' or 'long_length'",
                value,
            )),
        }
    }
}

impl core::str::FromStr for BasedOn {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Compute the Bollinger Trend oscillator.
///
/// Bands are computed at the short and long windows; the upper bands and
/// the lower bands are each compared per `stdev_method`; the resulting
/// band differences are folded against the `based_on` basis per
/// `diff_method`. The DTW variants align the compared series over their
/// common defined span first, so the output's absent prefix covers at
/// least the short window's warm-up.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn bollinger_trend<T: TaFloat>(
    source: &Series<T>,
    short_length: usize,
    long_length: usize,
    mult: T,
    ma_method: MaMethod,
    stdev_method: StdevMethod,
    diff_method: TrendDiffMethod,
    based_on: BasedOn,
) -> Series<T> {
    let short = bollinger_bands(source, short_length, mult, ma_method);
    let long = bollinger_bands(source, long_length, mult, ma_method);

    let upper_diff = stdev_method.combine(&short.upper, &long.upper);
    let lower_diff = stdev_method.combine(&short.lower, &long.lower);

    let middle = match based_on {
        BasedOn::ShortLength => &short.basis,
        BasedOn::LongLength => &long.basis,
    };

    match diff_method {
        TrendDiffMethod::Normal => lower_diff
            .zip_with(&upper_diff, |lo, up| lo - up)
            .zip_with(middle, |spread, mid| spread / mid * T::HUNDRED),
        TrendDiffMethod::Absolute => lower_diff
            .zip_with(&upper_diff, |lo, up| lo - up)
            .zip_with(middle, |spread, mid| spread - mid * T::HUNDRED),
        TrendDiffMethod::Ratio => lower_diff
            .zip_with(&upper_diff, |lo, up| lo / up)
            .zip_with(middle, |quotient, mid| quotient / mid * T::HUNDRED),
        TrendDiffMethod::Dtw => {
            let quotient =
                DynamicTimeWarping::new(&lower_diff, &upper_diff).distance(DistanceMethod::Ratio, true);
            let aligned =
                DynamicTimeWarping::new(&quotient, middle).distance(DistanceMethod::Ratio, true);
            let scale = <T as TaFloat>::from_usize(10_000);
            aligned.map(|v| v * scale)
        }
    }
}
