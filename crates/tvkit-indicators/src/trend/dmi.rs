//! Directional Movement Index (DMI) and Average Directional Index (ADX).

use tvkit_core::error::Result;
use tvkit_core::frame::Frame;
use tvkit_core::num::TaFloat;
use tvkit_core::ohlc::{resolve_ohlc, OhlcOverrides};
use tvkit_core::series::Series;

use crate::ma::rma;

/// ADX with its two directional lines.
#[derive(Clone, Debug)]
pub struct AdxOutput<T: TaFloat> {
    /// Average Directional Index.
    pub adx: Series<T>,
    /// Positive directional indicator (+DI).
    pub plus_di: Series<T>,
    /// Negative directional indicator (-DI).
    pub minus_di: Series<T>,
}

/// The secondary pair derived from the directional indicators.
#[derive(Clone, Debug)]
pub struct DiDifference<T: TaFloat> {
    /// `+DI - -DI`.
    pub delta: Series<T>,
    /// `+DI / -DI`.
    pub ratio: Series<T>,
}

/// Directional movement calculator over a price frame.
///
/// High, low and close columns are resolved once at construction through
/// the shared OHLC resolver (override name, then lowercase, then TitleCase
/// convention names).
///
/// # Formula
///
/// TR = max(high - low, |high - prevClose|, |low - prevClose|)
/// +DM = diff(high) where it exceeds both -diff(low) and zero, else 0
/// -DM = -diff(low) where it exceeds both diff(high) and zero, else 0
/// +DI = 100 * RMA(+DM) / RMA(TR), -DI analogous
/// ADX = 100 * RMA(|+DI - -DI| / (+DI + -DI))
#[derive(Clone, Debug)]
pub struct Dmi<T: TaFloat> {
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
}

impl<T: TaFloat> Dmi<T> {
    /// Resolve the price columns of `frame` and build the calculator.
    ///
    /// # Errors
    ///
    /// Returns [`tvkit_core::TaError::MissingColumns`] when high, low or
    /// close cannot be resolved.
    pub fn new(frame: &Frame<T>, overrides: &OhlcOverrides<'_>) -> Result<Self> {
        let (high, low, close) = resolve_ohlc(frame, overrides).require_hlc()?;
        Ok(Self {
            high: high.clone(),
            low: low.clone(),
            close: close.clone(),
        })
    }

    /// Compute the True Range.
    ///
    /// The first bar has no previous close and stays NaN.
    #[must_use]
    pub fn true_range(&self) -> Series<T> {
        let len = self.high.len().min(self.low.len()).min(self.close.len());
        let mut result = Series::with_capacity(len);
        if len == 0 {
            return result;
        }

        result.push(T::NAN);
        for i in 1..len {
            let prev_close = self.close[i - 1];
            let hl = self.high[i] - self.low[i];
            let hc = (self.high[i] - prev_close).abs();
            let lc = (self.low[i] - prev_close).abs();
            result.push(hl.max(hc).max(lc));
        }

        result
    }

    /// Compute ADX and the directional indicators.
    ///
    /// All three use Wilder's smoothing; the DX denominator is guarded so
    /// that a zero directional sum contributes 0 rather than NaN.
    #[must_use]
    pub fn adx(&self, adx_smoothing: usize, di_length: usize) -> AdxOutput<T> {
        let smoothed_tr = rma(self.true_range().as_slice(), di_length);

        let up = self.high.diff(1);
        let down = self.low.diff(1).map(|d| -d);

        let plus_dm = up.zip_with(&down, directional_movement);
        let minus_dm = down.zip_with(&up, directional_movement);

        let plus_di = rma(plus_dm.as_slice(), di_length)
            .zip_with(&smoothed_tr, |dm, tr| T::HUNDRED * dm / tr);
        let minus_di = rma(minus_dm.as_slice(), di_length)
            .zip_with(&smoothed_tr, |dm, tr| T::HUNDRED * dm / tr);

        let dx = plus_di.zip_with(&minus_di, |plus, minus| {
            let sum = plus + minus;
            let divisor = if sum == T::ZERO { T::ONE } else { sum };
            (plus - minus).abs() / divisor
        });

        let adx = rma(dx.as_slice(), adx_smoothing).map(|v| T::HUNDRED * v);

        AdxOutput {
            adx,
            plus_di,
            minus_di,
        }
    }

    /// Compute the difference and ratio of the directional indicators.
    #[must_use]
    pub fn di_difference(&self, adx_smoothing: usize, di_length: usize) -> DiDifference<T> {
        let AdxOutput {
            plus_di, minus_di, ..
        } = self.adx(adx_smoothing, di_length);

        DiDifference {
            delta: plus_di.zip_with(&minus_di, |plus, minus| plus - minus),
            ratio: plus_di.zip_with(&minus_di, |plus, minus| plus / minus),
        }
    }
}

/// The dominant side of a directional move, zero otherwise. NaN operands
/// (the first bar's missing difference) stay NaN.
fn directional_movement<T: TaFloat>(own: T, other: T) -> T {
    if own.is_nan() || other.is_nan() {
        T::NAN
    } else if own > other && own > T::ZERO {
        own
    } else {
        T::ZERO
    }
}
