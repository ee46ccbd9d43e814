//! Ichimoku Cloud.

use tvkit_core::error::Result;
use tvkit_core::frame::Frame;
use tvkit_core::num::TaFloat;
use tvkit_core::ohlc::{resolve_ohlc, OhlcOverrides};
use tvkit_core::rolling::{rolling_max, rolling_min};
use tvkit_core::series::Series;

/// The Ichimoku Cloud component lines.
///
/// The leading spans are shifted forward by `displacement - 1` bars and the
/// lagging span backward by the same amount, so the lagging span is the one
/// series in this library whose absent run sits at the tail.
#[derive(Clone, Debug)]
pub struct IchimokuClouds<T: TaFloat> {
    /// Conversion line (tenkan-sen).
    pub conversion_line: Series<T>,
    /// Base line (kijun-sen).
    pub base_line: Series<T>,
    /// Close shifted backward by the displacement.
    pub lagging_span: Series<T>,
    /// Midpoint of conversion and base lines, unshifted.
    pub lead_line1: Series<T>,
    /// Donchian midline over the lagging-span-2 window, unshifted.
    pub lead_line2: Series<T>,
    /// `lead_line1` displaced into the future.
    pub leading_span_a: Series<T>,
    /// `lead_line2` displaced into the future.
    pub leading_span_b: Series<T>,
}

impl<T: TaFloat> IchimokuClouds<T> {
    /// Render the output as a frame with the conventional column names.
    ///
    /// # Errors
    ///
    /// Propagates frame construction failures; the columns share one
    /// length, so this only fails if that invariant is broken.
    pub fn to_frame(&self) -> Result<Frame<T>> {
        Frame::from_columns([
            ("conversion_line", self.conversion_line.clone()),
            ("base_line", self.base_line.clone()),
            ("lagging_span", self.lagging_span.clone()),
            ("lead_line1", self.lead_line1.clone()),
            ("lead_line2", self.lead_line2.clone()),
            ("leading_span_a", self.leading_span_a.clone()),
            ("leading_span_b", self.leading_span_b.clone()),
        ])
    }
}

/// Ichimoku Cloud calculator over a price frame.
///
/// High, low and close columns are resolved once at construction through
/// the shared OHLC resolver.
#[derive(Clone, Debug)]
pub struct Ichimoku<T: TaFloat> {
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
}

impl<T: TaFloat> Ichimoku<T> {
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

    /// Compute the cloud components.
    ///
    /// The conversion and base lines are Donchian midlines over their
    /// respective windows; `lead_line1` is their midpoint and `lead_line2`
    /// the Donchian midline over `lagging_span_2_periods`. The leading
    /// spans displace the lead lines forward by `displacement - 1`; the
    /// lagging span displaces the close backward by the same amount.
    #[must_use]
    pub fn clouds(
        &self,
        conversion_periods: usize,
        base_periods: usize,
        lagging_span_2_periods: usize,
        displacement: usize,
    ) -> IchimokuClouds<T> {
        let conversion_line = self.donchian(conversion_periods);
        let base_line = self.donchian(base_periods);

        let lead_line1 = conversion_line.zip_with(&base_line, |c, b| (c + b) / T::TWO);
        let lead_line2 = self.donchian(lagging_span_2_periods);

        let offset = displacement.saturating_sub(1) as isize;
        let leading_span_a = lead_line1.shift(offset, T::NAN);
        let leading_span_b = lead_line2.shift(offset, T::NAN);
        let lagging_span = self.close.shift(-offset, T::NAN);

        IchimokuClouds {
            conversion_line,
            base_line,
            lagging_span,
            lead_line1,
            lead_line2,
            leading_span_a,
            leading_span_b,
        }
    }

    /// Donchian midline: the average of the rolling highest high and
    /// lowest low.
    fn donchian(&self, length: usize) -> Series<T> {
        let highest = rolling_max(self.high.as_slice(), length);
        let lowest = rolling_min(self.low.as_slice(), length);
        highest.zip_with(&lowest, |hi, lo| (hi + lo) / T::TWO)
    }
}
