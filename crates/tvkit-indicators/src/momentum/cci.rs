//! Commodity Channel Index (CCI).

use tvkit_core::num::TaFloat;
use tvkit_core::rolling::rolling_mad;
use tvkit_core::series::Series;

use crate::ma::MaMethod;

/// Compute the Commodity Channel Index.
///
/// `CCI = (source - baseline) / (constant * mad)`, where the baseline is
/// the chosen moving average and `mad` is the mean absolute deviation over
/// a strictly trailing window of the raw source. The output starts where
/// both the baseline and the deviation window are first defined; a
/// slower-warming baseline (dema/tema) extends the absent prefix
/// accordingly. The conventional scaling constant is `0.015`.
#[must_use]
pub fn cci<T: TaFloat>(
    source: &Series<T>,
    length: usize,
    constant: T,
    ma_method: MaMethod,
) -> Series<T> {
    let baseline = ma_method.apply(source.as_slice(), length);
    let mad = rolling_mad(source.as_slice(), length);

    source
        .zip_with(&baseline, |price, base| price - base)
        .zip_with(&mad, |spread, deviation| spread / (constant * deviation))
}
