//! TRIX momentum oscillator.

use tvkit_core::num::TaFloat;
use tvkit_core::series::Series;

use crate::ma::MaMethod;

/// Compute the TRIX oscillator.
///
/// The natural log of the source is smoothed three times in sequence with
/// the chosen moving average (three separate applications of the same
/// strategy and length), then differenced over `signal_length` periods and
/// scaled by 10,000. Each smoothing stage adds its own warm-up, so the
/// absent prefix is three stages deep plus the differencing lag.
#[must_use]
pub fn trix<T: TaFloat>(
    source: &Series<T>,
    length: usize,
    signal_length: usize,
    ma_method: MaMethod,
) -> Series<T> {
    let log_source = source.map(|x| x.ln());

    let once = ma_method.apply(log_source.as_slice(), length);
    let twice = ma_method.apply(once.as_slice(), length);
    let thrice = ma_method.apply(twice.as_slice(), length);

    let scale = <T as TaFloat>::from_usize(10_000);
    thrice.diff(signal_length).map(|d| d * scale)
}
