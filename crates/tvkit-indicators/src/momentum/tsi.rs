//! True Strength Index (TSI).

use tvkit_core::num::TaFloat;
use tvkit_core::series::Series;

use crate::ma::MaMethod;

/// Compute the True Strength Index.
///
/// The one-period price change and its absolute value are each smoothed
/// twice in sequence (first over `short_length`, then over `long_length`,
/// same strategy); the index is the ratio of the two double-smoothed
/// series. The result is a signed fraction; the reference implementation
/// applies no percentage scaling.
#[must_use]
pub fn tsi<T: TaFloat>(
    source: &Series<T>,
    short_length: usize,
    long_length: usize,
    ma_method: MaMethod,
) -> Series<T> {
    let change = source.diff(1);
    let abs_change = change.map(|d| d.abs());

    let short_smoothed = ma_method.apply(change.as_slice(), short_length);
    let long_smoothed = ma_method.apply(short_smoothed.as_slice(), long_length);

    let abs_short_smoothed = ma_method.apply(abs_change.as_slice(), short_length);
    let abs_long_smoothed = ma_method.apply(abs_short_smoothed.as_slice(), long_length);

    long_smoothed.zip_with(&abs_long_smoothed, |momentum, magnitude| momentum / magnitude)
}
