//! Didi Index.

use tvkit_core::align::{DistanceMethod, DynamicTimeWarping};
use tvkit_core::num::TaFloat;
use tvkit_core::series::Series;

use crate::ma::MaMethod;

/// Compute the Didi Index.
///
/// Three moving averages of the source are taken at `short_length`,
/// `mid_length` and `long_length` with the same strategy. The short and
/// long averages are each measured against the mid average - by plain
/// subtraction or division per `method`, or by DTW-aligned distance of each
/// pair when `use_dtw` is set - and the index is the long leg minus the
/// short leg.
#[must_use]
pub fn didi_index<T: TaFloat>(
    source: &Series<T>,
    short_length: usize,
    mid_length: usize,
    long_length: usize,
    ma_method: MaMethod,
    method: DistanceMethod,
    use_dtw: bool,
) -> Series<T> {
    let short_ma = ma_method.apply(source.as_slice(), short_length);
    let mid_ma = ma_method.apply(source.as_slice(), mid_length);
    let long_ma = ma_method.apply(source.as_slice(), long_length);

    let (short_leg, long_leg) = if use_dtw {
        (
            DynamicTimeWarping::new(&short_ma, &mid_ma).distance(method, true),
            DynamicTimeWarping::new(&long_ma, &mid_ma).distance(method, true),
        )
    } else {
        match method {
            DistanceMethod::Absolute => (
                short_ma.zip_with(&mid_ma, |s, m| s - m),
                long_ma.zip_with(&mid_ma, |l, m| l - m),
            ),
            DistanceMethod::Ratio => (
                short_ma.zip_with(&mid_ma, |s, m| s / m),
                long_ma.zip_with(&mid_ma, |l, m| l / m),
            ),
        }
    };

    long_leg.zip_with(&short_leg, |long, short| long - short)
}
