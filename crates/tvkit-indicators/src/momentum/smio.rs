//! SMI Ergodic Oscillator (SMIO).

use tvkit_core::num::TaFloat;
use tvkit_core::series::Series;

use crate::ma::MaMethod;
use crate::momentum::tsi::tsi;

/// Compute the SMI Ergodic Oscillator.
///
/// The ergodic line is [`tsi`] over (`short_length`, `long_length`); the
/// signal line is the chosen moving average of the ergodic over
/// `signal_length`; SMIO is their difference.
#[must_use]
pub fn smio<T: TaFloat>(
    source: &Series<T>,
    long_length: usize,
    short_length: usize,
    signal_length: usize,
    ma_method: MaMethod,
) -> Series<T> {
    let ergodic = tsi(source, short_length, long_length, ma_method);
    let signal = ma_method.apply(ergodic.as_slice(), signal_length);

    ergodic.zip_with(&signal, |erg, sig| erg - sig)
}
