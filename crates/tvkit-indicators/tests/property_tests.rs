//! Property-based tests for tvkit-indicators.
//!
//! These verify invariants that must hold for all inputs.

use proptest::prelude::*;
use tvkit_core::align::{DistanceMethod, DynamicTimeWarping};
use tvkit_core::{Frame, Series};
use tvkit_indicators::prelude::*;

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Generate a valid price (positive, finite).
fn valid_price() -> impl Strategy<Value = f64> {
    (0.01f64..10_000.0).prop_filter("must be finite", |x| x.is_finite())
}

/// Generate a vector of valid prices.
fn price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(valid_price(), min_len..=max_len)
}

/// Generate a price frame with high/low straddling the close.
fn price_frame(min_len: usize, max_len: usize) -> impl Strategy<Value = Frame<f64>> {
    (price_series(min_len, max_len), 0.01f64..10.0).prop_map(|(closes, spread)| {
        let close = Series::from_vec(closes.clone());
        let high = Series::from_vec(closes.iter().map(|c| c + spread).collect());
        let low = Series::from_vec(closes.iter().map(|c| c - spread).collect());
        Frame::from_columns([("high", high), ("low", low), ("close", close)]).unwrap()
    })
}

proptest! {
    // ========================================================================
    // Moving Average Engine
    // ========================================================================

    /// SMA has exactly window - 1 fewer defined values than its source, and
    /// each defined value is the mean of its trailing window.
    #[test]
    fn sma_window_arithmetic(
        data in price_series(1, 60),
        window in 1usize..=12,
    ) {
        let result = sma(&data, window);
        prop_assert_eq!(result.len(), data.len());

        let defined = result.iter().filter(|v| !v.is_nan()).count();
        let expected_defined = data.len().saturating_sub(window - 1);
        prop_assert_eq!(defined, expected_defined);

        for i in (window - 1)..data.len() {
            let mean: f64 = data[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            prop_assert!((result[i] - mean).abs() <= 1e-9 * mean.abs().max(1.0));
        }
    }

    /// The EMA's first defined value equals the SMA seed.
    #[test]
    fn ema_seed_equals_sma(
        data in price_series(2, 60),
        window in 1usize..=12,
    ) {
        prop_assume!(data.len() >= window);
        let sma_result = sma(&data, window);
        let ema_result = ema(&data, window);
        prop_assert_eq!(ema_result[window - 1], sma_result[window - 1]);
    }

    /// A smoothing chain of one is a plain EMA.
    #[test]
    fn sema_degenerates_to_ema(
        data in price_series(1, 60),
        window in 1usize..=10,
    ) {
        let single = sema(&data, window, 1);
        let plain = ema(&data, window);
        for i in 0..data.len() {
            if plain[i].is_nan() {
                prop_assert!(single[i].is_nan());
            } else {
                prop_assert_eq!(single[i], plain[i]);
            }
        }
    }

    /// Both RMA strategies agree exactly on the seed and stay finite.
    #[test]
    fn rma_strategies_agree_on_seed(
        data in price_series(2, 60),
        window in 1usize..=12,
    ) {
        prop_assume!(data.len() >= window);
        let precise = rma_with(&data, window, RmaMethod::Precise);
        let pandas = rma_with(&data, window, RmaMethod::PandasEquivalent);

        prop_assert_eq!(precise[window - 1], pandas[window - 1]);
        for i in (window - 1)..data.len() {
            prop_assert!(precise[i].is_finite());
            prop_assert!(pandas[i].is_finite());
        }
    }

    /// On a constant series every MA strategy reproduces the constant.
    #[test]
    fn constant_series_fixed_point(
        value in valid_price(),
        len in 12usize..40,
        window in 1usize..=6,
    ) {
        let data = vec![value; len];
        for method in [MaMethod::Sma, MaMethod::Ema, MaMethod::Dema, MaMethod::Tema, MaMethod::Rma] {
            let result = method.apply(&data, window);
            for &v in result.iter().filter(|v| !v.is_nan()) {
                prop_assert!((v - value).abs() <= 1e-9 * value);
            }
        }
    }

    // ========================================================================
    // DTW
    // ========================================================================

    /// The warping path is monotone, unit-step, and covers both sequences.
    #[test]
    fn dtw_path_is_monotone_unit_step(
        x in price_series(1, 25),
        y in price_series(1, 25),
    ) {
        let sx = Series::from_vec(x.clone());
        let sy = Series::from_vec(y.clone());
        let dtw = DynamicTimeWarping::new(&sx, &sy);
        let path = dtw.path();

        prop_assert_eq!(path.first().copied(), Some((0, 0)));
        prop_assert_eq!(path.last().copied(), Some((x.len() - 1, y.len() - 1)));
        prop_assert!(path.len() >= x.len().max(y.len()));

        for pair in path.windows(2) {
            let (i0, j0) = pair[0];
            let (i1, j1) = pair[1];
            prop_assert!(i1 >= i0 && j1 >= j0);
            let advance = (i1 - i0) + (j1 - j0);
            prop_assert!(i1 - i0 <= 1 && j1 - j0 <= 1 && advance >= 1);
        }
    }

    /// Aligned distance keeps the source length and a contiguous prefix.
    #[test]
    fn dtw_aligned_distance_shape(
        (x, y) in (4usize..25).prop_flat_map(|n| (
            prop::collection::vec(valid_price(), n),
            prop::collection::vec(valid_price(), n),
        )),
    ) {
        let sx = Series::from_vec(x);
        let sy = Series::from_vec(y);
        let dist = DynamicTimeWarping::new(&sx, &sy).distance(DistanceMethod::Absolute, true);
        prop_assert_eq!(dist.len(), sx.len());
        prop_assert_eq!(dist.nan_count(), 0);
    }

    // ========================================================================
    // Indicators
    // ========================================================================

    /// RSI stays within [0, 100] wherever defined.
    #[test]
    fn rsi_bounds(
        data in price_series(6, 50),
        periods in 2usize..=8,
    ) {
        let result = rsi(&Series::from_vec(data), periods, MaMethod::Rma);
        for &value in result.iter().filter(|v| !v.is_nan()) {
            prop_assert!((0.0..=100.0).contains(&value));
        }
    }

    /// The raw stochastic stays within [0, 100] when the source lies
    /// between the lows and highs.
    #[test]
    fn stoch_bounds(frame in price_frame(6, 50), length in 2usize..=8) {
        let close = frame.column("close").unwrap();
        let high = frame.column("high").unwrap();
        let low = frame.column("low").unwrap();

        let result = stoch(close, high, low, length);
        for &value in result.iter().filter(|v| !v.is_nan()) {
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(&value));
        }
    }

    /// ADX and both directional indicators are bounded in [0, 100].
    #[test]
    fn adx_bounds(frame in price_frame(10, 50)) {
        let dmi = Dmi::new(&frame, &tvkit_core::ohlc::OhlcOverrides::none()).unwrap();
        let out = dmi.adx(4, 4);

        for series in [&out.adx, &out.plus_di, &out.minus_di] {
            for &value in series.iter().filter(|v| !v.is_nan()) {
                prop_assert!((-1e-9..=100.0 + 1e-9).contains(&value), "value {}", value);
            }
        }
    }

    /// The Didi Index matches a direct recomputation from its three MAs
    /// for both elementwise methods.
    #[test]
    fn didi_round_trip(data in price_series(12, 50)) {
        let source = Series::from_vec(data);
        let short = MaMethod::Ema.apply(source.as_slice(), 3);
        let mid = MaMethod::Ema.apply(source.as_slice(), 5);
        let long = MaMethod::Ema.apply(source.as_slice(), 8);

        let absolute = didi_index(
            &source, 3, 5, 8, MaMethod::Ema, DistanceMethod::Absolute, false,
        );
        let ratio = didi_index(
            &source, 3, 5, 8, MaMethod::Ema, DistanceMethod::Ratio, false,
        );

        for i in 0..source.len() {
            if !absolute[i].is_nan() {
                let expected = (long[i] - mid[i]) - (short[i] - mid[i]);
                prop_assert!((absolute[i] - expected).abs() <= 1e-9 * expected.abs().max(1.0));
            }
            if !ratio[i].is_nan() {
                let expected = long[i] / mid[i] - short[i] / mid[i];
                prop_assert!((ratio[i] - expected).abs() <= 1e-9 * expected.abs().max(1.0));
            }
        }
    }

    /// Bollinger bands bracket their basis symmetrically.
    #[test]
    fn bollinger_band_symmetry(
        data in price_series(6, 50),
        window in 2usize..=10,
        mult in 0.5f64..4.0,
    ) {
        let source = Series::from_vec(data);
        let bands = bollinger_bands(&source, window, mult, MaMethod::Sma);

        for i in 0..source.len() {
            if !bands.basis[i].is_nan() {
                let above = bands.upper[i] - bands.basis[i];
                let below = bands.basis[i] - bands.lower[i];
                prop_assert!(above >= -1e-12);
                prop_assert!((above - below).abs() <= 1e-9 * above.abs().max(1.0));
            }
        }
    }

    /// Every derived series preserves its source length.
    #[test]
    fn outputs_preserve_length(data in price_series(10, 40)) {
        let source = Series::from_vec(data.clone());
        let n = data.len();

        prop_assert_eq!(rsi(&source, 5, MaMethod::Rma).len(), n);
        prop_assert_eq!(tsi(&source, 3, 5, MaMethod::Ema).len(), n);
        prop_assert_eq!(trix(&source, 3, 1, MaMethod::Ema).len(), n);
        prop_assert_eq!(cci(&source, 5, 0.015, MaMethod::Sma).len(), n);

        let out = macd(
            &source, 3, 5, 2,
            MacdDiffMethod::Absolute, MaMethod::Ema, MaMethod::Ema,
        );
        prop_assert_eq!(out.macd.len(), n);
        prop_assert_eq!(out.signal.len(), n);
        prop_assert_eq!(out.histogram.len(), n);
    }
}
