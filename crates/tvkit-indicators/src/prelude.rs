//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use tvkit_core::Series;
//! use tvkit_indicators::prelude::*;
//!
//! let closes: Series<f64> = (1..=20).map(f64::from).collect();
//! let bands = bollinger_bands(&closes, 5, 2.0, MaMethod::Sma);
//! assert_eq!(bands.basis.first_valid_index(), Some(4));
//! ```

// Moving-average engine
pub use crate::ma::{ema, rma, rma_with, sema, sma, MaMethod, RmaMethod};

// Momentum
pub use crate::momentum::{cci, rsi, slow_stoch, smio, stoch, trix, tsi, SlowStochOutput};

// Trend
pub use crate::trend::{
    didi_index, macd, AdxOutput, DiDifference, Dmi, Ichimoku, IchimokuClouds, MacdDiffMethod,
    MacdOutput,
};

// Volatility
pub use crate::volatility::{
    bollinger_bands, bollinger_trend, BasedOn, BollingerBands, StdevMethod, TrendDiffMethod,
};
