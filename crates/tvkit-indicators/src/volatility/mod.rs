//! Volatility bands and derived oscillators.

pub mod bollinger;

pub use bollinger::{
    bollinger_bands, bollinger_trend, BasedOn, BollingerBands, StdevMethod, TrendDiffMethod,
};
