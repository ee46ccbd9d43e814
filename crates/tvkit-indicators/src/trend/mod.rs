//! Trend and directional indicators.

pub mod didi;
pub mod dmi;
pub mod ichimoku;
pub mod macd;

pub use didi::didi_index;
pub use dmi::{AdxOutput, DiDifference, Dmi};
pub use ichimoku::{Ichimoku, IchimokuClouds};
pub use macd::{macd, MacdDiffMethod, MacdOutput};
