//! # tvkit-indicators
//!
//! Technical indicators matching the numerical conventions of the reference
//! charting platform, organized into three categories:
//!
//! - **Momentum**: RSI, CCI, TSI, SMIO, TRIX, fast and slow stochastics
//! - **Trend**: MACD, DMI/ADX, Didi Index, Ichimoku Cloud
//! - **Volatility**: Bollinger Bands and the Bollinger Trend oscillator
//!
//! All indicators are pure functions of their inputs. They compose the
//! moving-average engine in [`ma`] (and, for the `dtw` combination
//! variants, the alignment engine in `tvkit_core::align`), and every
//! derived series keeps its source's length with NaN marking the warm-up.
//!
//! # Example
//!
//! ```rust
//! use tvkit_core::Series;
//! use tvkit_indicators::prelude::*;
//!
//! let closes: Series<f64> = (1..=30).map(f64::from).collect();
//! let rsi = rsi(&closes, 14, MaMethod::Rma);
//! assert!(rsi[13].is_nan());
//! assert_eq!(rsi[14], 100.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod ma;
pub mod momentum;
pub mod trend;
pub mod volatility;

pub mod prelude;
