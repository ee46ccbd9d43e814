//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use tvkit_core::prelude::*;
//!
//! let series: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
//! assert_eq!(series.len(), 3);
//! ```

// Core types
pub use crate::frame::Frame;
pub use crate::num::TaFloat;
pub use crate::series::Series;

// Error types
pub use crate::error::{Result, TaError};

// Sequence alignment
pub use crate::align::{DistanceMethod, DynamicTimeWarping};

// OHLC resolution
pub use crate::ohlc::{resolve_ohlc, OhlcColumns, OhlcOverrides};

// Rolling primitives
pub use crate::rolling::{rolling_mad, rolling_max, rolling_mean, rolling_min, rolling_std};
