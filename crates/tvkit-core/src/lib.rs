//! # tvkit-core
//!
//! Core types and primitives for the tvkit technical analysis library.
//!
//! This crate provides the foundations the indicator crate builds on:
//!
//! - [`TaFloat`] - Trait abstracting `f32`/`f64` for generic computation
//! - [`Series`] - Time series container with NaN warm-up semantics
//! - [`Frame`] - Multi-column tabular data with deterministic ordering
//! - [`rolling`] - Rolling-window primitives (mean, std, extremes, MAD)
//! - [`align`] - Dynamic Time Warping sequence alignment
//! - [`ohlc`] - The shared OHLC column resolver
//! - [`TaError`] - The validation-error taxonomy
//!
//! ## Example
//!
//! ```rust
//! use tvkit_core::prelude::*;
//!
//! let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3, 101.0]);
//! let mean = rolling_mean(closes.as_slice(), 3);
//! assert!(mean[1].is_nan());
//! assert!(!mean[2].is_nan());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod align;
pub mod error;
pub mod frame;
pub mod num;
pub mod ohlc;
pub mod prelude;
pub mod rolling;
pub mod series;

pub use error::{Result, TaError};
pub use frame::Frame;
pub use num::TaFloat;
pub use series::Series;
