//! Error types shared by all indicator operations.
//!
//! The taxonomy is deliberately small: selector strings that do not match a
//! closed set fail with [`TaError::InvalidArgument`], OHLC-dependent
//! indicators that cannot locate their price columns fail with
//! [`TaError::MissingColumns`], and passing a multi-column frame where a
//! single series is required fails with [`TaError::TypeMismatch`]. Numerical
//! degeneracy (division by zero in a ratio) is never an error; it propagates
//! through the output as NaN.

use thiserror::Error;

/// Result type alias for operations that validate their arguments.
pub type Result<T> = core::result::Result<T, TaError>;

/// Errors raised during argument validation.
///
/// All variants are raised synchronously, before any computation proceeds;
/// no partial results are ever returned alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaError {
    /// A selector value does not match its allowed set.
    ///
    /// The message names the offending value and the allowed set verbatim;
    /// callers are entitled to match on the text.
    #[error("{0}")]
    InvalidArgument(String),

    /// An OHLC-dependent indicator could not resolve one or more price
    /// columns from the input frame.
    #[error("OHLC columns not found in frame (missing: {})", .missing.join(", "))]
    MissingColumns {
        /// The role names that could not be resolved.
        missing: Vec<String>,
    },

    /// A single series was required but a multi-column frame was given.
    #[error("source must be a single series, but the frame has {columns} columns")]
    TypeMismatch {
        /// Number of columns in the offending frame.
        columns: usize,
    },

    /// A column's length does not match the frame it is being added to.
    #[error("column length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected number of rows.
        expected: usize,
        /// Actual number of rows provided.
        actual: usize,
    },

    /// A column with the same name already exists in the frame.
    #[error("duplicate column name: '{0}'")]
    DuplicateColumn(String),
}

impl TaError {
    /// Build an [`TaError::InvalidArgument`] naming the offending value and
    /// the allowed set.
    #[must_use]
    pub fn invalid_argument(parameter: &str, allowed: &str, got: &str) -> Self {
        Self::InvalidArgument(format!("{parameter} must be {allowed}, got '{got}'."))
    }
}
