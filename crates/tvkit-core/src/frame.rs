//! Multi-column tabular data with deterministic column order.
//!
//! [`Frame`] is the minimal table abstraction the indicators need: named,
//! equal-length columns iterated in insertion order. OHLC-based indicators
//! resolve their price columns out of a frame; multi-line indicators can
//! render their output into one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaError};
use crate::num::TaFloat;
use crate::series::Series;

/// A column-oriented table with deterministic iteration order.
///
/// Columns are kept in insertion order (`IndexMap`), which makes serialized
/// output and test expectations reproducible.
///
/// # Example
///
/// ```rust
/// use tvkit_core::{Frame, Series};
///
/// let mut frame: Frame<f64> = Frame::new();
/// frame.add_column("close", Series::from_vec(vec![100.0, 101.0])).unwrap();
/// frame.add_column("volume", Series::from_vec(vec![1000.0, 1100.0])).unwrap();
///
/// assert_eq!(frame.len(), 2);
/// assert_eq!(frame.column_names(), vec!["close", "volume"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "T: TaFloat")]
pub struct Frame<T: TaFloat> {
    columns: IndexMap<String, Series<T>>,
}

impl<T: TaFloat> Default for Frame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> Frame<T> {
    /// Create a new empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    /// Create a frame from a list of (name, series) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::LengthMismatch`] if the columns differ in length,
    /// or [`TaError::DuplicateColumn`] on a repeated name.
    pub fn from_columns<N, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Series<T>)>,
    {
        let mut frame = Self::new();
        for (name, series) in columns {
            frame.add_column(name, series)?;
        }
        Ok(frame)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Series::len)
    }

    /// Returns `true` if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a reference to a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Series<T>> {
        self.columns.get(name)
    }

    /// Add a new column at the end.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::DuplicateColumn`] if the name is taken, or
    /// [`TaError::LengthMismatch`] if the length differs from existing
    /// columns.
    pub fn add_column(&mut self, name: impl Into<String>, series: Series<T>) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(TaError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && series.len() != self.len() {
            return Err(TaError::LengthMismatch {
                expected: self.len(),
                actual: series.len(),
            });
        }
        self.columns.insert(name, series);
        Ok(())
    }

    /// Interpret the frame as a single series.
    ///
    /// Indicators that operate on one price series accept frames only
    /// through this conversion, mirroring the reference behavior of
    /// rejecting table-shaped sources.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::TypeMismatch`] unless the frame has exactly one
    /// column.
    pub fn require_series(&self) -> Result<&Series<T>> {
        if self.column_count() == 1 {
            Ok(self.columns.values().next().expect("one column"))
        } else {
            Err(TaError::TypeMismatch {
                columns: self.column_count(),
            })
        }
    }

    /// Returns an iterator over (name, series) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series<T>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}
