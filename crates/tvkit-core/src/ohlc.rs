//! OHLC column resolution.
//!
//! Price-frame indicators need open/high/low/close roles resolved from the
//! caller's column names. One resolver serves every indicator: per role the
//! lookup order is explicit override, then the lowercase convention name,
//! then the TitleCase convention name. Resolution is a pure function of the
//! frame; nothing is cached between calls.

use crate::error::{Result, TaError};
use crate::frame::Frame;
use crate::num::TaFloat;
use crate::series::Series;

/// Explicit column-name overrides, one per OHLC role.
///
/// A role left as `None` falls back to the convention names.
#[derive(Clone, Copy, Debug, Default)]
pub struct OhlcOverrides<'a> {
    /// Column name carrying open prices.
    pub open: Option<&'a str>,
    /// Column name carrying high prices.
    pub high: Option<&'a str>,
    /// Column name carrying low prices.
    pub low: Option<&'a str>,
    /// Column name carrying close prices.
    pub close: Option<&'a str>,
}

impl<'a> OhlcOverrides<'a> {
    /// No overrides; every role resolves by convention names.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Override the high column name.
    #[must_use]
    pub fn high(mut self, name: &'a str) -> Self {
        self.high = Some(name);
        self
    }

    /// Override the low column name.
    #[must_use]
    pub fn low(mut self, name: &'a str) -> Self {
        self.low = Some(name);
        self
    }

    /// Override the close column name.
    #[must_use]
    pub fn close(mut self, name: &'a str) -> Self {
        self.close = Some(name);
        self
    }

    /// Override the open column name.
    #[must_use]
    pub fn open(mut self, name: &'a str) -> Self {
        self.open = Some(name);
        self
    }
}

/// The OHLC roles resolvable in a frame.
///
/// Each role is independently `None` when neither an override nor a
/// convention name matched.
#[derive(Debug)]
pub struct OhlcColumns<'f, T: TaFloat> {
    /// Resolved open column.
    pub open: Option<&'f Series<T>>,
    /// Resolved high column.
    pub high: Option<&'f Series<T>>,
    /// Resolved low column.
    pub low: Option<&'f Series<T>>,
    /// Resolved close column.
    pub close: Option<&'f Series<T>>,
}

fn resolve_role<'f, T: TaFloat>(
    frame: &'f Frame<T>,
    override_name: Option<&str>,
    lower: &str,
    title: &str,
) -> Option<&'f Series<T>> {
    match override_name {
        Some(name) => frame.column(name),
        None => frame.column(lower).or_else(|| frame.column(title)),
    }
}

/// Resolve the OHLC roles of `frame`.
///
/// This never fails by itself; use [`OhlcColumns::require_hlc`] or
/// [`OhlcColumns::require_ohlc`] to demand the roles an indicator needs.
#[must_use]
pub fn resolve_ohlc<'f, T: TaFloat>(
    frame: &'f Frame<T>,
    overrides: &OhlcOverrides<'_>,
) -> OhlcColumns<'f, T> {
    OhlcColumns {
        open: resolve_role(frame, overrides.open, "open", "Open"),
        high: resolve_role(frame, overrides.high, "high", "High"),
        low: resolve_role(frame, overrides.low, "low", "Low"),
        close: resolve_role(frame, overrides.close, "close", "Close"),
    }
}

impl<'f, T: TaFloat> OhlcColumns<'f, T> {
    /// Demand the high, low and close roles.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::MissingColumns`] naming every unresolved role.
    pub fn require_hlc(&self) -> Result<(&'f Series<T>, &'f Series<T>, &'f Series<T>)> {
        match (self.high, self.low, self.close) {
            (Some(high), Some(low), Some(close)) => Ok((high, low, close)),
            _ => Err(self.missing_error(&[
                ("high", self.high.is_none()),
                ("low", self.low.is_none()),
                ("close", self.close.is_none()),
            ])),
        }
    }

    /// Demand all four roles.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::MissingColumns`] naming every unresolved role.
    pub fn require_ohlc(
        &self,
    ) -> Result<(
        &'f Series<T>,
        &'f Series<T>,
        &'f Series<T>,
        &'f Series<T>,
    )> {
        match (self.open, self.high, self.low, self.close) {
            (Some(open), Some(high), Some(low), Some(close)) => Ok((open, high, low, close)),
            _ => Err(self.missing_error(&[
                ("open", self.open.is_none()),
                ("high", self.high.is_none()),
                ("low", self.low.is_none()),
                ("close", self.close.is_none()),
            ])),
        }
    }

    fn missing_error(&self, roles: &[(&str, bool)]) -> TaError {
        TaError::MissingColumns {
            missing: roles
                .iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| (*name).to_string())
                .collect(),
        }
    }
}
