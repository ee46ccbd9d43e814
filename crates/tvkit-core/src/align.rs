//! Dynamic Time Warping sequence alignment.
//!
//! [`DynamicTimeWarping`] computes an optimal warping path between two
//! numeric sequences: a monotone, unit-step mapping of positions of one
//! sequence onto the other that minimizes the cumulative absolute pointwise
//! distance. Indicators use it as an alternative difference metric between
//! two derived series whose shapes are similar but locally out of phase.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaError};
use crate::frame::Frame;
use crate::num::TaFloat;
use crate::series::Series;

/// How to combine warped value pairs into a distance series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    /// Per-row difference `x - y`.
    Absolute,
    /// Per-row quotient `x / y`.
    Ratio,
}

impl DistanceMethod {
    /// Parse a wire-level selector string.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::InvalidArgument`] naming the offending value and
    /// the allowed set.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "absolute" => Ok(Self::Absolute),
            "ratio" => Ok(Self::Ratio),
            _ => Err(TaError::invalid_argument(
                "method",
                "'absolute' or 'ratio'",
                value,
            )),
        }
    }

    fn combine<T: TaFloat>(self, x: T, y: T) -> T {
        match self {
            Self::Absolute => x - y,
            Self::Ratio => x / y,
        }
    }
}

impl core::str::FromStr for DistanceMethod {
    type Err = TaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Compute the optimal warping path between two slices.
///
/// Full-resolution dynamic program over the cost matrix
/// `D[i][j] = |x[i] - y[j]| + min(D[i-1][j], D[i][j-1], D[i-1][j-1])`,
/// backtracked from the end. Ties prefer the diagonal predecessor, so a
/// perfectly matched pair yields the plain diagonal path.
fn dtw_path<T: TaFloat>(x: &[T], y: &[T]) -> Vec<(usize, usize)> {
    let (n, m) = (x.len(), y.len());
    if n == 0 || m == 0 {
        return Vec::new();
    }

    let mut cost = vec![T::INFINITY; n * m];
    let at = |i: usize, j: usize| i * m + j;

    cost[at(0, 0)] = (x[0] - y[0]).abs();
    for j in 1..m {
        cost[at(0, j)] = (x[0] - y[j]).abs() + cost[at(0, j - 1)];
    }
    for i in 1..n {
        cost[at(i, 0)] = (x[i] - y[0]).abs() + cost[at(i - 1, 0)];
        for j in 1..m {
            let best = cost[at(i - 1, j - 1)]
                .min(cost[at(i - 1, j)])
                .min(cost[at(i, j - 1)]);
            cost[at(i, j)] = (x[i] - y[j]).abs() + best;
        }
    }

    let mut path = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n - 1, m - 1);
    path.push((i, j));
    while i > 0 || j > 0 {
        if i == 0 {
            j -= 1;
        } else if j == 0 {
            i -= 1;
        } else {
            let diag = cost[at(i - 1, j - 1)];
            let left = cost[at(i, j - 1)];
            let up = cost[at(i - 1, j)];
            if diag <= left && diag <= up {
                i -= 1;
                j -= 1;
            } else if left <= up {
                j -= 1;
            } else {
                i -= 1;
            }
        }
        path.push((i, j));
    }
    path.reverse();
    path
}

/// A computed alignment between two sequences.
///
/// The inputs may carry a warm-up NaN prefix; the path is computed over the
/// defined span of each sequence, and path coordinates are relative to
/// those spans (offset by [`DynamicTimeWarping::x_start`] /
/// [`DynamicTimeWarping::y_start`] from source positions).
///
/// # Example
///
/// ```rust
/// use tvkit_core::align::DynamicTimeWarping;
/// use tvkit_core::Series;
///
/// let x: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
/// let y: Series<f64> = Series::from_vec(vec![1.0, 3.0]);
/// let dtw = DynamicTimeWarping::new(&x, &y);
///
/// assert_eq!(dtw.path(), &[(0, 0), (1, 0), (2, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct DynamicTimeWarping<T: TaFloat> {
    x: Series<T>,
    y: Series<T>,
    x_start: usize,
    y_start: usize,
    path: Vec<(usize, usize)>,
}

impl<T: TaFloat> DynamicTimeWarping<T> {
    /// Compute the warping path between `x` and `y`.
    #[must_use]
    pub fn new(x: &Series<T>, y: &Series<T>) -> Self {
        let x_start = x.first_valid_index().unwrap_or(x.len());
        let y_start = y.first_valid_index().unwrap_or(y.len());
        let path = dtw_path(&x.as_slice()[x_start..], &y.as_slice()[y_start..]);

        Self {
            x: x.clone(),
            y: y.clone(),
            x_start,
            y_start,
            path,
        }
    }

    /// The warping path as (x, y) positions relative to the defined spans.
    #[must_use]
    pub fn path(&self) -> &[(usize, usize)] {
        &self.path
    }

    /// Source position of the first defined `x` value.
    #[must_use]
    pub fn x_start(&self) -> usize {
        self.x_start
    }

    /// Source position of the first defined `y` value.
    #[must_use]
    pub fn y_start(&self) -> usize {
        self.y_start
    }

    /// The warped alignment table.
    ///
    /// One row per path step, with columns `x_path` and `y_path` (the
    /// span-relative positions consumed at that step) and `x` and `y` (the
    /// values at those positions). A sequence that stalls while the other
    /// advances repeats its position across consecutive rows.
    #[must_use]
    pub fn warped(&self) -> Frame<T> {
        let sx = &self.x.as_slice()[self.x_start..];
        let sy = &self.y.as_slice()[self.y_start..];

        let mut x_path = Series::with_capacity(self.path.len());
        let mut y_path = Series::with_capacity(self.path.len());
        let mut x_vals = Series::with_capacity(self.path.len());
        let mut y_vals = Series::with_capacity(self.path.len());

        for &(i, j) in &self.path {
            x_path.push(<T as TaFloat>::from_usize(i));
            y_path.push(<T as TaFloat>::from_usize(j));
            x_vals.push(sx[i]);
            y_vals.push(sy[j]);
        }

        Frame::from_columns([
            ("x_path", x_path),
            ("y_path", y_path),
            ("x", x_vals),
            ("y", y_vals),
        ])
        .expect("warped columns share the path length")
    }

    /// Derive a distance series from the alignment.
    ///
    /// With `align = false` the result has one row per raw path step. With
    /// `align = true` the two inputs are first length-equalized (the longer
    /// defined span truncated, from the front, to the shorter's length),
    /// the path is recomputed on the equalized pair, the warped columns are
    /// collapsed to the equalized length, and the combined values are
    /// re-anchored into a full-length series (NaN before the common first
    /// defined position). Division by zero under [`DistanceMethod::Ratio`]
    /// follows IEEE semantics and propagates through the output.
    #[must_use]
    pub fn distance(&self, method: DistanceMethod, align: bool) -> Series<T> {
        if align {
            self.aligned_distance(method)
        } else {
            let sx = &self.x.as_slice()[self.x_start..];
            let sy = &self.y.as_slice()[self.y_start..];
            self.path
                .iter()
                .map(|&(i, j)| method.combine(sx[i], sy[j]))
                .collect()
        }
    }

    fn aligned_distance(&self, method: DistanceMethod) -> Series<T> {
        let sx = &self.x.as_slice()[self.x_start..];
        let sy = &self.y.as_slice()[self.y_start..];
        let len = sx.len().min(sy.len());

        let mut result = vec![T::NAN; self.x.len()];
        if len == 0 {
            return Series::from_vec(result);
        }

        // Equalize from the front: warm-up prefixes discard the oldest
        // positions, so the common span is the tail of each input.
        let ex = &sx[sx.len() - len..];
        let ey = &sy[sy.len() - len..];
        let anchor = self.x.len() - len;

        let path = dtw_path(ex, ey);
        for (row, &(i, j)) in path.iter().take(len).enumerate() {
            result[anchor + row] = method.combine(ex[i], ey[j]);
        }

        Series::from_vec(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_simple_stall() {
        let x: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
        let y: Series<f64> = Series::from_vec(vec![1.0, 3.0]);
        let dtw = DynamicTimeWarping::new(&x, &y);

        assert_eq!(dtw.path(), &[(0, 0), (1, 0), (2, 1)]);
    }

    #[test]
    fn test_path_identical_sequences_is_diagonal() {
        let x: Series<f64> = Series::from_vec(vec![5.0, 1.0, 4.0, 2.0]);
        let dtw = DynamicTimeWarping::new(&x, &x);

        assert_eq!(dtw.path(), &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        let dist = dtw.distance(DistanceMethod::Absolute, false);
        assert!(dist.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_path_is_monotone_unit_step() {
        let x: Series<f64> = Series::from_vec(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0]);
        let y: Series<f64> = Series::from_vec(vec![2.0, 7.0, 1.0, 8.0]);
        let dtw = DynamicTimeWarping::new(&x, &y);
        let path = dtw.path();

        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(5, 3)));
        for pair in path.windows(2) {
            let (i0, j0) = pair[0];
            let (i1, j1) = pair[1];
            let di = i1 - i0;
            let dj = j1 - j0;
            assert!(di <= 1 && dj <= 1 && di + dj >= 1);
        }
    }

    #[test]
    fn test_warped_table() {
        let x: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
        let y: Series<f64> = Series::from_vec(vec![1.0, 3.0]);
        let table = DynamicTimeWarping::new(&x, &y).warped();

        assert_eq!(table.column_names(), vec!["x_path", "y_path", "x", "y"]);
        assert_eq!(table.column("x").unwrap().as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.column("y").unwrap().as_slice(), &[1.0, 1.0, 3.0]);
        assert_eq!(table.column("y_path").unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_distance_raw_rows() {
        let x: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
        let y: Series<f64> = Series::from_vec(vec![1.0, 3.0]);
        let dtw = DynamicTimeWarping::new(&x, &y);

        let dist = dtw.distance(DistanceMethod::Absolute, false);
        assert_eq!(dist.as_slice(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_aligned_distance_anchors_to_common_span() {
        let x: Series<f64> = Series::from_vec(vec![f64::NAN, 1.0, 2.0, 3.0, 4.0]);
        let y: Series<f64> = Series::from_vec(vec![f64::NAN, f64::NAN, 1.0, 2.0, 3.0]);
        let dtw = DynamicTimeWarping::new(&x, &y);

        let dist = dtw.distance(DistanceMethod::Absolute, true);
        assert_eq!(dist.len(), 5);
        assert!(dist[0].is_nan());
        assert!(dist[1].is_nan());
        assert_eq!(dist[2], 1.0);
        assert_eq!(dist[3], 1.0);
        assert_eq!(dist[4], 1.0);
    }

    #[test]
    fn test_distance_method_parse() {
        assert_eq!(
            DistanceMethod::parse("absolute").unwrap(),
            DistanceMethod::Absolute
        );
        assert_eq!(DistanceMethod::parse("ratio").unwrap(), DistanceMethod::Ratio);

        let err = DistanceMethod::parse("euclidean").unwrap_err();
        assert_eq!(
            err.to_string(),
            "method must be 'absolute' or 'ratio', got 'euclidean'."
        );
    }

    #[test]
    fn test_single_element_inputs() {
        let x: Series<f64> = Series::from_vec(vec![4.0]);
        let y: Series<f64> = Series::from_vec(vec![1.0]);
        let dtw = DynamicTimeWarping::new(&x, &y);
        assert_eq!(dtw.path(), &[(0, 0)]);
        let dist = dtw.distance(DistanceMethod::Absolute, false);
        assert_eq!(dist.as_slice(), &[3.0]);
    }
}
