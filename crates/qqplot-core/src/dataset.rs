//! QQ dataset orchestration
//!
//! An insertion-ordered collection of named p-value series, plus the
//! derived outputs a renderer needs: per-series coordinates, the
//! dataset-wide confidence band, and axis extents. Everything is
//! computed on demand from current state; nothing is cached, so adding
//! a series is always reflected in the next band.

use serde::{Deserialize, Serialize};

use qqplot_stats::{transform, ConfidenceBand, QqPoint};

use crate::error::{QqError, QqResult};
use crate::series::Series;

pub use qqplot_stats::DEFAULT_ALPHA;

/// Default fraction of points to keep when thinning a series (keep all)
pub const DEFAULT_TOP_PERCENT: f64 = 100.0;

/// Ordered collection of named p-value series
///
/// Labels are unique; adding a series under an existing label overwrites
/// it in place, preserving its original position in the iteration order.
/// The confidence band is a dataset-wide property sized to the largest
/// series. For shorter series it is a known approximation, and the
/// renderer is responsible for horizontal alignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QqDataset {
    series: Vec<Series>,
}

impl QqDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a series, overwriting any existing series with the same label
    ///
    /// Last write wins; the overwritten series keeps its position in the
    /// iteration order. Computes nothing.
    pub fn add(&mut self, series: Series) {
        match self.series.iter_mut().find(|s| s.label() == series.label()) {
            Some(existing) => *existing = series,
            None => self.series.push(series),
        }
    }

    /// Series labels in insertion order
    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(Series::label).collect()
    }

    /// Look up a series by label
    pub fn get(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label() == label)
    }

    /// Number of series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Length of the longest stored series
    ///
    /// An explicit scan on every call, with no caching, so a band computed
    /// after an `add` always reflects the new maximum.
    pub fn max_size(&self) -> QqResult<usize> {
        self.series
            .iter()
            .map(Series::len)
            .max()
            .ok_or(QqError::EmptyDataset)
    }

    /// Sorted (expected, observed) coordinates for one series
    pub fn coordinates(&self, label: &str) -> QqResult<Vec<QqPoint>> {
        let series = self.get(label).ok_or_else(|| QqError::UnknownLabel {
            label: label.to_string(),
        })?;
        Ok(transform(series.values())?)
    }

    /// The top `percent`% tail of a series' coordinates
    ///
    /// Keeps the last floor(n * percent / 100) pairs: the largest
    /// observed values, which are the statistically interesting extreme
    /// tail. `percent` >= 100 keeps everything; `percent` <= 0 keeps
    /// nothing.
    pub fn top_fraction(&self, label: &str, percent: f64) -> QqResult<Vec<QqPoint>> {
        let mut points = self.coordinates(label)?;
        if percent <= 0.0 {
            points.clear();
            return Ok(points);
        }

        let n = points.len();
        let keep = ((n as f64) * percent / 100.0).floor() as usize;
        let keep = keep.min(n);
        Ok(points.split_off(n - keep))
    }

    /// Dataset-wide confidence band, sized to the largest series
    ///
    /// Recomputed from current state on every call; see
    /// [`ConfidenceBand::compute`].
    pub fn confidence_band(&self, alpha: f64) -> QqResult<ConfidenceBand> {
        Ok(ConfidenceBand::compute(self.max_size()?, alpha)?)
    }

    /// Upper limit of the expected axis: -log10(1/(N+1)) for N = max_size
    ///
    /// The largest expected coordinate any series can produce, used by
    /// the renderer to bound the x axis.
    pub fn expected_axis_max(&self) -> QqResult<f64> {
        let n = self.max_size()?;
        Ok(((n + 1) as f64).log10())
    }

    /// Maxima of the expected and observed coordinates across all series
    ///
    /// Returns (expected_max, observed_max) for renderer axis scaling.
    pub fn extent(&self) -> QqResult<(f64, f64)> {
        if self.series.is_empty() {
            return Err(QqError::EmptyDataset);
        }

        let mut expected_max = f64::NEG_INFINITY;
        let mut observed_max = f64::NEG_INFINITY;
        for series in &self.series {
            // Coordinates ascend in both components, so the last pair
            // carries the series maxima.
            let points = transform(series.values())?;
            if let Some(last) = points.last() {
                expected_max = expected_max.max(last.expected);
                observed_max = observed_max.max(last.observed);
            }
        }
        Ok((expected_max, observed_max))
    }
}
