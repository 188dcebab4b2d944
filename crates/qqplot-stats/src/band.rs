//! Rank confidence band for uniform order statistics
//!
//! For n i.i.d. Uniform(0,1) draws, the k-th order statistic follows a
//! Beta(k, n+1-k) distribution. The band holds, per rank, the alpha and
//! 1-alpha quantiles of that distribution plus the expected value
//! k/(n+1): the pointwise acceptance region for a QQ plot under the
//! null hypothesis.
//!
//! # Parallel Processing
//!
//! When the `parallel` feature is enabled, the per-rank quantile
//! evaluations run on rayon. Each rank is independent, and for large n
//! the O(n) transcendental-function evaluations dominate the cost.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::beta::inv_beta_reg;
use crate::error::{StatsError, StatsResult};
use crate::transform::expected_quantiles;

/// Default per-rank significance level (a 99% pointwise band)
pub const DEFAULT_ALPHA: f64 = 0.01;

/// Pointwise acceptance band for sorted uniform order statistics
///
/// Three sequences of equal length n, one entry per rank k = 1..n, on
/// the raw (0, 1) probability scale. `lower[i] <= median[i] <= upper[i]`
/// for every i. Use [`ConfidenceBand::to_log10_scale`] for the display
/// mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    lower: Vec<f64>,
    median: Vec<f64>,
    upper: Vec<f64>,
}

impl ConfidenceBand {
    /// Compute the band for sample size `n` at significance level `alpha`
    ///
    /// `median[k-1]` is k/(n+1); `lower` and `upper` are the alpha and
    /// 1-alpha quantiles of Beta(k, n+1-k). Pure function of (n, alpha),
    /// recomputed on every call.
    ///
    /// # Errors
    ///
    /// - `InvalidSampleSize` for n = 0
    /// - `InvalidAlpha` for alpha outside the open interval (0, 1)
    /// - `NoConvergence` if an inverse beta evaluation exhausts its
    ///   iteration cap (a defect in the numerics, not a data condition)
    pub fn compute(n: usize, alpha: f64) -> StatsResult<Self> {
        if n < 1 {
            return Err(StatsError::InvalidSampleSize { n });
        }
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(StatsError::InvalidAlpha { alpha });
        }

        let median = expected_quantiles(n);

        let rank_bounds = |k: usize| -> StatsResult<(f64, f64)> {
            let a = k as f64;
            let b = (n + 1 - k) as f64;
            Ok((inv_beta_reg(a, b, alpha)?, inv_beta_reg(a, b, 1.0 - alpha)?))
        };

        #[cfg(feature = "parallel")]
        let bounds: Vec<(f64, f64)> = (1..=n)
            .into_par_iter()
            .map(rank_bounds)
            .collect::<StatsResult<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let bounds: Vec<(f64, f64)> = (1..=n).map(rank_bounds).collect::<StatsResult<_>>()?;

        let (lower, upper) = bounds.into_iter().unzip();

        Ok(Self {
            lower,
            median,
            upper,
        })
    }

    /// Lower acceptance bound per rank, ascending rank order
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Expected value per rank (k/(n+1)), ascending rank order
    pub fn median(&self) -> &[f64] {
        &self.median
    }

    /// Upper acceptance bound per rank, ascending rank order
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Number of ranks
    pub fn len(&self) -> usize {
        self.median.len()
    }

    pub fn is_empty(&self) -> bool {
        self.median.is_empty()
    }

    /// Map the band onto the -log10 display scale
    ///
    /// Each sequence is -log10 transformed and reversed so the result
    /// ascends with the expected axis of the coordinate transform.
    /// -log10 is decreasing, so the raw lower bound becomes the display
    /// upper envelope and vice versa; the returned band swaps them to
    /// keep `lower <= median <= upper`.
    pub fn to_log10_scale(&self) -> Self {
        let flip = |values: &[f64]| -> Vec<f64> {
            values.iter().rev().map(|v| -v.log10()).collect()
        };

        Self {
            lower: flip(&self.upper),
            median: flip(&self.median),
            upper: flip(&self.lower),
        }
    }
}
