//! P-value to QQ coordinate transform
//!
//! Maps a raw p-value series onto (expected, observed) pairs on the
//! -log10 scale. Under the null hypothesis the pairs lie near the y = x
//! line; departures in the upper tail are the statistically interesting
//! signal.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// One plottable QQ coordinate on the -log10 scale
///
/// Both components are non-negative since -log10 of a value in (0, 1]
/// is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QqPoint {
    /// Expected -log10 quantile under the uniform null
    pub expected: f64,
    /// Observed -log10 p-value
    pub observed: f64,
}

impl QqPoint {
    pub fn new(expected: f64, observed: f64) -> Self {
        Self { expected, observed }
    }
}

/// Expected Uniform(0, 1) order statistics for a sample of size `n`
///
/// Returns k/(n+1) for k = 1..n: the n equally spaced points strictly
/// between 0 and 1, ascending. This is both the band median and the
/// pre-transform expected axis of the QQ plot. Empty for n = 0.
pub fn expected_quantiles(n: usize) -> Vec<f64> {
    let denom = (n + 1) as f64;
    (1..=n).map(|k| k as f64 / denom).collect()
}

/// Transform a p-value series into sorted QQ coordinates
///
/// `observed` is the ascending sort of -log10(p). `expected` is
/// -log10 of the uniform quantiles, reversed so it ascends in lockstep
/// with `observed`. -log10 is decreasing, so without the flip the
/// smallest observed value would pair with the largest expected one.
///
/// # Errors
///
/// - `EmptySeries` for an empty input
/// - `InvalidPValue` for any value outside (0, 1] or non-finite
pub fn transform(pvalues: &[f64]) -> StatsResult<Vec<QqPoint>> {
    if pvalues.is_empty() {
        return Err(StatsError::EmptySeries);
    }

    let mut observed = Vec::with_capacity(pvalues.len());
    for &p in pvalues {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(StatsError::InvalidPValue { value: p });
        }
        observed.push(-p.log10());
    }
    observed.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = observed.len();
    let expected = expected_quantiles(n);

    Ok(expected
        .iter()
        .rev()
        .zip(observed)
        .map(|(&q, obs)| QqPoint::new(-q.log10(), obs))
        .collect())
}
