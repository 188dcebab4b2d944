//! Error types for qqplot-stats
//!
//! Covers two failure classes:
//! - Invalid input (p-values outside the domain, empty series, bad
//!   significance levels or sample sizes)
//! - Numerical failure of the inverse incomplete beta iteration

use thiserror::Error;

/// Errors from the statistical primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A p-value outside (0, 1] or non-finite
    #[error("p-value must be in (0, 1], got {value}")]
    InvalidPValue { value: f64 },

    /// An empty series has no quantiles to assign
    #[error("cannot transform an empty series")]
    EmptySeries,

    /// Significance level outside the open interval (0, 1)
    #[error("significance level must be in (0, 1), got {alpha}")]
    InvalidAlpha { alpha: f64 },

    /// A confidence band needs at least one rank
    #[error("sample size must be at least 1, got {n}")]
    InvalidSampleSize { n: usize },

    /// Non-positive or non-finite beta shape parameter
    #[error("beta shape parameters must be finite and positive, got ({a}, {b})")]
    InvalidShape { a: f64, b: f64 },

    /// The inverse incomplete beta iteration hit its cap without
    /// converging. For a rank-k bound this means a = k, b = n + 1 - k,
    /// p = alpha, so the offending (k, n, alpha) can be read off directly.
    #[error("inverse incomplete beta failed to converge for Beta({a}, {b}) at p = {p}")]
    NoConvergence { a: f64, b: f64, p: f64 },
}

/// Result type alias for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
