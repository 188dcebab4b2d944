//! Error types for qqplot-core
//!
//! Wraps the qqplot-stats errors and adds the dataset-level failures:
//! unknown labels and operations on an empty dataset. All errors are
//! reported synchronously to the caller; there is no retry logic since
//! the computations are deterministic.

use thiserror::Error;

pub use qqplot_stats::StatsError;

/// Main error type for QQ dataset operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QqError {
    /// Invalid input or numerical failure from the statistics layer
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),

    /// A requested label was never added
    #[error("unknown series label: {label}")]
    UnknownLabel { label: String },

    /// max_size / confidence_band requested with zero series present
    #[error("dataset contains no series")]
    EmptyDataset,
}

/// Result type alias for QQ dataset operations
pub type QqResult<T> = Result<T, QqError>;
