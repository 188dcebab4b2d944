//! qqplot-core - QQ plot dataset engine
//!
//! This crate owns the data side of a QQ plot for statistical
//! significance testing: named series of p-values, their transformation
//! into -log10 rank coordinates, and the order-statistics confidence
//! band sized to the largest series.
//!
//! # Key Components
//!
//! - **Series**: a labeled p-value array with opaque display attributes
//! - **QqDataset**: insertion-ordered series collection with on-demand
//!   coordinates, bands, and axis extents
//! - **QqError**: dataset-level error taxonomy wrapping the stats layer
//!
//! Drawing points, bands, axes, and legends is the job of a rendering
//! collaborator; this crate hands it plain coordinate sequences and
//! never performs I/O.

pub mod dataset;
pub mod error;
pub mod series;

pub use dataset::*;
pub use error::*;
pub use series::*;

pub use qqplot_stats::{ConfidenceBand, QqPoint};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
