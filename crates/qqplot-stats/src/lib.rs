//! qqplot-stats - Statistical primitives for QQ plots
//!
//! This crate provides the order-statistics machinery behind QQ plots
//! of p-values:
//!
//! - **beta**: regularized incomplete beta function and its inverse
//! - **band**: pointwise confidence band for uniform order statistics
//! - **transform**: p-value series to -log10 (expected, observed) pairs
//!
//! # Design Philosophy
//!
//! Everything here is a pure function of its inputs: no caching, no
//! I/O, no global state. The rendering of points and bands lives in a
//! separate collaborator; this crate only produces the numbers.

pub mod band;
pub mod beta;
pub mod error;
pub mod transform;

pub use band::*;
pub use beta::*;
pub use error::*;
pub use transform::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
