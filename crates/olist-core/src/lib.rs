//! Olist Core Library
//!
//! Shared functionality for the Olist dashboard:
//! - Dataset configuration (file locations, TOML overrides)
//! - CSV loading of the six dataset tables into one immutable snapshot
//! - Insight engine computing the ten dashboard questions

pub mod config;
pub mod dataset;
pub mod error;
pub mod insights;
pub mod models;

/// Sample dataset fixtures for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{DatasetConfig, DatasetFiles, DATA_DIR_ENV};
pub use dataset::{Dataset, TableSummary};
pub use error::{Error, Result};
pub use insights::{compute, compute_all, DisplayHint, Insight, InsightId, InsightValue};
pub use models::Table;
