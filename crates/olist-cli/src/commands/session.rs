//! Session setup shared by the commands
//!
//! This module contains:
//! - `resolve_config` - Work out where the dataset lives
//! - `load_dataset` - Load the snapshot once per session
//! - `parse_insight` - Validate an insight selection

use std::path::Path;

use anyhow::{Context, Result};
use olist_core::{Dataset, DatasetConfig, InsightId};

/// Resolve dataset config from --config, --data-dir and OLIST_DATA_DIR
pub fn resolve_config(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<DatasetConfig> {
    DatasetConfig::resolve(config_path, data_dir).context("Failed to resolve dataset config")
}

/// Load the dataset snapshot. Failure here ends the session.
pub fn load_dataset(config: &DatasetConfig) -> Result<Dataset> {
    Dataset::load(config).with_context(|| {
        format!(
            "Failed to load dataset from {} (set --data-dir or OLIST_DATA_DIR)",
            config.data_dir.display()
        )
    })
}

/// Parse an insight selection (menu number or name)
pub fn parse_insight(s: &str) -> Result<InsightId> {
    s.parse::<InsightId>().map_err(|e| anyhow::anyhow!(e))
}
