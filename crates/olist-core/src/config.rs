//! Dataset configuration
//!
//! Tells the loader where the six CSV files live.
//!
//! ## Configuration Resolution
//!
//! The config file is picked in this order:
//! 1. Explicit path (`--config`)
//! 2. Override in data dir (~/.local/share/olist/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! The data directory from the file can then be overridden by the
//! `OLIST_DATA_DIR` environment variable, and that by `--data-dir`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Table;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/olist.toml");

/// Environment variable overriding the dataset directory
pub const DATA_DIR_ENV: &str = "OLIST_DATA_DIR";

/// File names of the six tables, relative to the data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFiles {
    pub customers: String,
    pub orders: String,
    pub order_items: String,
    pub order_payments: String,
    pub products: String,
    pub sellers: String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            customers: "customers_dataset.csv".to_string(),
            orders: "orders_dataset.csv".to_string(),
            order_items: "order_items_dataset.csv".to_string(),
            order_payments: "order_payments_dataset.csv".to_string(),
            products: "products_dataset.csv".to_string(),
            sellers: "sellers_dataset.csv".to_string(),
        }
    }
}

impl DatasetFiles {
    pub fn file_name(&self, table: Table) -> &str {
        match table {
            Table::Customers => &self.customers,
            Table::Orders => &self.orders,
            Table::OrderItems => &self.order_items,
            Table::OrderPayments => &self.order_payments,
            Table::Products => &self.products,
            Table::Sellers => &self.sellers,
        }
    }
}

/// Where to find the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub files: DatasetFiles,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            files: DatasetFiles::default(),
        }
    }
}

impl DatasetConfig {
    /// Config rooted at `data_dir` with the standard Olist file names
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            files: DatasetFiles::default(),
        }
    }

    /// Resolve the full configuration.
    ///
    /// `config_path` is an explicit config file (must exist when given),
    /// `data_dir` an explicit directory that beats every other source.
    pub fn resolve(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let env_dir = std::env::var(DATA_DIR_ENV).ok().filter(|v| !v.is_empty());
        let mut config = load_config(config_path)?;
        apply_overrides(&mut config, env_dir.as_deref(), data_dir);
        debug!(data_dir = %config.data_dir.display(), "Resolved dataset config");
        Ok(config)
    }

    /// Full path of one table's file
    pub fn path_for(&self, table: Table) -> PathBuf {
        self.data_dir.join(self.files.file_name(table))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("olist").join("config.toml"))
}

/// Load configuration (explicit path, then user override, then embedded default)
fn load_config(explicit: Option<&Path>) -> Result<DatasetConfig> {
    let content = if let Some(path) = explicit {
        fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?
    } else {
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Using config override");
                fs::read_to_string(&path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
            }
            _ => DEFAULT_CONFIG.to_string(),
        }
    };

    parse_config(&content)
}

/// `--data-dir` beats `OLIST_DATA_DIR`, which beats the config file
fn apply_overrides(config: &mut DatasetConfig, env_dir: Option<&str>, flag_dir: Option<&Path>) {
    if let Some(dir) = flag_dir {
        config.data_dir = dir.to_path_buf();
    } else if let Some(dir) = env_dir {
        config.data_dir = PathBuf::from(dir);
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    dataset: Option<RawDataset>,
    files: Option<RawFiles>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    data_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawFiles {
    customers: Option<String>,
    orders: Option<String>,
    order_items: Option<String>,
    order_payments: Option<String>,
    products: Option<String>,
    sellers: Option<String>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<DatasetConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = DatasetConfig::default();

    if let Some(dir) = raw.dataset.and_then(|d| d.data_dir) {
        config.data_dir = dir;
    }

    if let Some(files) = raw.files {
        let slots = [
            (files.customers, &mut config.files.customers),
            (files.orders, &mut config.files.orders),
            (files.order_items, &mut config.files.order_items),
            (files.order_payments, &mut config.files.order_payments),
            (files.products, &mut config.files.products),
            (files.sellers, &mut config.files.sellers),
        ];
        for (value, slot) in slots {
            if let Some(name) = value {
                *slot = name;
            }
        }
    }

    Ok(config)
}
