//! Error types for the Olist dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{table}: missing column '{column}'")]
    MissingColumn { table: &'static str, column: &'static str },

    #[error("{table}: row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        table: &'static str,
        row: u64,
        column: &'static str,
        value: String,
    },

    #[error("Failed to load {table} from {path}")]
    Load {
        table: &'static str,
        path: String,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
