//! Status command implementation

use std::io::Write;

use anyhow::Result;
use olist_core::{Dataset, DatasetConfig, Table, DATA_DIR_ENV};

use crate::render::format_thousands;

/// Print where each table is read from and, if the dataset loads, its size.
///
/// A dataset that fails to load is reported, not returned as an error.
pub fn cmd_status<W: Write>(out: &mut W, config: &DatasetConfig) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 Olist Status")?;
    writeln!(
        out,
        "   ─────────────────────────────────────────────────────────────"
    )?;
    writeln!(out, "   Data dir: {}", config.data_dir.display())?;
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        writeln!(out, "   ({} is set to {})", DATA_DIR_ENV, dir)?;
    }
    writeln!(out)?;

    let mut missing = 0;
    for table in Table::ALL {
        let path = config.path_for(table);
        let marker = if path.is_file() {
            "✓"
        } else {
            missing += 1;
            "✗"
        };
        writeln!(out, "   {} {:16} {}", marker, table.as_str(), path.display())?;
    }

    writeln!(out)?;
    if missing > 0 {
        writeln!(out, "   ❌ {} of {} files missing", missing, Table::ALL.len())?;
        writeln!(out, "      Set --data-dir or {}", DATA_DIR_ENV)?;
        writeln!(out)?;
        return Ok(());
    }

    match Dataset::load(config) {
        Ok(dataset) => {
            for summary in dataset.summary() {
                writeln!(
                    out,
                    "   {:16} {:>10} rows",
                    summary.table.as_str(),
                    format_thousands(summary.rows as u64)
                )?;
            }
        }
        Err(e) => {
            writeln!(out, "   ❌ Error loading dataset: {}", e)?;
            if let Some(source) = std::error::Error::source(&e) {
                writeln!(out, "      {}", source)?;
            }
        }
    }

    writeln!(out)?;
    Ok(())
}
