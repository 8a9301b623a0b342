//! Insight command implementations (menu, show, dashboard, list)

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use olist_core::insights::display_hint;
use olist_core::{compute, compute_all, Dataset, InsightId};
use serde_json::json;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::render::{render_insight, render_menu};

const PROMPT: &str = "Pilih pertanyaan (1-10, q untuk keluar): ";

pub fn cmd_list<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = InsightId::ALL
                .iter()
                .map(|&id| {
                    json!({
                        "id": id.as_str(),
                        "number": id.number(),
                        "title": id.title(),
                        "hint": display_hint(id).as_str(),
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", render_menu())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn cmd_show<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    id: InsightId,
    format: OutputFormat,
) -> Result<()> {
    let insight = compute(dataset, id);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&insight)
                .with_context(|| format!("Failed to serialize insight {}", id))?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", render_insight(&insight))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn cmd_dashboard<W: Write>(out: &mut W, dataset: &Dataset, format: OutputFormat) -> Result<()> {
    let insights = compute_all(dataset);
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&insights)?)?;
        }
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(out, "╭─────────────────────────────────────────╮")?;
            writeln!(out, "│       🛒 Olist E-Commerce Dashboard     │")?;
            writeln!(out, "╰─────────────────────────────────────────╯")?;
            for insight in &insights {
                writeln!(out, "{}", render_insight(insight))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Interactive loop: show the menu, read a selection, render it, repeat.
///
/// Ends on `q`, `quit`, `exit` or end of input. Unknown selections print a
/// hint and keep the session going.
pub fn cmd_menu<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    dataset: &Dataset,
    format: OutputFormat,
) -> Result<()> {
    writeln!(out, "{}", render_menu())?;

    let mut line = String::new();
    loop {
        writeln!(out)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read selection")? == 0 {
            writeln!(out)?;
            break;
        }

        let choice = line.trim();
        match choice.to_lowercase().as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "m" | "menu" | "?" => {
                writeln!(out, "{}", render_menu())?;
                continue;
            }
            _ => {}
        }

        match choice.parse::<InsightId>() {
            Ok(id) => {
                debug!("Menu selection: {}", id);
                cmd_show(out, dataset, id, format)?;
            }
            Err(e) => {
                writeln!(out, "   ⚠️  {}", e)?;
                writeln!(out, "      Enter 1-10, 'm' for the menu, or 'q' to quit")?;
            }
        }
    }

    writeln!(out, "👋 Sampai jumpa!")?;
    Ok(())
}
