//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `session` - Session setup (config resolution, dataset loading, insight parsing)
//! - `insights` - Insight commands (menu, show, dashboard, list)
//! - `status` - Dataset status command
//!
//! Every command writes to the writer it is given, so tests can capture output.

pub mod insights;
pub mod session;
pub mod status;

// Re-export command functions for main.rs
pub use insights::*;
pub use session::*;
pub use status::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
