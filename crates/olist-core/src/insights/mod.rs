//! Insight Engine - the ten dashboard questions
//!
//! Every insight is a pure function of the loaded [`Dataset`](crate::dataset::Dataset)
//! that returns a value plus a hint telling the shell how to draw it.
//!
//! ## Insights
//!
//! | # | Insight | Hint |
//! |---|---------|------|
//! | 1 | Distinct orders | metric |
//! | 2 | Top product categories | ranked bar |
//! | 3 | Total revenue | metric |
//! | 4 | Top sellers by item lines | ranked bar |
//! | 5 | Average delivery days | metric |
//! | 6 | Top customer cities | ranked bar |
//! | 7 | Payment methods | ranked bar |
//! | 8 | Most expensive item lines | table |
//! | 9 | Sellers per state | ranked bar |
//! | 10 | Orders per month | time series |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use olist_core::insights::{compute, InsightId};
//!
//! let dataset = Dataset::load(&config)?;
//! let insight = compute(&dataset, InsightId::TotalRevenue);
//! ```

pub mod aggregate;
pub mod engine;
pub mod recipes;
pub mod types;

pub use engine::{compute, compute_all, display_hint};
pub use types::{
    DisplayHint, Insight, InsightId, InsightValue, MonthlyCount, PricedLine, RankedEntry,
};
