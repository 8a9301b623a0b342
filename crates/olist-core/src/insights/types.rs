//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ten dashboard questions, numbered as they appear in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightId {
    TotalOrders,
    TopCategories,
    TotalRevenue,
    TopSellers,
    AverageDelivery,
    TopCities,
    PaymentMethods,
    MostExpensiveItems,
    SellersPerState,
    MonthlyOrders,
}

impl InsightId {
    /// All insights in menu order
    pub const ALL: [InsightId; 10] = [
        InsightId::TotalOrders,
        InsightId::TopCategories,
        InsightId::TotalRevenue,
        InsightId::TopSellers,
        InsightId::AverageDelivery,
        InsightId::TopCities,
        InsightId::PaymentMethods,
        InsightId::MostExpensiveItems,
        InsightId::SellersPerState,
        InsightId::MonthlyOrders,
    ];

    /// Menu number (1-10)
    pub fn number(&self) -> u8 {
        match self {
            Self::TotalOrders => 1,
            Self::TopCategories => 2,
            Self::TotalRevenue => 3,
            Self::TopSellers => 4,
            Self::AverageDelivery => 5,
            Self::TopCities => 6,
            Self::PaymentMethods => 7,
            Self::MostExpensiveItems => 8,
            Self::SellersPerState => 9,
            Self::MonthlyOrders => 10,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.number() == n)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalOrders => "total_orders",
            Self::TopCategories => "top_categories",
            Self::TotalRevenue => "total_revenue",
            Self::TopSellers => "top_sellers",
            Self::AverageDelivery => "average_delivery",
            Self::TopCities => "top_cities",
            Self::PaymentMethods => "payment_methods",
            Self::MostExpensiveItems => "most_expensive_items",
            Self::SellersPerState => "sellers_per_state",
            Self::MonthlyOrders => "monthly_orders",
        }
    }

    /// Heading shown above the rendered result
    pub fn title(&self) -> &'static str {
        match self {
            Self::TotalOrders => "Total Jumlah Pesanan",
            Self::TopCategories => "Kategori Produk Terpopuler",
            Self::TotalRevenue => "Total Revenue",
            Self::TopSellers => "Seller dengan Penjualan Terbanyak",
            Self::AverageDelivery => "Rata-rata Waktu Pengiriman",
            Self::TopCities => "Kota Customer Teraktif",
            Self::PaymentMethods => "Metode Pembayaran Populer",
            Self::MostExpensiveItems => "Produk Paling Mahal",
            Self::SellersPerState => "Jumlah Seller per State",
            Self::MonthlyOrders => "Distribusi Pesanan per Bulan",
        }
    }

    /// Menu label, e.g. "3. Total Revenue"
    pub fn label(&self) -> String {
        format!("{}. {}", self.number(), self.title())
    }
}

impl fmt::Display for InsightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightId {
    type Err = String;

    /// Accepts the menu number or the snake_case name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::from_number(n)
                .ok_or_else(|| format!("Unknown insight number: {} (valid: 1-10)", n));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown insight: {}", s))
    }
}

/// How a result should be drawn. Chosen by the recipe, not the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayHint {
    /// A single headline number
    Metric,
    /// Bar chart of labelled counts, largest first
    RankedBar,
    /// Raw rows
    Table,
    /// Line chart over calendar months
    TimeSeriesLine,
}

impl DisplayHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::RankedBar => "ranked_bar",
            Self::Table => "table",
            Self::TimeSeriesLine => "time_series_line",
        }
    }
}

impl fmt::Display for DisplayHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bar of a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    pub count: u64,
}

/// A projected order item line (order_id, product_id, price)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    pub order_id: String,
    pub product_id: String,
    /// None when the source price cell was empty
    pub price: Option<f64>,
}

/// Orders placed in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// "YYYY-MM"
    pub period: String,
    pub count: u64,
}

/// The value a recipe produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum InsightValue {
    Count(u64),
    /// Amount in BRL
    Currency(f64),
    /// Mean days; None when nothing qualified
    Days(Option<f64>),
    Ranking(Vec<RankedEntry>),
    PriceTable(Vec<PricedLine>),
    Monthly(Vec<MonthlyCount>),
}

impl InsightValue {
    /// Number of rows/bars (1 for metrics)
    pub fn len(&self) -> usize {
        match self {
            Self::Count(_) | Self::Currency(_) | Self::Days(_) => 1,
            Self::Ranking(entries) => entries.len(),
            Self::PriceTable(lines) => lines.len(),
            Self::Monthly(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Days(days) => days.is_none(),
            Self::Count(_) | Self::Currency(_) => false,
            _ => self.len() == 0,
        }
    }
}

/// A computed insight, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub id: InsightId,
    pub number: u8,
    pub title: &'static str,
    pub hint: DisplayHint,
    pub value: InsightValue,
}
