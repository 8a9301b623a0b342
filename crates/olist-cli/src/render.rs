//! Terminal rendering for insights
//!
//! One renderer per display hint: metric, ranked bar chart, table and
//! monthly line chart. Renderers build a `String`; commands decide where
//! it goes.

use olist_core::insights::{MonthlyCount, PricedLine, RankedEntry};
use olist_core::{DisplayHint, Insight, InsightId, InsightValue};

use crate::commands::truncate;

const RULE: &str = "   ─────────────────────────────────────────────────────────────";

/// Width of the longest bar, in characters
const BAR_WIDTH: usize = 40;

/// Longest label shown in a bar chart (Olist ids are 32 chars)
const MAX_LABEL_WIDTH: usize = 32;

const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn icon(id: InsightId) -> &'static str {
    match id {
        InsightId::TotalOrders => "🧮",
        InsightId::TopCategories => "📦",
        InsightId::TotalRevenue => "💰",
        InsightId::TopSellers => "🏆",
        InsightId::AverageDelivery => "🚚",
        InsightId::TopCities => "🏙️",
        InsightId::PaymentMethods => "💳",
        InsightId::MostExpensiveItems => "💎",
        InsightId::SellersPerState => "🗺️",
        InsightId::MonthlyOrders => "📅",
    }
}

/// Caption next to a metric value
fn metric_caption(id: InsightId) -> &'static str {
    match id {
        InsightId::TotalOrders => "Total Orders",
        InsightId::TotalRevenue => "Total Revenue (BRL)",
        InsightId::AverageDelivery => "Rata-rata Hari Pengiriman",
        other => other.title(),
    }
}

/// The insight selector shown by the interactive menu and `list`
pub fn render_menu() -> String {
    let mut lines = vec![
        String::new(),
        "🧭 Insight Navigator".to_string(),
        RULE.to_string(),
    ];
    lines.extend(InsightId::ALL.iter().map(|id| format!("   {}", id.label())));
    lines.join("\n")
}

/// Render one insight according to its display hint
pub fn render_insight(insight: &Insight) -> String {
    let mut lines = vec![
        String::new(),
        format!("{} {}", icon(insight.id), insight.title),
        RULE.to_string(),
    ];

    let body = match (insight.hint, &insight.value) {
        (DisplayHint::Metric, value) => vec![render_metric(insight.id, value)],
        (_, value) if value.is_empty() => vec!["   No data.".to_string()],
        (DisplayHint::RankedBar, InsightValue::Ranking(entries)) => render_ranking(entries),
        (DisplayHint::Table, InsightValue::PriceTable(rows)) => render_price_table(rows),
        (DisplayHint::TimeSeriesLine, InsightValue::Monthly(points)) => render_monthly(points),
        (hint, value) => vec![format!("   ({} view) {:?}", hint, value)],
    };

    lines.extend(body);
    lines.join("\n")
}

fn render_metric(id: InsightId, value: &InsightValue) -> String {
    let shown = match value {
        InsightValue::Count(n) => format_thousands(*n),
        InsightValue::Currency(amount) => format_currency(*amount),
        InsightValue::Days(days) => format_days(*days),
        other => format!("{:?}", other),
    };
    format!("   {}: {}", metric_caption(id), shown)
}

fn render_ranking(entries: &[RankedEntry]) -> Vec<String> {
    let max = entries.iter().map(|e| e.count).max().unwrap_or(0);
    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(5, MAX_LABEL_WIDTH);

    let mut lines = vec![
        format!(
            "   {:>3} │ {:label_width$} │ {:>8} │",
            "#", "Label", "Count"
        ),
        format!(
            "   ────┼─{}─┼──────────┼─{}",
            "─".repeat(label_width),
            "─".repeat(BAR_WIDTH)
        ),
    ];

    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "   {:>3} │ {:label_width$} │ {:>8} │ {}",
            i + 1,
            truncate(&entry.label, label_width),
            format_thousands(entry.count),
            bar(entry.count, max, BAR_WIDTH)
        ));
    }
    lines
}

fn render_price_table(rows: &[PricedLine]) -> Vec<String> {
    let mut lines = vec![
        format!(
            "   {:>3} │ {:32} │ {:32} │ {:>12}",
            "#", "order_id", "product_id", "price"
        ),
        format!(
            "   ────┼─{}─┼─{}─┼─{}",
            "─".repeat(32),
            "─".repeat(32),
            "─".repeat(12)
        ),
    ];

    for (i, row) in rows.iter().enumerate() {
        lines.push(format!(
            "   {:>3} │ {:32} │ {:32} │ {:>12}",
            i + 1,
            row.order_id,
            row.product_id,
            row.price.map(format_amount).unwrap_or_else(|| "-".to_string())
        ));
    }
    lines
}

fn render_monthly(points: &[MonthlyCount]) -> Vec<String> {
    let max = points.iter().map(|p| p.count).max().unwrap_or(0);
    let total: u64 = points.iter().map(|p| p.count).sum();

    let mut lines = vec![
        format!("   {:8} │ {:>8} │", "Period", "Orders"),
        format!("   ─────────┼──────────┼─{}", "─".repeat(BAR_WIDTH)),
    ];

    for point in points {
        lines.push(format!(
            "   {:8} │ {:>8} │ {}",
            point.period,
            format_thousands(point.count),
            bar(point.count, max, BAR_WIDTH)
        ));
    }

    let counts: Vec<u64> = points.iter().map(|p| p.count).collect();
    lines.push("   ─────────┼──────────┼".to_string());
    lines.push(format!("   {:8} │ {:>8} │", "Total", format_thousands(total)));
    lines.push(format!("   Trend: {}", sparkline(&counts)));
    lines
}

/// Horizontal bar scaled so `max` fills `width`. Non-zero counts get at least one block.
pub fn bar(count: u64, max: u64, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let len = ((count as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(len.clamp(1, width))
}

/// One block character per value, scaled to the largest value
pub fn sparkline(values: &[u64]) -> String {
    let max = values.iter().copied().max().unwrap_or(0);
    values
        .iter()
        .map(|&v| {
            if max == 0 {
                return SPARKS[0];
            }
            let level = ((v as f64 / max as f64) * 7.0).round() as usize;
            SPARKS[level.min(SPARKS.len() - 1)]
        })
        .collect()
}

/// 99441 -> "99,441"
pub fn format_thousands(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// 1234.5 -> "1,234.50"
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), cents)
}

/// 1234.5 -> "R$ 1,234.50"
pub fn format_currency(amount: f64) -> String {
    format!("R$ {}", format_amount(amount))
}

/// Some(3.5) -> "3.50 hari"
pub fn format_days(days: Option<f64>) -> String {
    match days {
        Some(d) => format!("{:.2} hari", d),
        None => "No data (no delivered orders)".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight(id: InsightId, hint: DisplayHint, value: InsightValue) -> Insight {
        Insight {
            id,
            number: id.number(),
            title: id.title(),
            hint,
            value,
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(99441), "99,441");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(85.0), "R$ 85.00");
        assert_eq!(format_currency(16008872.12), "R$ 16,008,872.12");
        assert_eq!(format_currency(0.0), "R$ 0.00");
        assert_eq!(format_currency(-1500.5), "R$ -1,500.50");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(Some(3.5)), "3.50 hari");
        assert_eq!(format_days(Some(12.0958)), "12.10 hari");
        assert!(format_days(None).starts_with("No data"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10, 10, 40).chars().count(), 40);
        assert_eq!(bar(5, 10, 40).chars().count(), 20);
        // Tiny counts still show up
        assert_eq!(bar(1, 10_000, 40).chars().count(), 1);
        assert_eq!(bar(0, 10, 40), "");
        assert_eq!(bar(3, 0, 40), "");
    }

    #[test]
    fn test_sparkline() {
        assert_eq!(sparkline(&[1, 8]), "▂█");
        assert_eq!(sparkline(&[4, 4, 4]), "███");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_render_menu_lists_all_labels() {
        let menu = render_menu();
        assert!(menu.contains("1. Total Jumlah Pesanan"));
        assert!(menu.contains("5. Rata-rata Waktu Pengiriman"));
        assert!(menu.contains("10. Distribusi Pesanan per Bulan"));
    }

    #[test]
    fn test_render_metric() {
        let out = render_insight(&insight(
            InsightId::TotalRevenue,
            DisplayHint::Metric,
            InsightValue::Currency(85.0),
        ));
        assert!(out.contains("💰 Total Revenue"));
        assert!(out.contains("Total Revenue (BRL): R$ 85.00"));
    }

    #[test]
    fn test_render_ranking() {
        let out = render_insight(&insight(
            InsightId::SellersPerState,
            DisplayHint::RankedBar,
            InsightValue::Ranking(vec![
                RankedEntry {
                    label: "SP".into(),
                    count: 2,
                },
                RankedEntry {
                    label: "RJ".into(),
                    count: 1,
                },
            ]),
        ));
        let bar_len = |label: &str| {
            let row = out.lines().find(|l| l.contains(label)).unwrap();
            row.chars().filter(|&c| c == '█').count()
        };
        assert_eq!(bar_len(" │ SP "), BAR_WIDTH);
        assert_eq!(bar_len(" │ RJ "), BAR_WIDTH / 2);
    }

    #[test]
    fn test_render_empty_ranking() {
        let out = render_insight(&insight(
            InsightId::TopCities,
            DisplayHint::RankedBar,
            InsightValue::Ranking(vec![]),
        ));
        assert!(out.contains("No data."));
    }

    #[test]
    fn test_render_price_table() {
        let out = render_insight(&insight(
            InsightId::MostExpensiveItems,
            DisplayHint::Table,
            InsightValue::PriceTable(vec![
                PricedLine {
                    order_id: "0812eb902a67711a1cb742b3cdaa65ae".into(),
                    product_id: "489ae2aa008f021502940f251d4cce7f".into(),
                    price: Some(6735.0),
                },
                PricedLine {
                    order_id: "o-unpriced".into(),
                    product_id: "p-unpriced".into(),
                    price: None,
                },
            ]),
        ));
        assert!(out.contains("0812eb902a67711a1cb742b3cdaa65ae"));
        assert!(out.contains("489ae2aa008f021502940f251d4cce7f"));
        assert!(out.contains("6,735.00"));
        let unpriced = out.lines().find(|l| l.contains("o-unpriced")).unwrap();
        assert!(unpriced.trim_end().ends_with(" -"));
    }

    #[test]
    fn test_render_monthly() {
        let out = render_insight(&insight(
            InsightId::MonthlyOrders,
            DisplayHint::TimeSeriesLine,
            InsightValue::Monthly(vec![
                MonthlyCount {
                    period: "2018-01".into(),
                    count: 2,
                },
                MonthlyCount {
                    period: "2018-03".into(),
                    count: 1,
                },
            ]),
        ));
        let jan = out.find("2018-01").unwrap();
        let mar = out.find("2018-03").unwrap();
        assert!(jan < mar);
        assert!(out.contains("Trend: █▅"));
    }

    #[test]
    fn test_render_no_delivered_orders() {
        let out = render_insight(&insight(
            InsightId::AverageDelivery,
            DisplayHint::Metric,
            InsightValue::Days(None),
        ));
        assert!(out.contains("Rata-rata Hari Pengiriman: No data"));
    }
}
