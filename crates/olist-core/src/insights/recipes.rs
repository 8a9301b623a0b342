//! The ten insight recipes
//!
//! Each recipe is a pure function of the dataset: filter/join, group or
//! sort, truncate, project. None of them can fail; empty input produces
//! empty rankings, zero totals, or "no data" for the delivery average.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Datelike;

use super::aggregate::{present, top_n, value_counts, TOP_N};
use super::types::{InsightValue, MonthlyCount, PricedLine};
use crate::dataset::Dataset;

/// 1. Distinct order ids
pub fn total_orders(dataset: &Dataset) -> InsightValue {
    let distinct: HashSet<&str> = dataset
        .orders()
        .iter()
        .filter_map(|o| present(&o.order_id))
        .collect();
    InsightValue::Count(distinct.len() as u64)
}

/// 2. Item lines per product category (items joined to products)
pub fn top_categories(dataset: &Dataset) -> InsightValue {
    let mut categories: HashMap<&str, Vec<Option<&str>>> = HashMap::new();
    for product in dataset.products() {
        categories
            .entry(product.product_id.as_str())
            .or_default()
            .push(product.product_category_name.as_deref());
    }

    // Inner join: items without a product row drop out
    let joined = dataset
        .order_items()
        .iter()
        .filter_map(|item| categories.get(item.product_id.as_str()))
        .flatten()
        .copied();

    InsightValue::Ranking(top_n(value_counts(joined), TOP_N))
}

/// 3. Sum of every payment row; empty values are skipped
pub fn total_revenue(dataset: &Dataset) -> InsightValue {
    let total: f64 = dataset
        .order_payments()
        .iter()
        .filter_map(|p| p.payment_value)
        .sum();
    InsightValue::Currency(total)
}

/// 4. Item lines sold per seller
pub fn top_sellers(dataset: &Dataset) -> InsightValue {
    let sellers = dataset
        .order_items()
        .iter()
        .map(|item| present(&item.seller_id));
    InsightValue::Ranking(top_n(value_counts(sellers), TOP_N))
}

/// 5. Mean whole days from purchase to delivery, delivered orders only
pub fn average_delivery(dataset: &Dataset) -> InsightValue {
    let (total, delivered) = dataset
        .orders()
        .iter()
        .filter_map(|o| o.delivery_days())
        .fold((0i64, 0u64), |(sum, n), days| (sum + days, n + 1));

    let mean = (delivered > 0).then(|| total as f64 / delivered as f64);
    InsightValue::Days(mean)
}

/// 6. Registered customers per city
pub fn top_cities(dataset: &Dataset) -> InsightValue {
    let cities = dataset
        .customers()
        .iter()
        .map(|c| c.customer_city.as_deref());
    InsightValue::Ranking(top_n(value_counts(cities), TOP_N))
}

/// 7. Payment rows per payment type, all types
pub fn payment_methods(dataset: &Dataset) -> InsightValue {
    let kinds = dataset
        .order_payments()
        .iter()
        .map(|p| p.payment_type.as_deref());
    InsightValue::Ranking(value_counts(kinds))
}

/// 8. The ten priciest item lines. Lines without a price sort last.
pub fn most_expensive_items(dataset: &Dataset) -> InsightValue {
    let mut items: Vec<_> = dataset.order_items().iter().collect();
    // Stable: equal prices keep row order
    items.sort_by(|a, b| price_desc(a.price, b.price));

    let lines = items
        .into_iter()
        .take(TOP_N)
        .map(|item| PricedLine {
            order_id: item.order_id.clone(),
            product_id: item.product_id.clone(),
            price: item.price,
        })
        .collect();
    InsightValue::PriceTable(lines)
}

fn price_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 9. Sellers per state, all states
pub fn sellers_per_state(dataset: &Dataset) -> InsightValue {
    let states = dataset
        .sellers()
        .iter()
        .map(|s| s.seller_state.as_deref());
    InsightValue::Ranking(value_counts(states))
}

/// 10. Orders per purchase month, in calendar order. Rows without an
/// order id are not counted, matching insight 1.
pub fn monthly_orders(dataset: &Dataset) -> InsightValue {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for order in dataset.orders() {
        if present(&order.order_id).is_none() {
            continue;
        }
        let key = (order.purchased_at.year(), order.purchased_at.month());
        *buckets.entry(key).or_insert(0) += 1;
    }

    let points = buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            period: format!("{:04}-{:02}", year, month),
            count,
        })
        .collect();
    InsightValue::Monthly(points)
}
