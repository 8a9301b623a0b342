//! Domain models for the Olist dataset
//!
//! One struct per table row. Only the columns the insights read are kept;
//! the loader ignores everything else in the source files.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered customer (`customers_dataset.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,
}

/// An order header (`orders_dataset.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub purchased_at: NaiveDateTime,
    /// None while the order has not reached the customer
    pub delivered_at: Option<NaiveDateTime>,
}

impl Order {
    /// Whole days between purchase and delivery, floored.
    ///
    /// Returns None for undelivered orders.
    pub fn delivery_days(&self) -> Option<i64> {
        let delivered = self.delivered_at?;
        let seconds = (delivered - self.purchased_at).num_seconds();
        Some(seconds.div_euclid(SECONDS_PER_DAY))
    }
}

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// One item line of an order (`order_items_dataset.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub product_id: String,
    pub seller_id: String,
    /// None when the price cell is empty
    pub price: Option<f64>,
}

/// One payment row of an order (`order_payments_dataset.csv`)
///
/// Orders paid in installments or with vouchers have several rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayment {
    pub order_id: String,
    pub payment_type: Option<String>,
    /// None when the value cell is empty
    pub payment_value: Option<f64>,
}

/// A catalogue product (`products_dataset.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_category_name: Option<String>,
}

/// A marketplace seller (`sellers_dataset.csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub seller_id: String,
    pub seller_state: Option<String>,
}

/// The six dataset tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Customers,
    Orders,
    OrderItems,
    OrderPayments,
    Products,
    Sellers,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::Customers,
        Table::Orders,
        Table::OrderItems,
        Table::OrderPayments,
        Table::Products,
        Table::Sellers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Orders => "orders",
            Self::OrderItems => "order_items",
            Self::OrderPayments => "order_payments",
            Self::Products => "products",
            Self::Sellers => "sellers",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
