//! Dataset loading
//!
//! Reads the six Olist CSV tables into one immutable [`Dataset`] snapshot.
//! Columns are looked up by header name, so column order and extra columns
//! in the source files don't matter. Any failure aborts the whole load.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{Reader, ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::error::{Error, Result};
use crate::models::{Customer, Order, OrderItem, OrderPayment, Product, Seller, Table};

/// Timestamp layouts accepted for order dates, tried in order
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// The six tables, loaded once and never mutated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    order_items: Vec<OrderItem>,
    order_payments: Vec<OrderPayment>,
    products: Vec<Product>,
    sellers: Vec<Seller>,
}

/// Row count of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub table: Table,
    pub rows: usize,
}

impl Dataset {
    /// Load all six tables from the configured directory
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        debug!(data_dir = %config.data_dir.display(), "Loading dataset");

        let dataset = Self {
            customers: load_table(config, Table::Customers, parse_customers)?,
            orders: load_table(config, Table::Orders, parse_orders)?,
            order_items: load_table(config, Table::OrderItems, parse_order_items)?,
            order_payments: load_table(config, Table::OrderPayments, parse_order_payments)?,
            products: load_table(config, Table::Products, parse_products)?,
            sellers: load_table(config, Table::Sellers, parse_sellers)?,
        };

        Ok(dataset)
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_order_items(mut self, order_items: Vec<OrderItem>) -> Self {
        self.order_items = order_items;
        self
    }

    pub fn with_order_payments(mut self, order_payments: Vec<OrderPayment>) -> Self {
        self.order_payments = order_payments;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_sellers(mut self, sellers: Vec<Seller>) -> Self {
        self.sellers = sellers;
        self
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_items(&self) -> &[OrderItem] {
        &self.order_items
    }

    pub fn order_payments(&self) -> &[OrderPayment] {
        &self.order_payments
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    pub fn row_count(&self, table: Table) -> usize {
        match table {
            Table::Customers => self.customers.len(),
            Table::Orders => self.orders.len(),
            Table::OrderItems => self.order_items.len(),
            Table::OrderPayments => self.order_payments.len(),
            Table::Products => self.products.len(),
            Table::Sellers => self.sellers.len(),
        }
    }

    /// Row counts for every table, in [`Table::ALL`] order
    pub fn summary(&self) -> Vec<TableSummary> {
        Table::ALL
            .iter()
            .map(|&table| TableSummary {
                table,
                rows: self.row_count(table),
            })
            .collect()
    }
}

fn load_table<T>(
    config: &DatasetConfig,
    table: Table,
    parse: impl FnOnce(File) -> Result<Vec<T>>,
) -> Result<Vec<T>> {
    let path = config.path_for(table);
    let wrap = |source: Error| Error::Load {
        table: table.as_str(),
        path: path.display().to_string(),
        source: Box::new(source),
    };

    let file = File::open(&path).map_err(|e| wrap(e.into()))?;
    let rows = parse(file).map_err(wrap)?;

    info!(table = table.as_str(), rows = rows.len(), "Loaded table");
    Ok(rows)
}

/// Header name -> column index for one table
struct Columns {
    table: Table,
    index: HashMap<String, usize>,
}

impl Columns {
    fn read<R: Read>(rdr: &mut Reader<R>, table: Table) -> Result<Self> {
        let headers = rdr.headers()?;
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (normalize_header(name), i))
            .collect();
        Ok(Self { table, index })
    }

    fn require(&self, column: &'static str) -> Result<Column> {
        self.index
            .get(column)
            .map(|&index| Column {
                table: self.table,
                name: column,
                index,
            })
            .ok_or(Error::MissingColumn {
                table: self.table.as_str(),
                column,
            })
    }
}

/// A resolved column, able to pull and convert its cell from a record
#[derive(Clone, Copy)]
struct Column {
    table: Table,
    name: &'static str,
    index: usize,
}

impl Column {
    /// Raw cell text; short rows read as empty
    fn raw<'r>(&self, record: &'r StringRecord) -> &'r str {
        record.get(self.index).unwrap_or("")
    }

    fn text(&self, record: &StringRecord) -> String {
        self.raw(record).to_string()
    }

    /// Empty cells are absent
    fn optional_text(&self, record: &StringRecord) -> Option<String> {
        let value = self.raw(record).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    fn money(&self, record: &StringRecord) -> Result<f64> {
        let raw = self.raw(record);
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(record, raw))
    }

    /// Empty cells are absent; anything else must be a finite number
    fn optional_money(&self, record: &StringRecord) -> Result<Option<f64>> {
        if self.raw(record).trim().is_empty() {
            return Ok(None);
        }
        self.money(record).map(Some)
    }

    fn timestamp(&self, record: &StringRecord) -> Result<NaiveDateTime> {
        let raw = self.raw(record);
        parse_timestamp(raw).ok_or_else(|| self.invalid(record, raw))
    }

    fn optional_timestamp(&self, record: &StringRecord) -> Result<Option<NaiveDateTime>> {
        if self.raw(record).trim().is_empty() {
            return Ok(None);
        }
        self.timestamp(record).map(Some)
    }

    fn invalid(&self, record: &StringRecord, value: &str) -> Error {
        Error::InvalidValue {
            table: self.table.as_str(),
            row: record.position().map(|p| p.line()).unwrap_or_default(),
            column: self.name,
            value: value.to_string(),
        }
    }
}

fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}

fn csv_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

/// Parse an order timestamp. Date-only values mean midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse `customers_dataset.csv`
pub fn parse_customers<R: Read>(reader: R) -> Result<Vec<Customer>> {
    let mut rdr = csv_reader(reader);
    let columns = Columns::read(&mut rdr, Table::Customers)?;
    let id = columns.require("customer_id")?;
    let city = columns.require("customer_city")?;
    let state = columns.require("customer_state")?;

    let mut customers = Vec::new();
    for result in rdr.records() {
        let record = result?;
        customers.push(Customer {
            customer_id: id.text(&record),
            customer_city: city.optional_text(&record),
            customer_state: state.optional_text(&record),
        });
    }

    debug!("Parsed {} customers", customers.len());
    Ok(customers)
}

/// Parse `orders_dataset.csv`, including both timestamp columns
pub fn parse_orders<R: Read>(reader: R) -> Result<Vec<Order>> {
    let mut rdr = csv_reader(reader);
    let columns = Columns::read(&mut rdr, Table::Orders)?;
    let id = columns.require("order_id")?;
    let customer = columns.require("customer_id")?;
    let purchased = columns.require("order_purchase_timestamp")?;
    let delivered = columns.require("order_delivered_customer_date")?;

    let mut orders = Vec::new();
    for result in rdr.records() {
        let record = result?;
        orders.push(Order {
            order_id: id.text(&record),
            customer_id: customer.text(&record),
            purchased_at: purchased.timestamp(&record)?,
            delivered_at: delivered.optional_timestamp(&record)?,
        });
    }

    debug!("Parsed {} orders", orders.len());
    Ok(orders)
}

/// Parse `order_items_dataset.csv`
pub fn parse_order_items<R: Read>(reader: R) -> Result<Vec<OrderItem>> {
    let mut rdr = csv_reader(reader);
    let columns = Columns::read(&mut rdr, Table::OrderItems)?;
    let order = columns.require("order_id")?;
    let product = columns.require("product_id")?;
    let seller = columns.require("seller_id")?;
    let price = columns.require("price")?;

    let mut items = Vec::new();
    for result in rdr.records() {
        let record = result?;
        items.push(OrderItem {
            order_id: order.text(&record),
            product_id: product.text(&record),
            seller_id: seller.text(&record),
            price: price.optional_money(&record)?,
        });
    }

    debug!("Parsed {} order items", items.len());
    Ok(items)
}

/// Parse `order_payments_dataset.csv`
pub fn parse_order_payments<R: Read>(reader: R) -> Result<Vec<OrderPayment>> {
    let mut rdr = csv_reader(reader);
    let columns = Columns::read(&mut rdr, Table::OrderPayments)?;
    let order = columns.require("order_id")?;
    let kind = columns.require("payment_type")?;
    let value = columns.require("payment_value")?;

    let mut payments = Vec::new();
    for result in rdr.records() {
        let record = result?;
        payments.push(OrderPayment {
            order_id: order.text(&record),
            payment_type: kind.optional_text(&record),
            payment_value: value.optional_money(&record)?,
        });
    }

    debug!("Parsed {} order payments", payments.len());
    Ok(payments)
}

/// Parse `products_dataset.csv`
pub fn parse_products<R: Read>(reader: R) -> Result<Vec<Product>> {
    let mut rdr = csv_reader(reader);
    let columns = Columns::read(&mut rdr, Table::Products)?;
    let id = columns.require("product_id")?;
    let category = columns.require("product_category_name")?;

    let mut products = Vec::new();
    for result in rdr.records() {
        let record = result?;
        products.push(Product {
            product_id: id.text(&record),
            product_category_name: category.optional_text(&record),
        });
    }

    debug!("Parsed {} products", products.len());
    Ok(products)
}

/// Parse `sellers_dataset.csv`
pub fn parse_sellers<R: Read>(reader: R) -> Result<Vec<Seller>> {
    let mut rdr = csv_reader(reader);
    let columns = Columns::read(&mut rdr, Table::Sellers)?;
    let id = columns.require("seller_id")?;
    let state = columns.require("seller_state")?;

    let mut sellers = Vec::new();
    for result in rdr.records() {
        let record = result?;
        sellers.push(Seller {
            seller_id: id.text(&record),
            seller_state: state.optional_text(&record),
        });
    }

    debug!("Parsed {} sellers", sellers.len());
    Ok(sellers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = ts("2017-10-02 10:56:33");
        assert_eq!(parse_timestamp("2017-10-02 10:56:33"), Some(expected));
        assert_eq!(parse_timestamp(" 2017-10-02 10:56:33 "), Some(expected));
        assert_eq!(parse_timestamp("2017-10-02T10:56:33"), Some(expected));
        assert_eq!(
            parse_timestamp("2017-10-02 10:56"),
            Some(ts("2017-10-02 10:56:00"))
        );
        assert_eq!(
            parse_timestamp("2017-10-02"),
            Some(ts("2017-10-02 00:00:00"))
        );
        assert_eq!(parse_timestamp("02/10/2017"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_parse_customers() {
        let csv = "customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,14409,franca,SP
c2,u2,09790,sao bernardo do campo,SP
c3,u3,01151,,";

        let customers = parse_customers(csv.as_bytes()).unwrap();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].customer_id, "c1");
        assert_eq!(customers[0].customer_city.as_deref(), Some("franca"));
        assert_eq!(customers[1].customer_city.as_deref(), Some("sao bernardo do campo"));
        assert_eq!(customers[2].customer_city, None);
        assert_eq!(customers[2].customer_state, None);
    }

    #[test]
    fn test_parse_orders_with_missing_delivery() {
        let csv = "order_id,customer_id,order_status,order_purchase_timestamp,order_approved_at,order_delivered_carrier_date,order_delivered_customer_date,order_estimated_delivery_date
o1,c1,delivered,2017-10-02 10:56:33,2017-10-02 11:07:15,2017-10-04 19:55:00,2017-10-10 21:25:13,2017-10-18 00:00:00
o2,c2,shipped,2018-07-24 20:41:37,2018-07-26 03:24:27,2018-07-26 14:31:00,,2018-08-13 00:00:00";

        let orders = parse_orders(csv.as_bytes()).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].purchased_at, ts("2017-10-02 10:56:33"));
        assert_eq!(orders[0].delivered_at, Some(ts("2017-10-10 21:25:13")));
        assert_eq!(orders[1].delivered_at, None);
    }

    #[test]
    fn test_parse_orders_rejects_bad_timestamp() {
        let csv = "order_id,customer_id,order_purchase_timestamp,order_delivered_customer_date
o1,c1,not-a-date,";

        let err = parse_orders(csv.as_bytes()).unwrap_err();
        match err {
            Error::InvalidValue {
                table,
                row,
                column,
                value,
            } => {
                assert_eq!(table, "orders");
                assert_eq!(row, 2);
                assert_eq!(column, "order_purchase_timestamp");
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_order_items_any_column_order() {
        let csv = "price,seller_id,order_item_id,product_id,order_id
58.90,s1,1,p1,o1
239.90,s2,1,p2,o2";

        let items = parse_order_items(csv.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].order_id, "o2");
        assert_eq!(items[1].product_id, "p2");
        assert_eq!(items[1].seller_id, "s2");
        assert_eq!(items[1].price, Some(239.90));
    }

    #[test]
    fn test_parse_order_items_rejects_bad_price() {
        let csv = "order_id,product_id,seller_id,price
o1,p1,s1,abc";
        let err = parse_order_items(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid price value 'abc'"));

        let csv = "order_id,product_id,seller_id,price
o1,p1,s1,NaN";
        assert!(parse_order_items(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_empty_money_cells_are_absent() {
        let csv = "order_id,product_id,seller_id,price
o1,p1,s1,
o2,p2,s2, 12.50 ";
        let items = parse_order_items(csv.as_bytes()).unwrap();
        assert_eq!(items[0].price, None);
        assert_eq!(items[1].price, Some(12.5));

        let csv = "order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,1,20.00
o2,1,boleto,1,";
        let payments = parse_order_payments(csv.as_bytes()).unwrap();
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[1].payment_type.as_deref(), Some("boleto"));
        assert_eq!(payments[1].payment_value, None);
    }

    #[test]
    fn test_parse_order_payments() {
        let csv = "order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,8,99.33
o1,2,voucher,1,10.00
o2,1,,1,5.5";

        let payments = parse_order_payments(csv.as_bytes()).unwrap();
        assert_eq!(payments.len(), 3);
        assert_eq!(payments[0].payment_type.as_deref(), Some("credit_card"));
        assert_eq!(payments[1].payment_value, Some(10.0));
        assert_eq!(payments[2].payment_type, None);
    }

    #[test]
    fn test_parse_products_missing_category() {
        let csv = "product_id,product_category_name,product_name_lenght
p1,perfumaria,40
p2,,";

        let products = parse_products(csv.as_bytes()).unwrap();
        assert_eq!(products[0].product_category_name.as_deref(), Some("perfumaria"));
        assert_eq!(products[1].product_category_name, None);
    }

    #[test]
    fn test_parse_sellers_bom_header() {
        let csv = "\u{feff}seller_id,seller_zip_code_prefix,seller_city,seller_state
s1,13023,campinas,SP";

        let sellers = parse_sellers(csv.as_bytes()).unwrap();
        assert_eq!(sellers.len(), 1);
        assert_eq!(sellers[0].seller_state.as_deref(), Some("SP"));
    }

    #[test]
    fn test_missing_column() {
        let csv = "seller_id,seller_city
s1,campinas";

        let err = parse_sellers(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingColumn {
                table: "sellers",
                column: "seller_state"
            }
        ));
    }

    #[test]
    fn test_empty_table() {
        let csv = "seller_id,seller_state\n";
        assert!(parse_sellers(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let dataset = Dataset::default().with_sellers(vec![
            Seller {
                seller_id: "s1".into(),
                seller_state: Some("SP".into()),
            },
            Seller {
                seller_id: "s2".into(),
                seller_state: Some("RJ".into()),
            },
        ]);

        let summary = dataset.summary();
        assert_eq!(summary.len(), 6);
        assert_eq!(
            summary.last(),
            Some(&TableSummary {
                table: Table::Sellers,
                rows: 2
            })
        );
        assert_eq!(dataset.row_count(Table::Orders), 0);
    }

    #[test]
    fn test_load_missing_file_names_table() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatasetConfig::with_data_dir(dir.path());

        let err = Dataset::load(&config).unwrap_err();
        match err {
            Error::Load { table, path, .. } => {
                assert_eq!(table, "customers");
                assert!(path.ends_with("customers_dataset.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
