//! Test utilities for olist-core
//!
//! A tiny but complete Olist dataset, written as the six CSV files with the
//! real column layout, so loader and shell tests run against the same data.
//!
//! Expected insight values for this data:
//! - 4 distinct orders (o1..o4), o2 undelivered
//! - delivery days 5, 2 and 3 -> mean 3.33
//! - revenue 50 + 25 + 10 + 99.9 + 30 = 214.90
//! - orders per month: 2018-01: 2, 2018-02: 1, 2018-03: 1

use std::fs;
use std::path::Path;

use crate::config::DatasetConfig;
use crate::error::Result;

pub const CUSTOMERS_CSV: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,01001,sao paulo,SP
c2,u2,20010,rio de janeiro,RJ
c3,u3,01002,sao paulo,SP
c4,u4,13010,campinas,SP
";

pub const ORDERS_CSV: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_approved_at,order_delivered_carrier_date,order_delivered_customer_date,order_estimated_delivery_date
o3,c3,delivered,2018-03-10 08:00:00,2018-03-10 09:00:00,2018-03-11 10:00:00,2018-03-13 18:00:00,2018-03-25 00:00:00
o1,c1,delivered,2018-01-05 10:00:00,2018-01-05 11:00:00,2018-01-06 10:00:00,2018-01-10 12:00:00,2018-01-20 00:00:00
o2,c2,shipped,2018-01-20 14:30:00,2018-01-20 15:00:00,2018-01-22 09:00:00,,2018-02-05 00:00:00
o4,c4,delivered,2018-02-01 09:15:00,2018-02-01 10:00:00,2018-02-02 08:00:00,2018-02-03 20:00:00,2018-02-15 00:00:00
";

pub const ORDER_ITEMS_CSV: &str = "\
order_id,order_item_id,product_id,seller_id,shipping_limit_date,price,freight_value
o1,1,p1,s1,2018-01-09 10:00:00,40.00,10.00
o1,2,p2,s2,2018-01-09 10:00:00,15.00,10.00
o2,1,p1,s1,2018-01-24 14:30:00,40.00,5.00
o3,1,p3,s3,2018-03-14 08:00:00,89.90,10.00
o4,1,p4,s1,2018-02-05 09:15:00,25.00,5.00
";

pub const ORDER_PAYMENTS_CSV: &str = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,2,50.00
o1,2,voucher,1,25.00
o2,1,boleto,1,10.00
o3,1,credit_card,3,99.90
o4,1,credit_card,1,30.00
";

pub const PRODUCTS_CSV: &str = "\
product_id,product_category_name,product_name_lenght,product_description_lenght,product_photos_qty,product_weight_g,product_length_cm,product_height_cm,product_width_cm
p1,beleza_saude,40,287,1,225,16,10,14
p2,informatica_acessorios,44,276,1,1000,30,18,20
p3,beleza_saude,46,250,1,154,18,9,15
p4,,,,,,,,
";

pub const SELLERS_CSV: &str = "\
seller_id,seller_zip_code_prefix,seller_city,seller_state
s1,13023,campinas,SP
s2,13844,mogi guacu,SP
s3,20031,rio de janeiro,RJ
";

/// Write the sample dataset into `dir` using the default file names
pub fn write_sample_dataset(dir: &Path) -> Result<DatasetConfig> {
    let config = DatasetConfig::with_data_dir(dir);
    let files = [
        (&config.files.customers, CUSTOMERS_CSV),
        (&config.files.orders, ORDERS_CSV),
        (&config.files.order_items, ORDER_ITEMS_CSV),
        (&config.files.order_payments, ORDER_PAYMENTS_CSV),
        (&config.files.products, PRODUCTS_CSV),
        (&config.files.sellers, SELLERS_CSV),
    ];
    for (name, content) in files {
        fs::write(dir.join(name), content)?;
    }
    Ok(config)
}
