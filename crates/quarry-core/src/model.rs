//! The queried entities. Pure data; loaded once and never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Record, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub order_date: NaiveDate,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    pub city: String,
    pub country: String,
    /// May be empty.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_name: String,
    pub category: String,
    pub unit_price: Money,
    pub units_in_stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_name: String,
    pub city: String,
    pub country: String,
}

impl Record for Order {
    const NAME: &'static str = "Order";
    const FIELDS: &'static [&'static str] = &["order_id", "order_date", "total"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "order_id" => Some(Value::Int(self.order_id)),
            "order_date" => Some(Value::Date(self.order_date)),
            "total" => Some(Value::Money(self.total)),
            _ => None,
        }
    }
}

impl Record for Customer {
    const NAME: &'static str = "Customer";
    const FIELDS: &'static [&'static str] =
        &["customer_id", "company_name", "city", "country", "order_count"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "customer_id" => Some(Value::Str(self.customer_id.clone())),
            "company_name" => Some(Value::Str(self.company_name.clone())),
            "city" => Some(Value::Str(self.city.clone())),
            "country" => Some(Value::Str(self.country.clone())),
            "order_count" => Some(Value::Int(self.orders.len() as i64)),
            _ => None,
        }
    }
}

impl Record for Product {
    const NAME: &'static str = "Product";
    const FIELDS: &'static [&'static str] =
        &["product_name", "category", "unit_price", "units_in_stock"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "product_name" => Some(Value::Str(self.product_name.clone())),
            "category" => Some(Value::Str(self.category.clone())),
            "unit_price" => Some(Value::Money(self.unit_price)),
            "units_in_stock" => Some(Value::Int(i64::from(self.units_in_stock))),
            _ => None,
        }
    }
}

impl Record for Supplier {
    const NAME: &'static str = "Supplier";
    const FIELDS: &'static [&'static str] = &["supplier_name", "city", "country"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "supplier_name" => Some(Value::Str(self.supplier_name.clone())),
            "city" => Some(Value::Str(self.city.clone())),
            "country" => Some(Value::Str(self.country.clone())),
            _ => None,
        }
    }
}
