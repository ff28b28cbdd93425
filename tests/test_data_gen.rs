//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use quarry_core::dataset::Dataset;
use quarry_core::model::{Customer, Order, Product, Supplier};
use quarry_core::types::Money;

pub const BUNDLED_DATASET: &str = include_str!("../data/sample_dataset.json");

pub fn bundled_dataset() -> Dataset {
    Dataset::from_json_str(BUNDLED_DATASET).expect("bundled dataset must load")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Customer with orders given as `(date, total)`; order ids count up from 1.
pub fn customer(id: &str, city: &str, country: &str, orders: &[(&str, f64)]) -> Customer {
    Customer {
        customer_id: id.to_string(),
        company_name: format!("{id} Ltd"),
        city: city.to_string(),
        country: country.to_string(),
        orders: orders
            .iter()
            .enumerate()
            .map(|(i, (d, total))| Order {
                order_id: i as i64 + 1,
                order_date: date(d),
                total: Money::new(*total),
            })
            .collect(),
    }
}

/// Customer with undated totals, for the restriction scenarios.
pub fn customer_with_totals(id: &str, totals: &[f64]) -> Customer {
    let orders: Vec<(&str, f64)> = totals.iter().map(|t| ("2024-01-01", *t)).collect();
    customer(id, "Berlin", "Germany", &orders)
}

pub fn product(name: &str, category: &str, units_in_stock: u32, unit_price: f64) -> Product {
    Product {
        product_name: name.to_string(),
        category: category.to_string(),
        unit_price: Money::new(unit_price),
        units_in_stock,
    }
}

pub fn supplier(name: &str, city: &str, country: &str) -> Supplier {
    Supplier {
        supplier_name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

/// Products priced at `prices`, named `P<price>`, all in stock.
pub fn priced_products(prices: &[f64]) -> Vec<Product> {
    prices
        .iter()
        .map(|p| product(&format!("P{p}"), "Misc", 1, *p))
        .collect()
}

/// Small mixed fixture: two customers share a city with suppliers, one does not,
/// and one has no orders at all.
pub fn small_world() -> Dataset {
    Dataset::new(
        vec![
            customer("C1", "London", "UK", &[("2023-01-10", 100.0), ("2023-03-02", 250.0)]),
            customer("C2", "Paris", "France", &[]),
            customer("C3", "London", "UK", &[("2022-12-24", 40.0)]),
            customer("C4", "Lima", "Peru", &[("2023-01-10", 75.0)]),
        ],
        vec![
            product("Chai", "Beverages", 39, 18.0),
            product("Ipoh Coffee", "Beverages", 0, 46.0),
            product("Pavlova", "Confections", 29, 17.5),
        ],
        vec![
            supplier("Exotic Liquids", "London", "UK"),
            supplier("Aux joyeux", "Paris", "France"),
            supplier("Thames Traders", "London", "UK"),
            supplier("Lima Imports", "Lima", "Chile"),
        ],
    )
    .expect("fixture is valid")
}
