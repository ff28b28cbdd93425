//! The sample queries, by operator family.
//!
//! Queries take borrowed slices rather than a whole `Dataset` so each one states
//! exactly which collections it reads.

pub mod grouping;
pub mod joins;
pub mod ordering;
pub mod restriction;

use quarry_core::model::{Customer, Order};
use quarry_core::types::Money;
use quarry_operators::Sequence;

pub use grouping::{
    city_statistics, customer_order_periods, products_by_category_stock, products_by_price_tier,
};
pub use joins::{customer_supplier_groups, customer_suppliers, customer_suppliers_join};
pub use ordering::{first_order_dates, first_order_ranked};
pub use restriction::{
    customers_over_total, customers_with_large_order, low_numbers, products_in_stock,
};

/// Sum of a customer's order totals; zero for a customer without orders.
pub fn order_total(customer: &Customer) -> Money {
    Sequence::from_slice(&customer.orders).sum(|o| o.total)
}

/// Earliest order by date; `None` for a customer without orders.
pub fn first_order(customer: &Customer) -> Option<&Order> {
    Sequence::from_slice(&customer.orders).min_by_key(|o| o.order_date)
}
