//! Restriction queries (`where`).

use quarry_core::model::{Customer, Product};
use quarry_core::types::Money;
use quarry_operators::Sequence;

use super::order_total;
use crate::rows::CustomerTotal;

static NUMBERS: [i64; 10] = [5, 4, 1, 3, 9, 8, 6, 7, 2, 0];

/// Numbers below `cutoff` from a fixed array, in array order.
pub fn low_numbers(cutoff: i64) -> Sequence<'static, i64> {
    Sequence::new(|| NUMBERS.iter().copied()).filter(move |n| *n < cutoff)
}

pub fn products_in_stock(products: &[Product]) -> Sequence<'_, &Product> {
    Sequence::from_slice(products).filter(|p| p.in_stock())
}

/// Customers whose order totals add up to more than `threshold`.
pub fn customers_over_total(
    customers: &[Customer],
    threshold: Money,
) -> Sequence<'_, CustomerTotal<'_>> {
    Sequence::from_slice(customers)
        .project(|c| (c, order_total(c)))
        .filter(move |(_, total)| *total > threshold)
        .project(|(c, total)| CustomerTotal {
            customer_id: &c.customer_id,
            total,
        })
}

/// Customers with at least one order above `threshold`.
pub fn customers_with_large_order(
    customers: &[Customer],
    threshold: Money,
) -> Sequence<'_, &Customer> {
    Sequence::from_slice(customers)
        .filter(move |c| Sequence::from_slice(&c.orders).any(|o| o.total > threshold))
}
