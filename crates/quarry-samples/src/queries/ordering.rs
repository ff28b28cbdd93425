//! Ordering queries built around each customer's first order.

use chrono::Datelike;
use quarry_core::model::Customer;
use quarry_operators::{Sequence, SortSpec};

use super::{first_order, order_total};
use crate::rows::{FirstOrder, RankedCustomer};

/// Month and year of each customer's first order. Customers without orders
/// yield no row.
pub fn first_order_dates(customers: &[Customer]) -> Sequence<'_, FirstOrder<'_>> {
    Sequence::from_slice(customers)
        .filter(|c| c.has_orders())
        .flat_map(|c| {
            first_order(c).map(|o| FirstOrder {
                customer_id: &c.customer_id,
                month: o.order_date.month(),
                year: o.order_date.year(),
            })
        })
}

/// Customers with orders, ordered by first-order date, then order-total sum,
/// then company name descending.
pub fn first_order_ranked<'a>(customers: &'a [Customer]) -> Sequence<'a, RankedCustomer<'a>> {
    Sequence::from_slice(customers)
        .flat_map(|c| {
            first_order(c).map(|o| RankedCustomer {
                company_name: &c.company_name,
                start_date: o.order_date,
                total: order_total(c),
            })
        })
        .order_by(
            SortSpec::<RankedCustomer<'a>>::new()
                .asc(|r| r.start_date)
                .asc(|r| r.total)
                .desc(|r| r.company_name),
        )
}
