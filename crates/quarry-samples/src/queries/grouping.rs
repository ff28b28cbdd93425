//! Grouping queries, including nested and multi-dimension grouping.

use chrono::Datelike;
use quarry_core::config::PriceTiers;
use quarry_core::model::{Customer, Product};
use quarry_operators::{OpError, Sequence};

use super::order_total;
use crate::rows::{
    CategoryStock, CityStats, CustomerPeriods, PeriodCount, PriceTier, PriceTierGroup, StockGroup,
};

fn category(p: &Product) -> &str {
    &p.category
}

fn city(c: &Customer) -> &str {
    &c.city
}

/// Category, then in-stock flag, then products by ascending unit price.
pub fn products_by_category_stock(products: &[Product]) -> Sequence<'_, CategoryStock<'_>> {
    Sequence::from_slice(products)
        .group_by(|p| category(*p))
        .project(|by_category| {
            let (category, members) = by_category.into_parts();
            CategoryStock {
                category,
                stock: members.group_by(|p| p.in_stock()).project(|by_stock| {
                    let (in_stock, products) = by_stock.into_parts();
                    StockGroup {
                        in_stock,
                        products: products.order_by_key(|p| p.unit_price),
                    }
                }),
            }
        })
}

/// Products bucketed into price tiers, tiers in first-occurrence order.
pub fn products_by_price_tier(
    products: &[Product],
    tiers: PriceTiers,
) -> Sequence<'_, PriceTierGroup<'_>> {
    Sequence::from_slice(products)
        .group_by(move |p| PriceTier::classify(p.unit_price, &tiers))
        .project(|group| {
            let (tier, products) = group.into_parts();
            PriceTierGroup { tier, products }
        })
}

/// Per city: mean order-total sum per customer and mean order count per
/// customer. A failed average fails its row.
pub fn city_statistics<'a>(customers: &'a [Customer]) -> Sequence<'a, Result<CityStats<'a>, OpError>> {
    Sequence::from_slice(customers)
        .group_by(|c| city(*c))
        .project(|group| -> Result<CityStats<'a>, OpError> {
            let members = group.members();
            Ok(CityStats {
                city: *group.key(),
                average_sum: members.average(|c| order_total(c).get())?,
                intensity: members.average(|c| c.orders.len() as f64)?,
            })
        })
}

/// Per customer: its orders grouped independently by month, by year and by
/// "month / year".
pub fn customer_order_periods(customers: &[Customer]) -> Sequence<'_, CustomerPeriods<'_>> {
    Sequence::from_slice(customers).project(|c| {
        let orders = Sequence::from_slice(&c.orders);
        CustomerPeriods {
            customer_id: &c.customer_id,
            months: orders
                .group_by(|o| o.order_date.month())
                .project(|g| PeriodCount {
                    period: *g.key(),
                    orders: g.len(),
                }),
            years: orders
                .group_by(|o| o.order_date.year())
                .project(|g| PeriodCount {
                    period: *g.key(),
                    orders: g.len(),
                }),
            year_months: orders
                .group_by(|o| format!("{} / {}", o.order_date.month(), o.order_date.year()))
                .project(|g| {
                    let orders = g.len();
                    let (period, _) = g.into_parts();
                    PeriodCount { period, orders }
                }),
        }
    })
}
