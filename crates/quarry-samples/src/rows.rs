//! Named result rows, one shape per query.
//!
//! Rows borrow from the dataset. Fields typed `Sequence` are nested lazy results,
//! enumerated by whoever renders the row.

use chrono::NaiveDate;
use quarry_core::config::PriceTiers;
use quarry_core::model::Product;
use quarry_core::types::Money;
use quarry_operators::Sequence;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerTotal<'a> {
    pub customer_id: &'a str,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSupplier<'a> {
    pub customer_id: &'a str,
    pub supplier: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSuppliers<'a> {
    pub customer: &'a str,
    pub suppliers: Sequence<'a, &'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirstOrder<'a> {
    pub customer_id: &'a str,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCustomer<'a> {
    pub company_name: &'a str,
    pub start_date: NaiveDate,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockGroup<'a> {
    pub in_stock: bool,
    pub products: Sequence<'a, &'a Product>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStock<'a> {
    pub category: &'a str,
    pub stock: Sequence<'a, StockGroup<'a>>,
}

/// Price bucket. Classification checks cheap first, then expensive, and
/// everything else is average, so every price lands in exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PriceTier {
    Cheap,
    Average,
    Expensive,
}

impl PriceTier {
    pub fn classify(price: Money, tiers: &PriceTiers) -> PriceTier {
        if price < tiers.cheap_below {
            PriceTier::Cheap
        } else if price > tiers.expensive_above {
            PriceTier::Expensive
        } else {
            PriceTier::Average
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceTierGroup<'a> {
    pub tier: PriceTier,
    pub products: Sequence<'a, &'a Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityStats<'a> {
    pub city: &'a str,
    /// Mean of each customer's order-total sum.
    pub average_sum: f64,
    /// Mean number of orders per customer.
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodCount<K> {
    pub period: K,
    pub orders: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerPeriods<'a> {
    pub customer_id: &'a str,
    pub months: Sequence<'a, PeriodCount<u32>>,
    pub years: Sequence<'a, PeriodCount<i32>>,
    pub year_months: Sequence<'a, PeriodCount<String>>,
}
