//! The sample catalogue: stable ids, grouped by operator family.

use std::fmt;

use quarry_core::config::SampleConfig;
use quarry_core::dataset::Dataset;

use crate::error::{Result, SampleError};
use crate::queries;
use crate::sink::{emit_all, try_emit_all, Sink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Restriction,
    Join,
    Ordering,
    Grouping,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Restriction => "Restriction Operators",
            Category::Join => "Join Operators",
            Category::Ordering => "Ordering Operators",
            Category::Grouping => "Grouping Operators",
        };
        f.pad(s)
    }
}

type RunFn = fn(&Dataset, &SampleConfig, &mut dyn Sink) -> Result<usize>;

pub struct Sample {
    pub id: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    run: RunFn,
}

impl Sample {
    /// Run the query and drive its rows into `sink`. Returns the row count.
    pub fn run(&self, dataset: &Dataset, config: &SampleConfig, sink: &mut dyn Sink) -> Result<usize> {
        #[cfg(feature = "tracing")]
        tracing::debug!(sample = self.id, "running sample");

        sink.begin(self)?;
        let rows = (self.run)(dataset, config, sink)?;
        sink.finish(rows)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(sample = self.id, rows, "sample finished");
        Ok(rows)
    }
}

impl fmt::Debug for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sample")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("title", &self.title)
            .finish()
    }
}

pub fn catalogue() -> &'static [Sample] {
    &CATALOGUE
}

pub fn find(id: &str) -> Result<&'static Sample> {
    CATALOGUE
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| SampleError::UnknownSample(id.to_string()))
}

static CATALOGUE: [Sample; 13] = [
    Sample {
        id: "low-numbers",
        category: Category::Restriction,
        title: "Where: small numbers",
        description: "Numbers from a fixed array that are below the configured cutoff.",
        run: |_, cfg, sink| emit_all(&queries::low_numbers(cfg.low_number_cutoff), sink),
    },
    Sample {
        id: "products-in-stock",
        category: Category::Restriction,
        title: "Where: products in stock",
        description: "Every product with at least one unit in stock.",
        run: |ds, _, sink| emit_all(&queries::products_in_stock(&ds.products), sink),
    },
    Sample {
        id: "customers-over-total",
        category: Category::Restriction,
        title: "Where: customers over a total",
        description: "Customers whose order totals add up to more than the threshold.",
        run: |ds, cfg, sink| {
            emit_all(
                &queries::customers_over_total(&ds.customers, cfg.customer_total_threshold),
                sink,
            )
        },
    },
    Sample {
        id: "customer-suppliers",
        category: Category::Join,
        title: "Cross product: local suppliers",
        description: "Customer/supplier pairs in the same city and country, via a filtered cross product.",
        run: |ds, _, sink| {
            emit_all(
                &queries::customer_suppliers(&ds.customers, &ds.suppliers),
                sink,
            )
        },
    },
    Sample {
        id: "customer-suppliers-join",
        category: Category::Join,
        title: "Join: local suppliers",
        description: "The same pairs via an equality join on (city, country).",
        run: |ds, _, sink| {
            let rows = queries::customer_suppliers_join(&ds.customers, &ds.suppliers)?;
            emit_all(&rows, sink)
        },
    },
    Sample {
        id: "customer-supplier-groups",
        category: Category::Join,
        title: "GroupJoin: local suppliers per customer",
        description: "Each customer with the list of suppliers in its city and country; customers without one are left out.",
        run: |ds, _, sink| {
            emit_all(
                &queries::customer_supplier_groups(&ds.customers, &ds.suppliers),
                sink,
            )
        },
    },
    Sample {
        id: "customers-with-large-order",
        category: Category::Restriction,
        title: "Where/Any: customers with a large order",
        description: "Customers with at least one order above the threshold.",
        run: |ds, cfg, sink| {
            emit_all(
                &queries::customers_with_large_order(&ds.customers, cfg.large_order_threshold),
                sink,
            )
        },
    },
    Sample {
        id: "first-order",
        category: Category::Ordering,
        title: "OrderBy: first order month and year",
        description: "Month and year of each customer's first order.",
        run: |ds, _, sink| emit_all(&queries::first_order_dates(&ds.customers), sink),
    },
    Sample {
        id: "first-order-ranked",
        category: Category::Ordering,
        title: "OrderBy/ThenBy: ranked by first order",
        description: "First-order date, order total and company name, sorted by date, then total, then name descending.",
        run: |ds, _, sink| emit_all(&queries::first_order_ranked(&ds.customers), sink),
    },
    Sample {
        id: "products-by-category-stock",
        category: Category::Grouping,
        title: "GroupBy nested: category and stock",
        description: "Products grouped by category, then by stock availability, ordered by price.",
        run: |ds, _, sink| emit_all(&queries::products_by_category_stock(&ds.products), sink),
    },
    Sample {
        id: "products-by-price-tier",
        category: Category::Grouping,
        title: "GroupBy: price tiers",
        description: "Products grouped into cheap, average and expensive tiers.",
        run: |ds, cfg, sink| {
            emit_all(
                &queries::products_by_price_tier(&ds.products, cfg.price_tiers),
                sink,
            )
        },
    },
    Sample {
        id: "city-statistics",
        category: Category::Grouping,
        title: "GroupBy/Average: city profitability and intensity",
        description: "Per city, the average customer order sum and the average number of orders per customer.",
        run: |ds, _, sink| try_emit_all(&queries::city_statistics(&ds.customers), sink),
    },
    Sample {
        id: "customer-order-periods",
        category: Category::Grouping,
        title: "GroupBy multi-dimension: order periods",
        description: "Each customer's orders grouped by month, by year, and by month and year.",
        run: |ds, _, sink| emit_all(&queries::customer_order_periods(&ds.customers), sink),
    },
];
