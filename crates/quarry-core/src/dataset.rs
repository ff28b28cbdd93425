//! Dataset provider: loads the three root collections and checks invariants.
//!
//! Operators never re-check these; a dataset that fails `validate` must not be
//! handed to queries, since aggregates over it would be silently wrong.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::Fingerprint;
use crate::model::{Customer, Product, Supplier};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

impl Dataset {
    /// Build from parts, validating before returning.
    pub fn new(
        customers: Vec<Customer>,
        products: Vec<Product>,
        suppliers: Vec<Supplier>,
    ) -> Result<Self> {
        let ds = Self {
            customers,
            products,
            suppliers,
        };
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let ds: Dataset = serde_json::from_str(json)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Check the data-model invariants, reporting the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.customers.len());
        for c in &self.customers {
            if !seen.insert(c.customer_id.as_str()) {
                return Err(Error::Invariant(format!(
                    "duplicate customer id '{}'",
                    c.customer_id
                )));
            }
            for o in &c.orders {
                if !o.total.is_valid_amount() {
                    return Err(Error::Invariant(format!(
                        "order {} of customer '{}' has invalid total {}",
                        o.order_id,
                        c.customer_id,
                        o.total.get()
                    )));
                }
            }
        }

        for p in &self.products {
            if !p.unit_price.is_valid_amount() {
                return Err(Error::Invariant(format!(
                    "product '{}' has invalid unit price {}",
                    p.product_name,
                    p.unit_price.get()
                )));
            }
        }

        Ok(())
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.customer_id == id)
    }

    /// Content hash of the whole dataset.
    pub fn fingerprint(&self) -> Result<Fingerprint> {
        Fingerprint::of_json(self)
    }

    pub fn order_count(&self) -> usize {
        self.customers.iter().map(|c| c.orders.len()).sum()
    }
}
