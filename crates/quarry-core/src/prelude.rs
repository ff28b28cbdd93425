//! Convenient re-exports for downstream crates.

pub use crate::config::{ConfigFile, EngineConfig, PriceTiers, SampleConfig};
pub use crate::dataset::Dataset;
pub use crate::error::{Error, Result};
pub use crate::hash::Fingerprint;
pub use crate::model::{Customer, Order, Product, Supplier};
pub use crate::types::{CompositeKey, Money, Record, Value};
