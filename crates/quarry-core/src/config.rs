//! Engine configuration that downstream crates can serialize/deserialize.
//!
//! Precedence (lowest first): defaults, environment, YAML config file, CLI flags.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Money;

/// Bucket boundaries for price-tier grouping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTiers {
    /// Prices strictly below this are cheap.
    pub cheap_below: Money,
    /// Prices strictly above this (and not cheap) are expensive.
    pub expensive_above: Money,
}

impl Default for PriceTiers {
    fn default() -> Self {
        Self {
            cheap_below: Money::new(80.0),
            expensive_above: Money::new(150.0),
        }
    }
}

/// Parameters of the sample catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub low_number_cutoff: i64,
    pub customer_total_threshold: Money,
    pub large_order_threshold: Money,
    pub price_tiers: PriceTiers,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            low_number_cutoff: 5,
            customer_total_threshold: Money::new(300.0),
            large_order_threshold: Money::new(1000.0),
            price_tiers: PriceTiers::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// JSON dataset to load; `None` means the bundled sample dataset.
    pub dataset_path: Option<String>,

    pub samples: SampleConfig,
}

/// On-disk config document. Every field is optional and only overrides what it sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub dataset_path: Option<String>,
    pub low_number_cutoff: Option<i64>,
    pub customer_total_threshold: Option<f64>,
    pub large_order_threshold: Option<f64>,
    pub cheap_below: Option<f64>,
    pub expensive_above: Option<f64>,
}

impl ConfigFile {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `QUARRY_DATASET`: path to a JSON dataset
    /// - `QUARRY_LOW_NUMBER_CUTOFF`
    /// - `QUARRY_CUSTOMER_TOTAL_THRESHOLD`
    /// - `QUARRY_LARGE_ORDER_THRESHOLD`
    /// - `QUARRY_CHEAP_BELOW`
    /// - `QUARRY_EXPENSIVE_ABOVE`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("QUARRY_DATASET") {
            cfg.dataset_path = Some(s);
        }

        if let Some(v) = lookup("QUARRY_LOW_NUMBER_CUTOFF").and_then(|s| s.parse::<i64>().ok()) {
            cfg.samples.low_number_cutoff = v;
        }

        if let Some(v) = parse_money(lookup("QUARRY_CUSTOMER_TOTAL_THRESHOLD")) {
            cfg.samples.customer_total_threshold = v;
        }

        if let Some(v) = parse_money(lookup("QUARRY_LARGE_ORDER_THRESHOLD")) {
            cfg.samples.large_order_threshold = v;
        }

        if let Some(v) = parse_money(lookup("QUARRY_CHEAP_BELOW")) {
            cfg.samples.price_tiers.cheap_below = v;
        }

        if let Some(v) = parse_money(lookup("QUARRY_EXPENSIVE_ABOVE")) {
            cfg.samples.price_tiers.expensive_above = v;
        }

        cfg
    }

    /// Overlay the fields a config file sets.
    pub fn apply_file(&mut self, doc: &ConfigFile) {
        if let Some(path) = &doc.dataset_path {
            self.dataset_path = Some(path.clone());
        }
        if let Some(v) = doc.low_number_cutoff {
            self.samples.low_number_cutoff = v;
        }
        if let Some(v) = doc.customer_total_threshold {
            self.samples.customer_total_threshold = Money::new(v);
        }
        if let Some(v) = doc.large_order_threshold {
            self.samples.large_order_threshold = Money::new(v);
        }
        if let Some(v) = doc.cheap_below {
            self.samples.price_tiers.cheap_below = Money::new(v);
        }
        if let Some(v) = doc.expensive_above {
            self.samples.price_tiers.expensive_above = Money::new(v);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.samples;
        for (name, m) in [
            ("customer_total_threshold", s.customer_total_threshold),
            ("large_order_threshold", s.large_order_threshold),
            ("cheap_below", s.price_tiers.cheap_below),
            ("expensive_above", s.price_tiers.expensive_above),
        ] {
            if !m.is_valid_amount() {
                return Err(Error::Config(format!(
                    "{name} must be a non-negative amount, got {}",
                    m.get()
                )));
            }
        }
        if s.price_tiers.cheap_below > s.price_tiers.expensive_above {
            return Err(Error::Config(format!(
                "cheap_below ({}) must not exceed expensive_above ({})",
                s.price_tiers.cheap_below, s.price_tiers.expensive_above
            )));
        }
        Ok(())
    }
}

fn parse_money(s: Option<String>) -> Option<Money> {
    s.and_then(|s| s.parse::<f64>().ok()).map(Money::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_lookup_overrides_defaults_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [
            ("QUARRY_DATASET", "/tmp/ds.json"),
            ("QUARRY_CHEAP_BELOW", "50"),
            ("QUARRY_LOW_NUMBER_CUTOFF", "not-a-number"),
        ]
        .into_iter()
        .collect();
        let cfg = EngineConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.dataset_path.as_deref(), Some("/tmp/ds.json"));
        assert_eq!(cfg.samples.price_tiers.cheap_below, Money::new(50.0));
        assert_eq!(cfg.samples.low_number_cutoff, 5);
    }

    #[test]
    fn config_file_overrides_only_what_it_sets() {
        let doc = ConfigFile::from_yaml_str("customer_total_threshold: 500\nexpensive_above: 200\n")
            .unwrap();
        let mut cfg = EngineConfig::default();
        cfg.apply_file(&doc);

        assert_eq!(cfg.samples.customer_total_threshold, Money::new(500.0));
        assert_eq!(cfg.samples.price_tiers.expensive_above, Money::new(200.0));
        assert_eq!(cfg.samples.price_tiers.cheap_below, Money::new(80.0));
        assert!(cfg.dataset_path.is_none());
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        assert!(matches!(
            ConfigFile::from_yaml_str("threshold: 1\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn inverted_price_tiers_fail_validation() {
        let mut cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.samples.price_tiers.cheap_below = Money::new(200.0);
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }
}
