#![forbid(unsafe_code)]
//! quarry-core: data model, key values, dataset loading, configuration and hashing.
//!
//! Pure data and validation only. The lazy operators live in `quarry-operators`,
//! which depends on this crate and never the other way around.

pub mod config;
pub mod dataset;
pub mod error;
pub mod hash;
pub mod model;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
