//! quarry: lazy, restartable query operators over an in-memory
//! customer/order/product/supplier dataset.
//!
//! This crate only re-exports the workspace members:
//! - [`quarry_core`]: data model, dataset loading, configuration
//! - [`quarry_operators`]: the `Sequence` type and its operators
//! - [`quarry_samples`]: the demonstration query catalogue

pub use quarry_core;
pub use quarry_operators;
pub use quarry_samples;

pub use quarry_core::dataset::Dataset;
pub use quarry_operators::{OpError, Sequence, SortSpec};
