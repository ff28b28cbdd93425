#![forbid(unsafe_code)]
//! quarry-samples: the demonstration query catalogue.
//!
//! Each query is a pure function from borrowed dataset slices to a lazy
//! `Sequence` of named result rows. The catalogue wraps every query with a run
//! function that drives its rows into a `Sink`; rendering is the sink's job.

pub mod catalogue;
pub mod error;
pub mod queries;
pub mod rows;
pub mod sink;

pub use catalogue::{catalogue, find, Category, Sample};
pub use error::{Result, SampleError};
pub use sink::{emit_all, try_emit_all, CollectSink, Sink};
