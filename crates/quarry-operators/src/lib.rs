#![forbid(unsafe_code)]
//! quarry-operators: lazy, restartable sequence operators.
//!
//! Design intent:
//! - Building a pipeline does no work; every operator returns a new `Sequence`
//!   that re-runs its inputs each time it is enumerated.
//! - Filter/project/cross stay streaming. Sort, group-by and the join build side
//!   materialize into a buffer that lives for one enumeration only.
//! - Nothing here mutates the records it observes, so any `Sequence` can be
//!   enumerated by several readers at once.

pub mod error;
pub mod metrics;
pub mod sequence;

pub mod aggregate;
pub mod cross;
pub mod filter;
pub mod map;

pub mod group;
pub mod join;
pub mod sort;

pub use error::{OpError, Result};
pub use group::Grouping;
pub use sequence::{BoxIter, Sequence};
pub use sort::{Direction, SortSpec};
