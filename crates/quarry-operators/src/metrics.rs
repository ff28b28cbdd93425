//! Tracing hooks for materialization points.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
pub fn record_materialized(op: &'static str, rows: usize) {
    tracing::trace!(op, rows, "materialized");
}

#[cfg(not(feature = "tracing"))]
pub fn record_materialized(_op: &'static str, _rows: usize) { /* no-op */
}
