//! Result sinks: where enumerated rows go.

use quarry_operators::{OpError, Sequence};
use serde::Serialize;

use crate::catalogue::Sample;
use crate::error::Result;

/// Consumer of result rows. One `emit` per top-level row; nested sequences in a
/// row arrive already enumerated as JSON arrays.
pub trait Sink {
    fn begin(&mut self, _sample: &Sample) -> Result<()> {
        Ok(())
    }

    fn emit(&mut self, row: serde_json::Value) -> Result<()>;

    fn finish(&mut self, _rows: usize) -> Result<()> {
        Ok(())
    }
}

/// Enumerate `rows` into `sink`, returning how many were emitted.
pub fn emit_all<'a, T: Serialize + 'a>(rows: &Sequence<'a, T>, sink: &mut dyn Sink) -> Result<usize> {
    let mut emitted = 0;
    for row in rows {
        sink.emit(serde_json::to_value(&row)?)?;
        emitted += 1;
    }
    Ok(emitted)
}

/// Like `emit_all` for fallible rows. Every row is computed before the first
/// `emit`, so a failed row leaves the sink untouched.
pub fn try_emit_all<'a, T: Serialize + 'a>(
    rows: &Sequence<'a, std::result::Result<T, OpError>>,
    sink: &mut dyn Sink,
) -> Result<usize> {
    let values = rows
        .iter()
        .map(|row| -> Result<serde_json::Value> { Ok(serde_json::to_value(row?)?) })
        .collect::<Result<Vec<_>>>()?;
    let emitted = values.len();
    for value in values {
        sink.emit(value)?;
    }
    Ok(emitted)
}

/// Keeps every row in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub rows: Vec<serde_json::Value>,
}

impl Sink for CollectSink {
    fn emit(&mut self, row: serde_json::Value) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SampleError;

    #[test]
    fn try_emit_emits_nothing_when_a_row_fails() {
        let rows = Sequence::from_vec(vec![
            Ok(1),
            Err(OpError::EmptyAggregation { op: "average" }),
            Ok(3),
        ]);
        let mut sink = CollectSink::default();
        let err = try_emit_all(&rows, &mut sink).unwrap_err();
        assert!(matches!(err, SampleError::Op(OpError::EmptyAggregation { .. })));
        assert!(sink.rows.is_empty());

        let ok = Sequence::from_vec(vec![Ok::<_, OpError>(1), Ok(2)]);
        assert_eq!(try_emit_all(&ok, &mut sink).unwrap(), 2);
        assert_eq!(sink.rows, vec![serde_json::json!(1), serde_json::json!(2)]);
    }

    #[test]
    fn emit_all_counts_rows() {
        let mut sink = CollectSink::default();
        let n = emit_all(&Sequence::from_vec(vec!["a", "b"]), &mut sink).unwrap();
        assert_eq!(n, 2);
    }
}
