//! Result presenters: indented text dump and JSON lines.

use std::io::Write;

use quarry_samples::{Sample, SampleError, Sink};
use serde_json::Value;

fn sink_err(e: std::io::Error) -> SampleError {
    SampleError::Sink(e.to_string())
}

/// Human-readable dump. Nested objects and arrays are indented one level per
/// depth; scalar fields print as `name: value`.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_value(&mut self, value: &Value, depth: usize) -> std::io::Result<()> {
        let pad = "  ".repeat(depth);
        match value {
            Value::Object(map) => {
                for (name, field) in map {
                    if is_scalar(field) {
                        writeln!(self.out, "{pad}{name}: {}", scalar_text(field))?;
                    } else {
                        writeln!(self.out, "{pad}{name}:")?;
                        self.write_value(field, depth + 1)?;
                    }
                }
            }
            Value::Array(items) => {
                if items.is_empty() {
                    writeln!(self.out, "{pad}(none)")?;
                }
                for item in items {
                    if is_scalar(item) {
                        writeln!(self.out, "{pad}- {}", scalar_text(item))?;
                    } else {
                        writeln!(self.out, "{pad}-")?;
                        self.write_value(item, depth + 1)?;
                    }
                }
            }
            scalar => writeln!(self.out, "{pad}{}", scalar_text(scalar))?,
        }
        Ok(())
    }
}

impl<W: Write> Sink for TextPresenter<W> {
    fn begin(&mut self, sample: &Sample) -> Result<(), SampleError> {
        writeln!(self.out, "== {} [{}]", sample.title, sample.id).map_err(sink_err)?;
        writeln!(self.out, "   {}", sample.description).map_err(sink_err)
    }

    fn emit(&mut self, row: Value) -> Result<(), SampleError> {
        if is_scalar(&row) {
            writeln!(self.out, "{}", scalar_text(&row)).map_err(sink_err)
        } else {
            writeln!(self.out, "--").map_err(sink_err)?;
            self.write_value(&row, 1).map_err(sink_err)
        }
    }

    fn finish(&mut self, rows: usize) -> Result<(), SampleError> {
        writeln!(self.out, "({rows} rows)\n").map_err(sink_err)?;
        self.out.flush().map_err(sink_err)
    }
}

/// One JSON object per row: `{"sample": <id>, "row": <row>}`.
pub struct JsonlPresenter<W: Write> {
    out: W,
    sample: &'static str,
}

impl<W: Write> JsonlPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, sample: "" }
    }
}

impl<W: Write> Sink for JsonlPresenter<W> {
    fn begin(&mut self, sample: &Sample) -> Result<(), SampleError> {
        self.sample = sample.id;
        Ok(())
    }

    fn emit(&mut self, row: Value) -> Result<(), SampleError> {
        let line = serde_json::to_string(&serde_json::json!({
            "sample": self.sample,
            "row": row,
        }))?;
        writeln!(self.out, "{line}").map_err(sink_err)
    }

    fn finish(&mut self, _rows: usize) -> Result<(), SampleError> {
        self.out.flush().map_err(sink_err)
    }
}

fn is_scalar(v: &Value) -> bool {
    !matches!(v, Value::Object(_) | Value::Array(_))
}

fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_of(row: Value) -> String {
        let mut buf = Vec::new();
        TextPresenter::new(&mut buf).emit(row).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_dump_indents_nested_sequences() {
        let text = text_of(
            json!({"customer": "Around the Horn", "suppliers": ["Exotic Liquids", "Tokyo Traders"]}),
        );
        assert_eq!(
            text,
            "--\n  customer: Around the Horn\n  suppliers:\n    - Exotic Liquids\n    - Tokyo Traders\n"
        );
    }

    #[test]
    fn text_dump_marks_empty_arrays() {
        assert_eq!(text_of(json!({"months": []})), "--\n  months:\n    (none)\n");
    }

    #[test]
    fn scalar_rows_print_bare() {
        assert_eq!(text_of(json!(4)), "4\n");
    }

    #[test]
    fn jsonl_tags_rows_with_sample_id() {
        let sample = quarry_samples::find("low-numbers").unwrap();
        let mut buf = Vec::new();
        {
            let mut p = JsonlPresenter::new(&mut buf);
            p.begin(sample).unwrap();
            p.emit(json!(3)).unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"row\":3,\"sample\":\"low-numbers\"}\n");
    }
}
