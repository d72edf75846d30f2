use serde_json::{Map, Number, Value};

use crate::column::Column;
use crate::error::Result;
use crate::frame::FixtureFrame;

/// Render a [`FixtureFrame`] as an array of row objects
pub fn to_json_records(frame: &FixtureFrame) -> Value {
    let rows = (0..frame.row_count())
        .map(|row| {
            let mut record = Map::new();
            for col in frame.columns() {
                if let Some(name) = col.name() {
                    record.insert(name.to_string(), cell(col, row));
                }
            }
            Value::Object(record)
        })
        .collect();

    Value::Array(rows)
}

/// Render a [`FixtureFrame`] as a records-oriented JSON string
pub fn to_json_string(frame: &FixtureFrame) -> Result<String> {
    Ok(serde_json::to_string(&to_json_records(frame))?)
}

fn cell(col: &Column, row: usize) -> Value {
    match col {
        Column::Int64(c) => c.get(row).map(Value::from).unwrap_or(Value::Null),
        // Non-finite floats have no JSON representation
        Column::Float64(c) => c
            .get(row)
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Column::String(c) => c
            .get(row)
            .map(|s| Value::String(s.to_string()))
            .unwrap_or(Value::Null),
    }
}
