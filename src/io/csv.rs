use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::column::{Column, Float64Column, Int64Column, StringColumn};
use crate::error::Result;
use crate::frame::FixtureFrame;

/// Read a CSV file with a header row into a [`FixtureFrame`]
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<FixtureFrame> {
    let file = File::open(path.as_ref())?;
    read_csv_from(file)
}

/// Parse CSV text with a header row into a [`FixtureFrame`]
pub fn read_csv_str(text: &str) -> Result<FixtureFrame> {
    read_csv_from(text.as_bytes())
}

fn read_csv_from<R: Read>(reader: R) -> Result<FixtureFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    // Collect raw values column by column
    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        for (i, values) in raw.iter_mut().enumerate() {
            values.push(record.get(i).unwrap_or_default().to_string());
        }
    }

    FixtureFrame::from_columns(
        headers
            .into_iter()
            .zip(raw)
            .map(|(name, values)| infer_column(name, values)),
    )
}

/// Pick the narrowest type every value parses as: int64, then float64, then string
fn infer_column(name: String, values: Vec<String>) -> Column {
    if let Some(ints) = parse_all::<i64>(&values) {
        return Int64Column::with_name(ints, name).into();
    }
    if let Some(floats) = parse_all::<f64>(&values) {
        return Float64Column::with_name(floats, name).into();
    }
    StringColumn::with_name(values, name).into()
}

fn parse_all<T: std::str::FromStr>(values: &[String]) -> Option<Vec<T>> {
    if values.is_empty() {
        return None;
    }
    values.iter().map(|v| v.parse::<T>().ok()).collect()
}

/// Write a [`FixtureFrame`] as CSV with a header row
pub fn write_csv<W: Write>(frame: &FixtureFrame, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(frame.column_names())?;

    for row in 0..frame.row_count() {
        let record: Vec<String> = frame
            .columns()
            .iter()
            .map(|col| col.render(row).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a [`FixtureFrame`] as CSV text
pub fn to_csv_string(frame: &FixtureFrame) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(frame, &mut buf)?;
    // Every cell came from a Rust string, so the buffer is valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
