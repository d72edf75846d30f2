//! In-memory tabular fixtures
//!
//! A [`FixtureFrame`] is an ordered set of named, equal-length, homogeneously
//! typed columns. Fixture shapes are described against the [`ColumnSetBuilder`]
//! capability so they can be materialized by other tabular libraries as well.

use crate::column::{Column, ColumnType, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};

/// Minimal capability for building a named, typed column set
pub trait ColumnSetBuilder {
    /// Table type produced by [`ColumnSetBuilder::finish`]
    type Output;

    /// Append a 64-bit float column
    fn float64(&mut self, name: &str, values: Vec<f64>) -> Result<()>;

    /// Append a 64-bit integer column
    fn int64(&mut self, name: &str, values: Vec<i64>) -> Result<()>;

    /// Append a string column
    fn string(&mut self, name: &str, values: Vec<String>) -> Result<()>;

    /// Consume the builder and return the finished table
    fn finish(self) -> Result<Self::Output>;
}

/// Ordered collection of named columns sharing one row count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureFrame {
    columns: Vec<Column>,
}

impl FixtureFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame from columns, validating names and lengths
    pub fn from_columns<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = Column>,
    {
        let mut frame = Self::new();
        for column in columns {
            frame.add_column(column)?;
        }
        Ok(frame)
    }

    /// Append a column.
    ///
    /// The column must be named, its name must not already be present and its
    /// length must match the existing row count.
    pub fn add_column(&mut self, column: impl Into<Column>) -> Result<()> {
        let column = column.into();
        let name = column.name().ok_or(Error::UnnamedColumn)?;

        if self.columns.iter().any(|c| c.name() == Some(name)) {
            return Err(Error::DuplicateColumnName(name.to_string()));
        }

        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::InconsistentRowCount {
                    expected: first.len(),
                    found: column.len(),
                });
            }
        }

        self.columns.push(column);
        Ok(())
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().filter_map(Column::name).collect()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (zero for a frame without columns)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// All columns in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == Some(name))
    }

    fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Values of a float64 column
    pub fn float64_values(&self, name: &str) -> Result<&[f64]> {
        match self.require(name)? {
            Column::Float64(col) => Ok(col.values()),
            other => Err(mismatch(name, ColumnType::Float64, other)),
        }
    }

    /// Values of an int64 column
    pub fn int64_values(&self, name: &str) -> Result<&[i64]> {
        match self.require(name)? {
            Column::Int64(col) => Ok(col.values()),
            other => Err(mismatch(name, ColumnType::Int64, other)),
        }
    }

    /// Values of a string column
    pub fn string_values(&self, name: &str) -> Result<&[String]> {
        match self.require(name)? {
            Column::String(col) => Ok(col.values()),
            other => Err(mismatch(name, ColumnType::String, other)),
        }
    }
}

fn mismatch(name: &str, expected: ColumnType, found: &Column) -> Error {
    Error::ColumnTypeMismatch {
        name: name.to_string(),
        expected,
        found: found.column_type(),
    }
}

/// [`ColumnSetBuilder`] producing a [`FixtureFrame`]
#[derive(Debug, Default)]
pub struct FrameBuilder {
    frame: FixtureFrame,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColumnSetBuilder for FrameBuilder {
    type Output = FixtureFrame;

    fn float64(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        self.frame.add_column(Float64Column::with_name(values, name))
    }

    fn int64(&mut self, name: &str, values: Vec<i64>) -> Result<()> {
        self.frame.add_column(Int64Column::with_name(values, name))
    }

    fn string(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        self.frame.add_column(StringColumn::with_name(values, name))
    }

    fn finish(self) -> Result<FixtureFrame> {
        Ok(self.frame)
    }
}
