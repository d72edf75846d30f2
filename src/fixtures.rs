//! Fixed fixture data
//!
//! Each shape exists in two forms, CSV text and an in-memory frame, holding
//! the same rows.

use crate::error::Result;
use crate::frame::{ColumnSetBuilder, FixtureFrame, FrameBuilder};

const STANDARD_CSV_CONTENT_A: &str = "\
price,quantity,category
10.5,5,A
20.0,15,B
5.0,3,A
30.0,20,C
15.0,8,B
";

const STANDARD_CSV_CONTENT_B: &str = "\
a,b
1,2
3,4
5,6
";

/// Sales data as CSV: `price`, `quantity`, `category`, five rows
pub fn standard_csv_content_a() -> &'static str {
    STANDARD_CSV_CONTENT_A
}

/// Simple integer data as CSV: `a`, `b`, three rows
pub fn standard_csv_content_b() -> &'static str {
    STANDARD_CSV_CONTENT_B
}

/// Sales fixture matching [`standard_csv_content_a`]
pub fn build_sales_fixture() -> Result<FixtureFrame> {
    build_sales_fixture_with(FrameBuilder::new())
}

/// Sales fixture built with any [`ColumnSetBuilder`]
pub fn build_sales_fixture_with<B: ColumnSetBuilder>(mut builder: B) -> Result<B::Output> {
    builder.float64("price", vec![10.5, 20.0, 5.0, 30.0, 15.0])?;
    builder.int64("quantity", vec![5, 15, 3, 20, 8])?;
    builder.string(
        "category",
        ["A", "B", "A", "C", "B"].iter().map(|s| s.to_string()).collect(),
    )?;
    builder.finish()
}

/// Simple fixture matching [`standard_csv_content_b`]
pub fn build_simple_fixture() -> Result<FixtureFrame> {
    build_simple_fixture_with(FrameBuilder::new())
}

/// Simple fixture built with any [`ColumnSetBuilder`]
pub fn build_simple_fixture_with<B: ColumnSetBuilder>(mut builder: B) -> Result<B::Output> {
    builder.int64("a", vec![1, 3, 5])?;
    builder.int64("b", vec![2, 4, 6])?;
    builder.finish()
}
