//! Test support for PandRS test suites.
//!
//! Provides temporary fixture files scoped to a test, the standard sales and
//! simple fixtures (as CSV text and as in-memory frames) and numeric
//! assertions that record failures without stopping the test.

pub mod assertions;
pub mod column;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod frame;
pub mod io;
pub mod temp;

// Re-export commonly used types
pub use assertions::{assert_float_near, assert_int_equal};
pub use context::{Failure, Outcome, TestCase, TestCaseConfig, TestContext};
pub use error::{Error, Result};
pub use fixtures::{
    build_sales_fixture, build_simple_fixture, standard_csv_content_a, standard_csv_content_b,
};
pub use frame::{ColumnSetBuilder, FixtureFrame, FrameBuilder};
pub use temp::{create_temp_csv, create_temp_file};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
