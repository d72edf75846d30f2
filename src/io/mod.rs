pub mod csv;
pub mod json;

// Re-export commonly used functions
pub use self::csv::{read_csv, read_csv_str, to_csv_string, write_csv};
pub use self::json::{to_json_records, to_json_string};
