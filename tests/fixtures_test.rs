use pandrs_testkit::column::ColumnType;
use pandrs_testkit::fixtures::{build_sales_fixture_with, build_simple_fixture_with};
use pandrs_testkit::io::{read_csv_str, to_csv_string, to_json_string};
use pandrs_testkit::{
    build_sales_fixture, build_simple_fixture, standard_csv_content_a, standard_csv_content_b,
    ColumnSetBuilder, Result,
};

#[test]
fn test_standard_csv_content() {
    assert_eq!(
        standard_csv_content_a(),
        "price,quantity,category\n10.5,5,A\n20.0,15,B\n5.0,3,A\n30.0,20,C\n15.0,8,B\n"
    );
    assert_eq!(standard_csv_content_b(), "a,b\n1,2\n3,4\n5,6\n");
    assert_eq!(standard_csv_content_a(), standard_csv_content_a());
}

#[test]
fn test_sales_fixture_values() {
    let df = build_sales_fixture().unwrap();

    assert_eq!(df.column_names(), vec!["price", "quantity", "category"]);
    assert_eq!(df.row_count(), 5);
    assert_eq!(
        df.float64_values("price").unwrap(),
        &[10.5, 20.0, 5.0, 30.0, 15.0]
    );
    assert_eq!(df.int64_values("quantity").unwrap(), &[5, 15, 3, 20, 8]);

    let categories: Vec<&str> = df
        .string_values("category")
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(categories, vec!["A", "B", "A", "C", "B"]);
}

#[test]
fn test_simple_fixture_values() {
    let df = build_simple_fixture().unwrap();

    assert_eq!(df.column_names(), vec!["a", "b"]);
    assert_eq!(df.row_count(), 3);
    assert_eq!(df.int64_values("a").unwrap(), &[1, 3, 5]);
    assert_eq!(df.int64_values("b").unwrap(), &[2, 4, 6]);
}

#[test]
fn test_fixtures_are_deterministic() {
    assert_eq!(build_sales_fixture().unwrap(), build_sales_fixture().unwrap());
    assert_eq!(build_simple_fixture().unwrap(), build_simple_fixture().unwrap());
}

#[test]
fn test_csv_and_frame_forms_agree() {
    let parsed = read_csv_str(standard_csv_content_a()).unwrap();
    assert_eq!(parsed, build_sales_fixture().unwrap());

    let parsed = read_csv_str(standard_csv_content_b()).unwrap();
    assert_eq!(parsed, build_simple_fixture().unwrap());
}

#[test]
fn test_frame_renders_standard_csv() {
    let df = build_sales_fixture().unwrap();
    assert_eq!(to_csv_string(&df).unwrap(), standard_csv_content_a());

    let df = build_simple_fixture().unwrap();
    assert_eq!(to_csv_string(&df).unwrap(), standard_csv_content_b());
}

#[test]
fn test_sales_fixture_as_json() {
    let df = build_sales_fixture().unwrap();
    let json = to_json_string(&df).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["price"], 10.5);
    assert_eq!(rows[3]["quantity"], 20);
    assert_eq!(rows[4]["category"], "B");
}

/// Builder describing the shape without materializing values
#[derive(Default)]
struct ShapeBuilder {
    columns: Vec<(String, ColumnType, usize)>,
}

impl ColumnSetBuilder for ShapeBuilder {
    type Output = Vec<(String, ColumnType, usize)>;

    fn float64(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        self.columns
            .push((name.to_string(), ColumnType::Float64, values.len()));
        Ok(())
    }

    fn int64(&mut self, name: &str, values: Vec<i64>) -> Result<()> {
        self.columns
            .push((name.to_string(), ColumnType::Int64, values.len()));
        Ok(())
    }

    fn string(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        self.columns
            .push((name.to_string(), ColumnType::String, values.len()));
        Ok(())
    }

    fn finish(self) -> Result<Self::Output> {
        Ok(self.columns)
    }
}

#[test]
fn test_fixtures_with_custom_builder() {
    let shape = build_sales_fixture_with(ShapeBuilder::default()).unwrap();
    assert_eq!(
        shape,
        vec![
            ("price".to_string(), ColumnType::Float64, 5),
            ("quantity".to_string(), ColumnType::Int64, 5),
            ("category".to_string(), ColumnType::String, 5),
        ]
    );

    let shape = build_simple_fixture_with(ShapeBuilder::default()).unwrap();
    assert_eq!(
        shape,
        vec![
            ("a".to_string(), ColumnType::Int64, 3),
            ("b".to_string(), ColumnType::Int64, 3),
        ]
    );
}
