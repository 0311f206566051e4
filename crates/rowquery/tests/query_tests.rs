use rowquery::{Error, EvalError, FilterClause, LoaderConfig, ParseError, Row, Table, ValueKind};
use std::fs;
use tempfile::TempDir;

const FRUIT: &str = "\
id,fruit,quantity,year
111,apple,5,2020
222,banana,8,2021
4bc,cherry,77,2022
333,kiwi,10,2019
";

fn fruit_table() -> Table {
    Table::parse_str(FRUIT, LoaderConfig::default()).unwrap()
}

fn fruits(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.get("fruit").map(|v| v.to_string()))
        .collect()
}

#[test]
fn test_inferred_schema() {
    let table = fruit_table();

    assert_eq!(table.len(), 4);
    assert_eq!(table.schema().kind("id"), Some(ValueKind::Text));
    assert_eq!(table.schema().kind("fruit"), Some(ValueKind::Text));
    assert_eq!(table.schema().kind("quantity"), Some(ValueKind::Number));
    assert_eq!(table.schema().kind("year"), Some(ValueKind::Number));
}

#[test]
fn test_number_equality_quoted_and_bare() {
    let table = fruit_table();

    let results = table
        .query("PROJECT id, fruit FILTER quantity = \"5\"")
        .unwrap();
    assert_eq!(results, vec![Row::new().with("id", "111").with("fruit", "apple")]);

    let results = table.query("PROJECT fruit FILTER quantity = 5").unwrap();
    assert_eq!(results, vec![Row::new().with("fruit", "apple")]);
}

#[test]
fn test_non_numeric_literal_against_number_column() {
    let results = fruit_table()
        .query("PROJECT id, fruit FILTER quantity = \"five\"")
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_number_ordering() {
    let table = fruit_table();

    let results = table.query("PROJECT id, fruit FILTER quantity > 7").unwrap();
    assert_eq!(fruits(&results), vec!["banana", "cherry", "kiwi"]);

    let results = table
        .query("PROJECT id, fruit, year FILTER quantity > 77")
        .unwrap();
    assert!(results.is_empty());

    let results = table
        .query("PROJECT id, fruit, year FILTER quantity < 10")
        .unwrap();
    assert_eq!(fruits(&results), vec!["apple", "banana"]);
}

#[test]
fn test_literal_beyond_integer_range() {
    let table = fruit_table();

    let results = table
        .query("PROJECT fruit FILTER quantity < 99999999999999999999")
        .unwrap();
    assert_eq!(results.len(), 4);

    let results = table
        .query("PROJECT fruit FILTER quantity > \"-99999999999999999999\"")
        .unwrap();
    assert_eq!(results.len(), 4);

    let results = table
        .query("PROJECT fruit FILTER quantity > 99999999999999999999")
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_text_column_compares_as_text() {
    let table = fruit_table();

    // id is a text column because of "4bc"; quoting the literal changes nothing
    let quoted = table
        .query("PROJECT id, fruit, year, quantity FILTER id = \"222\"")
        .unwrap();
    let bare = table
        .query("PROJECT id, fruit, year, quantity FILTER id = 222")
        .unwrap();
    assert_eq!(quoted, bare);
    assert_eq!(
        quoted,
        vec![Row::new()
            .with("id", "222")
            .with("fruit", "banana")
            .with("year", 2021)
            .with("quantity", 8)]
    );

    let results = table.query("PROJECT fruit FILTER id = 4bc").unwrap();
    assert_eq!(fruits(&results), vec!["cherry"]);

    let results = table.query("PROJECT fruit FILTER id > 1").unwrap();
    assert_eq!(results.len(), 4);

    let results = table.query("PROJECT fruit FILTER id < 4bc").unwrap();
    assert_eq!(fruits(&results), vec!["apple", "banana", "kiwi"]);
}

#[test]
fn test_projection_without_filter() {
    let table = fruit_table();

    let results = table.query("PROJECT id, fruit, year, quantity").unwrap();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|row| row.len() == 4));

    let results = table.query("PROJECT id, fruit").unwrap();
    assert_eq!(
        results[0].columns().collect::<Vec<_>>(),
        vec!["id", "fruit"]
    );
}

#[test]
fn test_unknown_projection_column() {
    let results = fruit_table().query("PROJECT fruit, colour").unwrap();

    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|row| !row.contains("colour")));
}

#[test]
fn test_case_sensitive_text_equality() {
    let table = fruit_table();

    assert_eq!(table.query("PROJECT id FILTER fruit = \"kiwi\"").unwrap().len(), 1);
    assert!(table.query("PROJECT id FILTER fruit = \"Kiwi\"").unwrap().is_empty());
}

#[test]
fn test_malformed_spacing_ignores_filter() {
    let table = fruit_table();

    let query = table.prepare("PROJECT fruit FILTER quantity>7").unwrap();
    assert!(matches!(query.filter, FilterClause::Ignored { .. }));
    assert_eq!(table.execute(&query).unwrap().len(), 4);
}

#[test]
fn test_unknown_operator_fails() {
    let err = fruit_table()
        .query("PROJECT fruit FILTER quantity # 7")
        .unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::OperatorNotFound { .. })));
}

#[test]
fn test_filter_on_missing_column_fails() {
    let err = fruit_table()
        .query("PROJECT fruit FILTER colour = red")
        .unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::UnsupportedType { .. })));
}

#[test]
fn test_empty_table() {
    let table = Table::from_rows(Vec::new());
    assert!(table.is_empty());
    assert!(table.query("PROJECT a FILTER a = 1").unwrap().is_empty());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, FRUIT).expect("Failed to write data file");

    let table = Table::load(&path).unwrap();
    let results = table.query("PROJECT fruit FILTER year < 2021").unwrap();
    assert_eq!(fruits(&results), vec!["apple", "kiwi"]);
}

#[test]
fn test_table_shared_across_threads() {
    let table = fruit_table();
    let query = table.prepare("PROJECT fruit FILTER quantity > 7").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = table.clone();
            let query = query.clone();
            std::thread::spawn(move || table.execute(&query).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(fruits(&handle.join().unwrap()), vec!["banana", "cherry", "kiwi"]);
    }
}
