use tawau::application::ports::{TableLoader, TableLoaderError};
use tawau::domain::{ColumnType, Dataset};
use tawau::infrastructure::table::CsvTableLoader;

async fn load(data: &[u8]) -> Result<tawau::domain::Table, TableLoaderError> {
    let dataset = Dataset::new("test.csv".to_string(), data.len() as u64);
    CsvTableLoader.load(data, &dataset).await
}

#[tokio::test]
async fn given_well_formed_csv_when_loaded_then_counts_match() {
    let table = load(b"age,city\n34,London\n29,Paris\n27,London\n")
        .await
        .unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_count(), 2);
}

#[tokio::test]
async fn given_numeric_and_text_columns_when_loaded_then_types_are_inferred() {
    let table = load(b"age,city\n34,London\n29,Paris\n").await.unwrap();

    assert_eq!(table.columns()[0].column_type, ColumnType::Numeric);
    assert_eq!(table.columns()[1].column_type, ColumnType::Text);
}

#[tokio::test]
async fn given_floats_and_negatives_when_loaded_then_column_is_numeric() {
    let table = load(b"delta\n-1.5\n2.25\n0\n").await.unwrap();

    assert_eq!(table.columns()[0].column_type, ColumnType::Numeric);
}

#[tokio::test]
async fn given_mixed_values_when_loaded_then_column_is_text() {
    let table = load(b"code\n12\nabc\n34\n").await.unwrap();

    assert_eq!(table.columns()[0].column_type, ColumnType::Text);
}

#[tokio::test]
async fn given_missing_cells_when_loaded_then_column_stays_numeric() {
    let table = load(b"x\n1\n\n3\n").await.unwrap();

    assert_eq!(table.columns()[0].column_type, ColumnType::Numeric);
}

#[tokio::test]
async fn given_all_empty_column_when_loaded_then_column_is_text() {
    let table = load(b"x,y\n1,\n2,\n").await.unwrap();

    assert_eq!(table.columns()[1].column_type, ColumnType::Text);
}

#[tokio::test]
async fn given_header_only_csv_when_loaded_then_zero_rows() {
    let table = load(b"a,b,c\n").await.unwrap();

    assert_eq!(table.row_count(), 0);
    assert_eq!(table.column_count(), 3);
}

#[tokio::test]
async fn given_ragged_rows_when_loaded_then_returns_malformed() {
    let result = load(b"a,b\n1,2\n3\n").await;

    assert!(matches!(result, Err(TableLoaderError::Malformed(_))));
}

#[tokio::test]
async fn given_invalid_utf8_when_loaded_then_returns_malformed() {
    let result = load(&[0xff, 0xfe, 0x00, 0x01]).await;

    assert!(matches!(result, Err(TableLoaderError::Malformed(_))));
}

#[tokio::test]
async fn given_empty_input_when_loaded_then_returns_malformed() {
    let result = load(b"").await;

    assert!(matches!(result, Err(TableLoaderError::Malformed(_))));
}

#[tokio::test]
async fn given_quoted_fields_when_loaded_then_commas_are_preserved() {
    let table = load(b"name,motto\nParis,\"liberty, equality\"\n")
        .await
        .unwrap();

    assert_eq!(table.columns()[1].values()[0], "liberty, equality");
}
