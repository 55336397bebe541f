use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};

use crate::application::ports::{TableLoader, TableLoaderError};
use crate::domain::{Column, ColumnType, Dataset, Table};

/// Parses CSV bytes into a `Table`, inferring each column's type: numeric
/// when every non-empty cell parses as a float and at least one exists.
pub struct CsvTableLoader;

#[async_trait]
impl TableLoader for CsvTableLoader {
    async fn load(&self, data: &[u8], dataset: &Dataset) -> Result<Table, TableLoaderError> {
        if data.is_empty() {
            return Err(TableLoaderError::Malformed("empty file".to_string()));
        }

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(data);

        let headers = reader
            .headers()
            .map_err(|e| TableLoaderError::Malformed(format!("header row: {}", e)))?
            .clone();
        if headers.is_empty() {
            return Err(TableLoaderError::Malformed("missing header row".to_string()));
        }

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for (row_index, result) in reader.records().enumerate() {
            let record = result
                .map_err(|e| TableLoaderError::Malformed(format!("row {}: {}", row_index + 1, e)))?;
            for (column_index, value) in record.iter().enumerate() {
                cells[column_index].push(value.to_string());
            }
        }

        let columns = headers
            .iter()
            .zip(cells)
            .map(|(name, values)| {
                let column_type = infer_column_type(&values);
                Column::new(name.to_string(), column_type, values)
            })
            .collect();

        let table = Table::new(columns).map_err(|e| TableLoaderError::Malformed(e.to_string()))?;

        tracing::debug!(
            filename = %dataset.filename,
            rows = table.row_count(),
            columns = table.column_count(),
            "CSV parsed"
        );

        Ok(table)
    }
}

fn infer_column_type(values: &[String]) -> ColumnType {
    let mut saw_value = false;
    for value in values {
        if value.is_empty() {
            continue;
        }
        saw_value = true;
        if value.parse::<f64>().is_err() {
            return ColumnType::Text;
        }
    }
    if saw_value {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    }
}
