#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Numeric,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    values: Vec<String>,
}

impl Column {
    pub fn new(name: String, column_type: ColumnType, values: Vec<String>) -> Self {
        Self {
            name,
            column_type,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Parsed non-empty cells. Empty cells are missing values, not zeros.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .filter(|v| !v.is_empty())
            .filter_map(|v| v.parse::<f64>().ok())
            .collect()
    }
}

/// Named, equal-length columns parsed from one upload. Read-only after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("column '{name}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        for column in &columns {
            if column.len() != row_count {
                return Err(TableError::ColumnLengthMismatch {
                    name: column.name.clone(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn preview(&self, rows: usize) -> TablePreview {
        let shown = rows.min(self.row_count);
        let header = self.columns.iter().map(|c| c.name.clone()).collect();
        let rows = (0..shown)
            .map(|i| {
                self.columns
                    .iter()
                    .map(|c| c.values()[i].clone())
                    .collect()
            })
            .collect();
        TablePreview {
            header,
            rows,
            total_rows: self.row_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePreview {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}
