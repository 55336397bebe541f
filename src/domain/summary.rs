/// Descriptive statistics for one numeric column. `count` covers non-empty
/// cells; `std` is the sample deviation and absent when count < 2.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NumericSummary {
    Columns(Vec<NumericColumnStats>),
    NoNumericData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Frequency table for one text column, sorted by descending count with ties
/// in first-encountered order. Counts include empty cells, so they sum to the
/// table's row count.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalColumnCounts {
    pub name: String,
    pub counts: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoricalSummary {
    Columns(Vec<CategoricalColumnCounts>),
    NoCategoricalData,
}
