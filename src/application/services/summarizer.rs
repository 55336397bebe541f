use std::collections::HashMap;

use crate::domain::{
    CategoricalColumnCounts, CategoricalSummary, ColumnType, NumericColumnStats, NumericSummary,
    Table, ValueCount,
};

pub fn summarize_numeric(table: &Table) -> NumericSummary {
    let mut stats = Vec::new();

    for column in table.columns() {
        if column.column_type != ColumnType::Numeric {
            continue;
        }
        let mut values = column.numeric_values();
        if values.is_empty() {
            continue;
        }
        values.sort_by(|a, b| a.total_cmp(b));

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        stats.push(NumericColumnStats {
            name: column.name.clone(),
            count,
            mean,
            std,
            min: values[0],
            q25: percentile(&values, 0.25),
            median: percentile(&values, 0.5),
            q75: percentile(&values, 0.75),
            max: values[count - 1],
        });
    }

    if stats.is_empty() {
        NumericSummary::NoNumericData
    } else {
        NumericSummary::Columns(stats)
    }
}

pub fn summarize_categorical(table: &Table) -> CategoricalSummary {
    let mut columns = Vec::new();

    for column in table.columns() {
        if column.column_type != ColumnType::Text {
            continue;
        }

        let mut counts: Vec<ValueCount> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for value in column.values() {
            match positions.get(value.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    positions.insert(value.as_str(), counts.len());
                    counts.push(ValueCount {
                        value: value.clone(),
                        count: 1,
                    });
                }
            }
        }
        // Stable sort keeps first-encountered order among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));

        columns.push(CategoricalColumnCounts {
            name: column.name.clone(),
            counts,
        });
    }

    if columns.is_empty() {
        CategoricalSummary::NoCategoricalData
    } else {
        CategoricalSummary::Columns(columns)
    }
}

/// Linear interpolation between closest ranks over a sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let position = q * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (position - lower as f64) * (sorted[upper] - sorted[lower])
    }
}
