use tawau::application::services::{summarize_categorical, summarize_numeric};
use tawau::domain::{CategoricalSummary, Column, ColumnType, NumericSummary, Table};

fn table(columns: Vec<(&str, ColumnType, Vec<&str>)>) -> Table {
    Table::new(
        columns
            .into_iter()
            .map(|(name, column_type, values)| {
                Column::new(
                    name.to_string(),
                    column_type,
                    values.into_iter().map(str::to_string).collect(),
                )
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn given_numeric_column_when_summarized_then_stats_match() {
    let table = table(vec![(
        "x",
        ColumnType::Numeric,
        vec!["1", "2", "3", "4"],
    )]);

    let summary = summarize_numeric(&table);
    let stats = match summary {
        NumericSummary::Columns(stats) => stats,
        NumericSummary::NoNumericData => panic!("expected stats"),
    };

    assert_eq!(stats.len(), 1);
    let s = &stats[0];
    assert_eq!(s.count, 4);
    assert!((s.mean - 2.5).abs() < 1e-12);
    assert!((s.std.unwrap() - 1.2909944487358056).abs() < 1e-12);
    assert_eq!(s.min, 1.0);
    assert!((s.q25 - 1.75).abs() < 1e-12);
    assert!((s.median - 2.5).abs() < 1e-12);
    assert!((s.q75 - 3.25).abs() < 1e-12);
    assert_eq!(s.max, 4.0);
}

#[test]
fn given_single_value_column_when_summarized_then_std_is_absent() {
    let table = table(vec![("x", ColumnType::Numeric, vec!["7"])]);

    let summary = summarize_numeric(&table);
    let stats = match summary {
        NumericSummary::Columns(stats) => stats,
        NumericSummary::NoNumericData => panic!("expected stats"),
    };

    assert_eq!(stats[0].count, 1);
    assert_eq!(stats[0].std, None);
    assert_eq!(stats[0].min, 7.0);
    assert_eq!(stats[0].median, 7.0);
    assert_eq!(stats[0].max, 7.0);
}

#[test]
fn given_missing_cells_when_summarized_then_count_covers_non_empty_only() {
    let table = table(vec![("x", ColumnType::Numeric, vec!["1", "", "3"])]);

    let summary = summarize_numeric(&table);
    let stats = match summary {
        NumericSummary::Columns(stats) => stats,
        NumericSummary::NoNumericData => panic!("expected stats"),
    };

    assert_eq!(stats[0].count, 2);
    assert!((stats[0].mean - 2.0).abs() < 1e-12);
}

#[test]
fn given_no_numeric_columns_when_summarized_then_returns_sentinel() {
    let table = table(vec![("city", ColumnType::Text, vec!["London", "Paris"])]);

    assert_eq!(summarize_numeric(&table), NumericSummary::NoNumericData);
}

#[test]
fn given_text_column_when_summarized_then_counts_sorted_descending() {
    let table = table(vec![(
        "city",
        ColumnType::Text,
        vec!["b", "a", "b", "c", "a", "b"],
    )]);

    let summary = summarize_categorical(&table);
    let columns = match summary {
        CategoricalSummary::Columns(columns) => columns,
        CategoricalSummary::NoCategoricalData => panic!("expected counts"),
    };

    let counts = &columns[0].counts;
    assert_eq!(counts[0].value, "b");
    assert_eq!(counts[0].count, 3);
    assert_eq!(counts[1].value, "a");
    assert_eq!(counts[1].count, 2);
    assert_eq!(counts[2].value, "c");
    assert_eq!(counts[2].count, 1);
}

#[test]
fn given_tied_counts_when_summarized_then_first_encountered_wins() {
    let table = table(vec![(
        "tag",
        ColumnType::Text,
        vec!["y", "x", "y", "x"],
    )]);

    let summary = summarize_categorical(&table);
    let columns = match summary {
        CategoricalSummary::Columns(columns) => columns,
        CategoricalSummary::NoCategoricalData => panic!("expected counts"),
    };

    assert_eq!(columns[0].counts[0].value, "y");
    assert_eq!(columns[0].counts[1].value, "x");
}

#[test]
fn given_empty_cells_when_summarized_then_counts_sum_to_row_count() {
    let table = table(vec![(
        "tag",
        ColumnType::Text,
        vec!["a", "", "a", ""],
    )]);

    let summary = summarize_categorical(&table);
    let columns = match summary {
        CategoricalSummary::Columns(columns) => columns,
        CategoricalSummary::NoCategoricalData => panic!("expected counts"),
    };

    let total: usize = columns[0].counts.iter().map(|vc| vc.count).sum();
    assert_eq!(total, 4);
}

#[test]
fn given_no_text_columns_when_summarized_then_returns_sentinel() {
    let table = table(vec![("x", ColumnType::Numeric, vec!["1", "2"])]);

    assert_eq!(
        summarize_categorical(&table),
        CategoricalSummary::NoCategoricalData
    );
}
