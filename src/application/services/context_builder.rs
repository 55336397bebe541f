use crate::domain::{CategoricalSummary, Context, NumericSummary, Table};

/// Renders the table preview and both summaries into one labelled text blob,
/// bounded by the configured character budget.
#[derive(Debug, Clone, Copy)]
pub struct ContextBuilder {
    preview_rows: usize,
    max_chars: usize,
}

impl ContextBuilder {
    pub fn new(preview_rows: usize, max_chars: usize) -> Self {
        Self {
            preview_rows,
            max_chars,
        }
    }

    pub fn build(
        &self,
        table: &Table,
        numeric: &NumericSummary,
        categorical: &CategoricalSummary,
    ) -> Context {
        let sections = [
            self.preview_section(table),
            numeric_section(numeric),
            categorical_section(categorical),
        ];
        Context::new(sections.join("\n\n"), self.max_chars)
    }

    fn preview_section(&self, table: &Table) -> String {
        let preview = table.preview(self.preview_rows);
        let mut text = format!(
            "Dataset preview (first {} of {} rows):\n{}",
            preview.rows.len(),
            preview.total_rows,
            preview.header.join(", ")
        );
        for row in &preview.rows {
            text.push('\n');
            text.push_str(&row.join(", "));
        }
        text
    }
}

fn numeric_section(summary: &NumericSummary) -> String {
    match summary {
        NumericSummary::Columns(stats) => {
            let lines = stats
                .iter()
                .map(|s| {
                    format!(
                        "{}: count={} mean={} std={} min={} q25={} median={} q75={} max={}",
                        s.name,
                        s.count,
                        fmt_number(s.mean),
                        s.std.map(fmt_number).unwrap_or_else(|| "n/a".to_string()),
                        fmt_number(s.min),
                        fmt_number(s.q25),
                        fmt_number(s.median),
                        fmt_number(s.q75),
                        fmt_number(s.max),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("Numeric summary:\n{}", lines)
        }
        NumericSummary::NoNumericData => "Numeric summary:\nNo numeric columns.".to_string(),
    }
}

fn categorical_section(summary: &CategoricalSummary) -> String {
    match summary {
        CategoricalSummary::Columns(columns) => {
            let lines = columns
                .iter()
                .map(|c| {
                    let pairs = c
                        .counts
                        .iter()
                        .map(|vc| format!("{} ({})", vc.value, vc.count))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("{}: {}", c.name, pairs)
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("Categorical summary:\n{}", lines)
        }
        CategoricalSummary::NoCategoricalData => {
            "Categorical summary:\nNo categorical columns.".to_string()
        }
    }
}

fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.4}", value)
    }
}
