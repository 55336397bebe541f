use serde::Serialize;

use crate::application::services::DatasetAnalysis;
use crate::domain::{CategoricalSummary, NumericSummary};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub dataset: DatasetInfo,
    pub preview: Preview,
    pub numeric_summary: NumericSummaryView,
    pub categorical_summary: CategoricalSummaryView,
}

#[derive(Serialize)]
pub struct DatasetInfo {
    pub id: String,
    pub filename: String,
    pub size_bytes: u64,
    pub row_count: usize,
    pub column_count: usize,
}

#[derive(Serialize)]
pub struct Preview {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

#[derive(Serialize)]
pub struct NumericSummaryView {
    pub columns: Vec<NumericColumnView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct NumericColumnView {
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

#[derive(Serialize)]
pub struct CategoricalSummaryView {
    pub columns: Vec<CategoricalColumnView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct CategoricalColumnView {
    pub name: String,
    pub values: Vec<ValueCountView>,
}

#[derive(Serialize)]
pub struct ValueCountView {
    pub value: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub analysis: AnalysisResponse,
    pub answer: AnswerView,
}

#[derive(Serialize)]
pub struct AnswerView {
    pub text: Option<String>,
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn from_analysis(analysis: &DatasetAnalysis, preview_rows: usize) -> Self {
        let preview = analysis.table.preview(preview_rows);

        let numeric_summary = match &analysis.numeric {
            NumericSummary::Columns(stats) => NumericSummaryView {
                columns: stats
                    .iter()
                    .map(|s| NumericColumnView {
                        name: s.name.clone(),
                        count: s.count,
                        mean: s.mean,
                        std: s.std,
                        min: s.min,
                        q25: s.q25,
                        median: s.median,
                        q75: s.q75,
                        max: s.max,
                    })
                    .collect(),
                note: None,
            },
            NumericSummary::NoNumericData => NumericSummaryView {
                columns: Vec::new(),
                note: Some("No numeric columns in this dataset.".to_string()),
            },
        };

        let categorical_summary = match &analysis.categorical {
            CategoricalSummary::Columns(columns) => CategoricalSummaryView {
                columns: columns
                    .iter()
                    .map(|c| CategoricalColumnView {
                        name: c.name.clone(),
                        values: c
                            .counts
                            .iter()
                            .map(|vc| ValueCountView {
                                value: vc.value.clone(),
                                count: vc.count,
                            })
                            .collect(),
                    })
                    .collect(),
                note: None,
            },
            CategoricalSummary::NoCategoricalData => CategoricalSummaryView {
                columns: Vec::new(),
                note: Some("No categorical columns in this dataset.".to_string()),
            },
        };

        Self {
            dataset: DatasetInfo {
                id: analysis.dataset.id.as_uuid().to_string(),
                filename: analysis.dataset.filename.clone(),
                size_bytes: analysis.dataset.size_bytes,
                row_count: analysis.table.row_count(),
                column_count: analysis.table.column_count(),
            },
            preview: Preview {
                header: preview.header,
                rows: preview.rows,
                total_rows: preview.total_rows,
            },
            numeric_summary,
            categorical_summary,
        }
    }
}
