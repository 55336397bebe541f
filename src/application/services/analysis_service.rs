use std::sync::Arc;

use crate::application::ports::{TableLoader, TableLoaderError};
use crate::application::services::{summarize_categorical, summarize_numeric, Intake, IntakeError};
use crate::domain::{CategoricalSummary, Dataset, NumericSummary, Table};

/// One full intake → load → summarize run for a single upload. Summaries are
/// computed here exactly once per request.
pub struct AnalysisService<P>
where
    P: TableLoader + ?Sized,
{
    intake: Intake,
    table_loader: Arc<P>,
}

impl<P> AnalysisService<P>
where
    P: TableLoader + ?Sized,
{
    pub fn new(intake: Intake, table_loader: Arc<P>) -> Self {
        Self {
            intake,
            table_loader,
        }
    }

    pub async fn analyze(
        &self,
        dataset: Dataset,
        data: &[u8],
    ) -> Result<DatasetAnalysis, AnalysisError> {
        self.intake.check(data)?;

        let table = self.table_loader.load(data, &dataset).await?;
        let numeric = summarize_numeric(&table);
        let categorical = summarize_categorical(&table);

        tracing::debug!(
            dataset_id = %dataset.id.as_uuid(),
            rows = table.row_count(),
            columns = table.column_count(),
            "Dataset analyzed"
        );

        Ok(DatasetAnalysis {
            dataset,
            table,
            numeric,
            categorical,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatasetAnalysis {
    pub dataset: Dataset,
    pub table: Table,
    pub numeric: NumericSummary,
    pub categorical: CategoricalSummary,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Load(#[from] TableLoaderError),
}
