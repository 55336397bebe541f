use std::sync::Arc;

use crate::application::ports::{AnswerBackend, AnswerBackendError};
use crate::application::services::{ContextBuilder, DatasetAnalysis};
use crate::domain::AnswerResult;

/// Builds the bounded context for an analyzed dataset and asks the configured
/// backend. The context is built once per question.
pub struct QaService<B>
where
    B: AnswerBackend + ?Sized,
{
    backend: Arc<B>,
    context_builder: ContextBuilder,
}

impl<B> QaService<B>
where
    B: AnswerBackend + ?Sized,
{
    pub fn new(backend: Arc<B>, context_builder: ContextBuilder) -> Self {
        Self {
            backend,
            context_builder,
        }
    }

    pub async fn ask(
        &self,
        analysis: &DatasetAnalysis,
        question: &str,
    ) -> Result<AnswerResult, QaError> {
        let context =
            self.context_builder
                .build(&analysis.table, &analysis.numeric, &analysis.categorical);

        tracing::debug!(
            dataset_id = %analysis.dataset.id.as_uuid(),
            context_chars = context.char_len(),
            "Context built"
        );

        let answer = self.backend.answer(context.as_str(), question).await?;
        Ok(answer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error(transparent)]
    Backend(#[from] AnswerBackendError),
}
