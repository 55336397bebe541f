use crate::application::ports::{AnswerBackend, AnswerBackendError};
use crate::domain::AnswerResult;

/// Deterministic backend for local development and tests; no inference
/// service required.
pub struct MockAnswerBackend;

#[async_trait::async_trait]
impl AnswerBackend for MockAnswerBackend {
    async fn answer(
        &self,
        _context: &str,
        question: &str,
    ) -> Result<AnswerResult, AnswerBackendError> {
        Ok(AnswerResult::Answer(format!(
            "Mock answer to: \"{}\"",
            question
        )))
    }
}
