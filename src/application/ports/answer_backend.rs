use async_trait::async_trait;

use crate::domain::AnswerResult;

/// One polymorphic answer-generation capability. Pure function of
/// (context, question); no retry, no caching.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    async fn answer(&self, context: &str, question: &str)
        -> Result<AnswerResult, AnswerBackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerBackendError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
