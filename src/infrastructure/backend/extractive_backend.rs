use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AnswerBackend, AnswerBackendError};
use crate::domain::AnswerResult;

/// Local extractive Q&A backend: posts (question, context) to a local
/// inference server and gets back the best answer span, if any.
pub struct ExtractiveBackend {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct ExtractiveRequest<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Deserialize)]
struct ExtractiveResponse {
    #[serde(default)]
    answer: Option<String>,
}

impl ExtractiveBackend {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl AnswerBackend for ExtractiveBackend {
    async fn answer(
        &self,
        context: &str,
        question: &str,
    ) -> Result<AnswerResult, AnswerBackendError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ExtractiveRequest { question, context })
            .send()
            .await
            .map_err(|e| AnswerBackendError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnswerBackendError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: ExtractiveResponse = response
            .json()
            .await
            .map_err(|e| AnswerBackendError::InvalidResponse(e.to_string()))?;

        match parsed.answer {
            Some(text) if !text.trim().is_empty() => Ok(AnswerResult::Answer(text)),
            _ => Ok(AnswerResult::NoAnswer),
        }
    }
}
