use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::AnswerBackend;
use crate::presentation::config::{BackendProvider, BackendSettings};

use super::{ExtractiveBackend, HostedChatBackend, MockAnswerBackend};

pub struct AnswerBackendFactory;

#[derive(Debug, thiserror::Error)]
pub enum AnswerBackendFactoryError {
    #[error("missing API key: the hosted backend requires backend.hosted.api_key")]
    MissingApiKey,
    #[error("http client initialization failed: {0}")]
    InitializationFailed(String),
}

impl AnswerBackendFactory {
    pub fn create(
        settings: &BackendSettings,
    ) -> Result<Arc<dyn AnswerBackend>, AnswerBackendFactoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| AnswerBackendFactoryError::InitializationFailed(e.to_string()))?;

        match settings.provider {
            BackendProvider::Hosted => {
                if settings.hosted.api_key.trim().is_empty() {
                    return Err(AnswerBackendFactoryError::MissingApiKey);
                }
                tracing::info!(model = %settings.hosted.model, "Using hosted chat backend");
                Ok(Arc::new(HostedChatBackend::new(client, &settings.hosted)))
            }
            BackendProvider::Extractive => {
                tracing::info!(url = %settings.extractive.url, "Using local extractive backend");
                Ok(Arc::new(ExtractiveBackend::new(
                    client,
                    settings.extractive.url.clone(),
                )))
            }
            BackendProvider::Mock => {
                tracing::info!("Using mock answer backend");
                Ok(Arc::new(MockAnswerBackend))
            }
        }
    }
}
