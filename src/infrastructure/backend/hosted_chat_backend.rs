use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AnswerBackend, AnswerBackendError};
use crate::domain::AnswerResult;
use crate::presentation::config::HostedBackendSettings;

const SYSTEM_PROMPT_TEMPLATE: &str = "You are a data analyst. Answer the user's question using \
only the dataset summary below. If the summary does not contain the answer, say so.\n\n{context}";

/// Hosted chat-completions backend: role-structured prompt, bounded output
/// tokens, fixed sampling temperature.
pub struct HostedChatBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl HostedChatBackend {
    pub fn new(client: Client, settings: &HostedBackendSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }

    fn build_messages(&self, context: &str, question: &str) -> Vec<ChatMessage> {
        let system_content = SYSTEM_PROMPT_TEMPLATE.replace("{context}", context);
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_content,
            },
            ChatMessage {
                role: "user".to_string(),
                content: question.to_string(),
            },
        ]
    }
}

#[async_trait]
impl AnswerBackend for HostedChatBackend {
    async fn answer(
        &self,
        context: &str,
        question: &str,
    ) -> Result<AnswerResult, AnswerBackendError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(context, question),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnswerBackendError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AnswerBackendError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnswerBackendError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AnswerBackendError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| AnswerResult::Answer(choice.message.content))
            .ok_or_else(|| AnswerBackendError::InvalidResponse("empty choices".to_string()))
    }
}
