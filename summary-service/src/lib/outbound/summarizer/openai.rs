use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::SummarizerConfig;
use crate::domain::summary::errors::SummaryError;
use crate::domain::summary::ports::SummarizerClient;

const SYSTEM_PROMPT: &str =
    "Summarize the user's text in a few concise sentences. Reply with the summary only.";

/// Summarizer backed by an OpenAI-compatible chat-completions API.
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(config: &SummarizerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[async_trait]
impl SummarizerClient for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": text },
            ],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummaryError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Status only; the error body may echo request details
            tracing::warn!(status = status.as_u16(), "Summarizer upstream error");
            return Err(SummaryError::Upstream(format!(
                "upstream returned status {}",
                status.as_u16()
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::Upstream(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| SummaryError::Upstream("upstream returned no choices".to_string()))
    }
}
