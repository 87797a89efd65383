use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::summary::errors::SummaryError;
use crate::domain::summary::models::Summary;
use crate::domain::summary::ports::SummarizerClient;
use crate::domain::summary::ports::SummaryServicePort;

const MIN_TEXT_LENGTH: usize = 5;

/// Domain service for the summarize operation.
///
/// Cleans and length-checks the input before handing it to the injected
/// summarizer client.
pub struct SummaryService<SC>
where
    SC: SummarizerClient,
{
    client: Arc<SC>,
}

impl<SC> SummaryService<SC>
where
    SC: SummarizerClient,
{
    pub fn new(client: Arc<SC>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<SC> SummaryServicePort for SummaryService<SC>
where
    SC: SummarizerClient,
{
    async fn summarize(&self, text: &str) -> Result<Summary, SummaryError> {
        let cleaned_text = text.trim();
        if cleaned_text.chars().count() < MIN_TEXT_LENGTH {
            return Err(SummaryError::TextTooShort {
                min: MIN_TEXT_LENGTH,
            });
        }

        tracing::info!(text_length = cleaned_text.len(), "Summarization requested");

        let summary = self.client.summarize(cleaned_text).await?;

        tracing::info!("Summarization successful");

        Ok(Summary {
            original_text: cleaned_text.to_string(),
            summary,
        })
    }
}
