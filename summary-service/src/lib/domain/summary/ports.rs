use async_trait::async_trait;

use crate::domain::summary::errors::SummaryError;
use crate::domain::summary::models::Summary;

/// Port for the summarization domain operation.
#[async_trait]
pub trait SummaryServicePort: Send + Sync + 'static {
    /// Summarize a piece of text.
    ///
    /// # Errors
    /// * `TextTooShort` - trimmed input is below the minimum length
    /// * `Upstream` - the summarizer backend failed
    async fn summarize(&self, text: &str) -> Result<Summary, SummaryError>;
}

/// Outbound collaborator producing the actual summary text.
#[async_trait]
pub trait SummarizerClient: Send + Sync + 'static {
    /// Produce a summary for already-validated text.
    ///
    /// # Errors
    /// * `Upstream` - transport or API failure
    async fn summarize(&self, text: &str) -> Result<String, SummaryError>;
}
