use thiserror::Error;

/// Error for summarization operations
#[derive(Debug, Clone, Error)]
pub enum SummaryError {
    #[error("Text must be at least {min} characters")]
    TextTooShort { min: usize },

    #[error("Summarizer upstream failed: {0}")]
    Upstream(String),
}
