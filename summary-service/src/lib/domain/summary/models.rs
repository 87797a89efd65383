/// Result of one summarization call: the cleaned input and its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub original_text: String,
    pub summary: String,
}
