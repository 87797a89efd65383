pub mod repositories;
pub mod summarizer;
