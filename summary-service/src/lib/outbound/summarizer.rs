pub mod openai;

pub use openai::OpenAiSummarizer;
