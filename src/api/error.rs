//! Error types for the library API.

use llm::error::LLMError;
use thiserror::Error;

/// Errors related to the sermon store (file access, serialization).
#[derive(Error, Debug)]
pub enum StoreError {
    /// An error occurred during store initialization.
    #[error("Failed to initialize store: {0}")]
    Init(String),

    /// The requested sermon could not be found by its ID.
    #[error("Sermon '{0}' not found")]
    NotFound(String),

    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize data.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced while generating a sermon with the completion API.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No key in the slot and none supplied on the command line.
    #[error("No API key available. Save one with `sermon-studio key set`.")]
    MissingApiKey,

    /// An error originating from the underlying LLM backend.
    #[error("LLM backend error: {0}")]
    Llm(#[from] LLMError),

    /// The response carried no text content.
    #[error("The model returned an empty completion")]
    EmptyCompletion,

    /// The configured client-side timeout elapsed.
    #[error("No response after {0} seconds")]
    TimedOut(u64),
}
