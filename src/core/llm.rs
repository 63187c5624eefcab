//! The completion client: one chat round trip against the configured model.

use std::time::Duration;

use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;
use llm::LLMProvider;

use super::prompt::GptModel;
use crate::api::GenerateError;

/// Send the prompt and return the model's reply text.
///
/// One request, no retry; the configured timeout is the only cancellation
/// path. Nothing is mutated on failure.
pub async fn complete(
    prompt: &str,
    api_key: &str,
    model: GptModel,
    base_url: Option<&str>,
    timeout_secs: u64,
) -> Result<String, GenerateError> {
    let mut builder = LLMBuilder::new()
        .backend(LLMBackend::OpenAI)
        .api_key(api_key)
        .model(model.as_str());
    if let Some(url) = base_url {
        builder = builder.base_url(url.to_string());
    }
    let llm = builder.build()?;

    let messages = vec![ChatMessage::user().content(prompt.to_string()).build()];
    let response = tokio::time::timeout(Duration::from_secs(timeout_secs), llm.chat(&messages))
        .await
        .map_err(|_| GenerateError::TimedOut(timeout_secs))??;

    let text = response.text().ok_or(GenerateError::EmptyCompletion)?;
    log::debug!("completion received ({} chars)", text.len());
    Ok(text)
}
