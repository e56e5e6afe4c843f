// Resume generation: input validation, prompt composition, the single completion call.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod generator;
pub mod handlers;
pub mod input;
pub mod prompts;

use thiserror::Error;

use crate::generation::input::ValidationError;
use crate::llm_client::LlmError;

/// Shown when the provider failed without an error text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Error generating resume. Please check your API key and try again.";

/// The two ways a submission can fail.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A mandatory field was empty. Detected before any I/O.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything that went wrong during or after the network call.
    #[error("Provider call failed: {0}")]
    Provider(#[from] LlmError),
}

impl GenerateError {
    /// Text for the form's error area. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Validation(e) => e.to_string(),
            GenerateError::Provider(e) => e
                .provider_message()
                .map(str::to_string)
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }
}
