use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::GenerationSettings;
use crate::generation::input::RequiredFields;
use crate::llm_client::{CompletionProvider, SamplingSettings, TEMPERATURE};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds nothing per-user: form state lives only inside a single request.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion provider. Default: `LlmClient` against the chat-completions API.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}

impl AppState {
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            required: RequiredFields {
                qualifications: self.config.require_qualifications,
            },
            sampling: SamplingSettings {
                temperature: TEMPERATURE,
                max_tokens: self.config.llm_max_tokens,
            },
        }
    }
}
