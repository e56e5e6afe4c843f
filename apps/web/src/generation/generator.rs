//! Resume Generation: validates one submission, composes the prompt, makes the single
//! completion call and extracts the generated text.
//!
//! Flow: validate → build prompt → provider.chat → first choice content.
//! No retries: a failed call is reported and the user resubmits.

use tracing::{info, warn};

use crate::generation::input::{RequiredFields, SubmissionInput};
use crate::generation::prompts::{
    GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM, QUALIFICATIONS_SECTION_TEMPLATE,
};
use crate::generation::GenerateError;
use crate::llm_client::{ChatMessage, CompletionProvider, SamplingSettings};

/// Per-deployment knobs for a submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationSettings {
    pub required: RequiredFields,
    pub sampling: SamplingSettings,
}

/// Runs one submission against the provider.
///
/// Returns `GenerateError::Validation` without touching the network when a
/// mandatory field is empty. Absent content in the response is an empty
/// string, not an error.
pub async fn generate(
    provider: &dyn CompletionProvider,
    settings: GenerationSettings,
    input: &SubmissionInput,
) -> Result<String, GenerateError> {
    input.validate(settings.required)?;

    let messages = build_messages(input);

    info!(
        "Requesting resume generation (jd_chars={}, resume_chars={}, qualifications={})",
        input.job_description.len(),
        input.current_resume.len(),
        input.has_qualifications()
    );

    let response = provider
        .chat(&input.credential, &messages, settings.sampling)
        .await
        .map_err(|e| {
            warn!("Resume generation failed: {e}");
            GenerateError::Provider(e)
        })?;

    let text = response.text().unwrap_or_default().to_string();
    if text.is_empty() {
        warn!("Provider returned no content for the first choice");
    }

    Ok(text)
}

/// System message plus the user message with the three fields substituted.
pub fn build_messages(input: &SubmissionInput) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(GENERATION_SYSTEM),
        ChatMessage::user(build_prompt(input)),
    ]
}

fn build_prompt(input: &SubmissionInput) -> String {
    let qualifications_section = if input.has_qualifications() {
        QUALIFICATIONS_SECTION_TEMPLATE.replace("{qualifications}", &input.qualifications)
    } else {
        String::new()
    };

    // Substitute back to front so placeholder-like text inside user fields is never touched.
    GENERATION_PROMPT_TEMPLATE
        .replacen("{current_resume}", &input.current_resume, 1)
        .replacen("{qualifications_section}", &qualifications_section, 1)
        .replacen("{job_description}", &input.job_description, 1)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::test_support::{CannedProvider, Reply};
    use crate::llm_client::{Credential, Role};

    fn filled() -> SubmissionInput {
        SubmissionInput {
            credential: Credential::new("sk-test"),
            job_description: "Backend engineer, Rust and Postgres".to_string(),
            qualifications: "Shipped a payments ledger in Rust".to_string(),
            current_resume: "Alex Kim\nSoftware Engineer at Acme".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_fields_verbatim() {
        let messages = build_messages(&filled());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, GENERATION_SYSTEM);

        let prompt = &messages[1].content;
        assert_eq!(messages[1].role, Role::User);
        assert!(prompt.contains("Job Description:\nBackend engineer, Rust and Postgres"));
        assert!(prompt.contains("Candidate Qualifications:\nShipped a payments ledger in Rust"));
        assert!(prompt.contains("Current Resume:\nAlex Kim\nSoftware Engineer at Acme"));
        assert!(prompt.contains("ATS RULES"));
        assert!(!prompt.contains('{'), "all placeholders substituted");
    }

    #[test]
    fn test_prompt_omits_empty_qualifications() {
        let mut input = filled();
        input.qualifications = "  ".to_string();
        let prompt = &build_messages(&input)[1].content;
        assert!(!prompt.contains("Candidate Qualifications"));
        assert!(prompt.contains("Current Resume:"));
    }

    #[test]
    fn test_prompt_does_not_resubstitute_user_placeholders() {
        let mut input = filled();
        input.job_description = "Mention {current_resume} literally".to_string();
        let prompt = &build_messages(&input)[1].content;
        assert!(prompt.contains("Mention {current_resume} literally"));
    }

    #[tokio::test]
    async fn test_success_returns_first_choice_content() {
        let provider = CannedProvider::new(Reply::Content("RESUME TEXT"));
        let text = generate(&provider, GenerationSettings::default(), &filled())
            .await
            .unwrap();
        assert_eq!(text, "RESUME TEXT");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_string() {
        let provider = CannedProvider::new(Reply::NoChoices);
        let text = generate(&provider, GenerationSettings::default(), &filled())
            .await
            .unwrap();
        assert_eq!(text, "");

        let provider = CannedProvider::new(Reply::NullContent);
        let text = generate(&provider, GenerationSettings::default(), &filled())
            .await
            .unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_call() {
        let provider = CannedProvider::new(Reply::Content("unused"));
        let mut input = filled();
        input.credential = Credential::default();

        let err = generate(&provider, GenerationSettings::default(), &input)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::Validation(_)));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_provider_error() {
        let provider = CannedProvider::new(Reply::Malformed);
        let err = generate(&provider, GenerationSettings::default(), &filled())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::Provider(_)));
        assert!(!err.user_message().is_empty());
    }

    #[tokio::test]
    async fn test_sampling_and_credential_forwarded() {
        let provider = CannedProvider::new(Reply::Content("ok"));
        let settings = GenerationSettings {
            required: RequiredFields::default(),
            sampling: SamplingSettings {
                temperature: 0.7,
                max_tokens: Some(2000),
            },
        };
        generate(&provider, settings, &filled()).await.unwrap();

        let seen = provider.last_request().unwrap();
        assert_eq!(seen.credential, "sk-test");
        assert_eq!(seen.sampling.max_tokens, Some(2000));
        assert_eq!(seen.message_count, 2);
    }
}
