//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::generate;
use crate::generation::input::SubmissionInput;
use crate::llm_client::{Credential, MODEL};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub qualifications: Option<String>,
    #[serde(default)]
    pub current_resume: String,
}

impl From<GenerateRequest> for SubmissionInput {
    fn from(req: GenerateRequest) -> Self {
        SubmissionInput {
            credential: Credential::new(req.api_key),
            job_description: req.job_description,
            qualifications: req.qualifications.unwrap_or_default(),
            current_resume: req.current_resume,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub submission_id: Uuid,
    pub generated_resume: String,
    pub model: &'static str,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// One submission: validate → single completion call → generated text.
/// The API key is used for this call only and is not retained.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let submission_id = Uuid::new_v4();
    let input = SubmissionInput::from(request);

    let generated_resume = generate(state.llm.as_ref(), state.generation_settings(), &input).await?;
    info!("Submission {submission_id} generated {} chars", generated_resume.len());

    Ok(Json(GenerateResponse {
        submission_id,
        generated_resume,
        model: MODEL,
        generated_at: Utc::now(),
    }))
}
