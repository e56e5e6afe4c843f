//! Axum route handlers for the form page.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Form,
};
use serde::Deserialize;

use crate::form::state::FormState;
use crate::form::view::{render_page, CONTENT_SECURITY_POLICY};
use crate::state::AppState;

/// Fields posted by the page. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub api_key: String,
    pub job_description: String,
    pub qualifications: String,
    pub current_resume: String,
}

fn page(form: &FormState, state: &AppState) -> impl IntoResponse {
    (
        [(header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY)],
        Html(render_page(form, state.generation_settings().required)),
    )
}

/// GET /
pub async fn handle_form_page(State(state): State<AppState>) -> impl IntoResponse {
    page(&FormState::default(), &state)
}

/// POST /
///
/// Rebuilds the form from the posted fields, runs one submission and
/// re-renders with the result or the error.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> impl IntoResponse {
    let mut form = FormState::default();
    form.set_credential(fields.api_key);
    form.set_job_description(fields.job_description);
    form.set_qualifications(fields.qualifications);
    form.set_current_resume(fields.current_resume);

    form.submit(state.llm.as_ref(), state.generation_settings()).await;

    page(&form, &state)
}
