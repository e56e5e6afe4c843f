pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::form::handlers as form_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form page
        .route(
            "/",
            get(form_handlers::handle_form_page).post(form_handlers::handle_form_submit),
        )
        // Generation API
        .route(
            "/api/v1/resumes/generate",
            post(generation_handlers::handle_generate),
        )
        .with_state(state)
}
