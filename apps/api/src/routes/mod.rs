pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_mb * 1024 * 1024);

    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route(
            "/api/v1/screenings",
            post(handlers::handle_screen_resumes),
        )
        .layer(body_limit)
        .with_state(state)
}
