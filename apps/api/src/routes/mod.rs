pub mod health;
pub mod quiz;

use axum::{
    routing::{get, post},
    Router,
};

use crate::report::handlers as report_handlers;
use crate::resources::handlers as resource_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/quiz", get(quiz::quiz_handler))
        .route(
            "/api/v1/report",
            post(report_handlers::handle_generate_report),
        )
        .route(
            "/api/v1/resources",
            post(resource_handlers::handle_get_resources),
        )
        .with_state(state)
}
