//! Axum route handlers for the Resources API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::resources::ResourceBundle;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResourceRequest {
    pub skill: String,
}

/// POST /api/v1/resources
///
/// Returns the aggregated resource bundle for a skill. Provider outages show
/// up as shorter (or empty) sections, never as an error response.
pub async fn handle_get_resources(
    State(state): State<AppState>,
    Json(request): Json<ResourceRequest>,
) -> Result<Json<ResourceBundle>, AppError> {
    let bundle = state.resources.get_resource_bundle(&request.skill).await?;
    Ok(Json(bundle))
}
