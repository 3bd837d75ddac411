use axum::Json;

use crate::errors::AppError;
use crate::recommendations::engine::build_recommendations;
use crate::recommendations::models::{RecommendationsRequest, RecommendationsResponse};

/// POST /recommendations
///
/// Pure local computation; no outbound calls.
pub async fn handle_recommendations(
    Json(req): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let location = req
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| AppError::Validation("location is required".to_string()))?;

    Ok(Json(build_recommendations(
        location,
        &req.ingredients,
        req.budget_preference,
    )))
}
