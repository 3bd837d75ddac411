use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::mealplan::models::{MealPlanRequest, MealPlanResponse};
use crate::state::AppState;

/// Returns the trimmed value when present and non-empty.
/// Blank strings count as missing, matching the original backend's
/// truthiness handling of `location` and `email`.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// POST /mealplan
///
/// Resolves the location (an explicit request field wins over the profile
/// lookup), then forwards one prompt to the plan generator. The profile
/// store is only consulted when the request carries no usable location.
pub async fn handle_mealplan(
    State(state): State<AppState>,
    Json(req): Json<MealPlanRequest>,
) -> Result<Json<MealPlanResponse>, AppError> {
    let ingredients = req
        .ingredients
        .as_deref()
        .ok_or_else(|| AppError::Validation("ingredients is required".to_string()))?;
    let diet = req
        .diet
        .as_deref()
        .ok_or_else(|| AppError::Validation("diet is required".to_string()))?;

    let location = match non_empty(req.location.as_deref()) {
        Some(explicit) => Some(explicit.to_string()),
        None => match non_empty(req.email.as_deref()) {
            Some(email) => state.store.location_for_email(email).await?,
            None => None,
        },
    };

    let location = location
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| {
            AppError::Validation("Location required (or set in your profile)".to_string())
        })?;

    info!("Generating meal plan: diet={diet}, location={location}");
    let plan = state.planner.generate(ingredients, diet, &location).await?;

    Ok(Json(MealPlanResponse { plan }))
}
