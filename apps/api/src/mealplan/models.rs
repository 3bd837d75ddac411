use serde::{Deserialize, Serialize};

/// Request body for meal-plan generation.
///
/// `ingredients` and `diet` are required. They are modeled as `Option` so
/// the handler can report a missing field as a 400 with a descriptive
/// message, the same contract `/subscribe` uses.
#[derive(Debug, Clone, Deserialize)]
pub struct MealPlanRequest {
    pub ingredients: Option<String>,
    pub diet: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
}

/// The model's plan text, passed through verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct MealPlanResponse {
    pub plan: String,
}
