use serde::{Deserialize, Serialize};

/// Price tier used for store suggestions and savings scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPreference {
    Budget,
    #[default]
    Moderate,
    Premium,
}

/// Request body for `/recommendations`.
///
/// `location` is required; `ingredients` defaults to empty and
/// `budget_preference` to moderate.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsRequest {
    pub location: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub budget_preference: BudgetPreference,
}

/// A nearby store suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct StoreRecommendation {
    pub name: &'static str,
    pub distance: &'static str,
    pub price_level: BudgetPreference,
    pub specialties: Vec<&'static str>,
}

/// How readily an ingredient is found locally right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    High,
    Medium,
    Low,
}

/// Local pricing and availability detail for one requested ingredient.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientPricing {
    pub name: String,
    pub local_price: f64,
    pub unit: &'static str,
    pub availability: Availability,
    pub seasonality: &'static str,
    pub alternatives: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostOptimization {
    pub total_savings: f64,
    pub tips: Vec<&'static str>,
}

/// Full recommendations document returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub stores: Vec<StoreRecommendation>,
    pub ingredient_pricing: Vec<IngredientPricing>,
    pub regional_suggestions: Vec<&'static str>,
    pub cost_optimization: CostOptimization,
}
