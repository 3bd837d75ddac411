//! Location-based shopping recommendations. Fully local heuristics with no
//! external calls; the price and regional tables are simulated stand-ins
//! for a future market-data integration.

use crate::recommendations::models::{
    Availability, BudgetPreference, CostOptimization, IngredientPricing, RecommendationsResponse,
    StoreRecommendation,
};

/// Per-ingredient base savings used by the cost-optimization estimate.
const BASE_SAVINGS_PER_INGREDIENT: f64 = 2.5;

/// Builds the full recommendations document for a free-text location.
pub fn build_recommendations(
    location: &str,
    ingredients: &[String],
    budget: BudgetPreference,
) -> RecommendationsResponse {
    let multiplier = location_price_multiplier(location);

    let ingredient_pricing: Vec<IngredientPricing> = ingredients
        .iter()
        .map(|ingredient| IngredientPricing {
            name: ingredient.clone(),
            local_price: base_price(ingredient) * multiplier,
            unit: ingredient_unit(ingredient),
            availability: seasonal_availability(ingredient),
            seasonality: seasonal_info(ingredient),
            alternatives: local_alternatives(ingredient),
        })
        .collect();

    RecommendationsResponse {
        stores: store_recommendations(budget),
        regional_suggestions: regional_ingredients(location),
        cost_optimization: CostOptimization {
            total_savings: potential_savings(ingredient_pricing.len(), budget),
            tips: cost_optimization_tips(budget),
        },
        ingredient_pricing,
    }
}

/// Cost-of-living adjustment keyed on substrings of the free-text location.
fn location_price_multiplier(location: &str) -> f64 {
    let location = location.to_lowercase();

    if ["new york", "san francisco", "los angeles"]
        .iter()
        .any(|metro| location.contains(metro))
    {
        1.3
    } else if ["texas", "florida", "ohio"]
        .iter()
        .any(|region| location.contains(region))
    {
        0.9
    } else {
        1.0
    }
}

fn base_price(ingredient: &str) -> f64 {
    match ingredient.to_lowercase().as_str() {
        "chicken" | "chicken breast" => 6.99,
        "beef" => 8.99,
        "ground beef" => 5.99,
        "salmon" => 12.99,
        "rice" | "brown rice" => 2.99,
        "pasta" => 1.99,
        "broccoli" => 2.49,
        "spinach" => 2.99,
        "tomatoes" => 2.99,
        "onions" => 1.49,
        "carrots" => 1.99,
        "potatoes" | "sweet potatoes" => 1.79,
        "eggs" => 3.49,
        "milk" => 3.99,
        "cheese" => 4.99,
        "bread" => 2.49,
        "avocado" => 1.49,
        _ => 3.99,
    }
}

fn ingredient_unit(ingredient: &str) -> &'static str {
    match ingredient.to_lowercase().as_str() {
        "eggs" => "dozen",
        "milk" => "gallon",
        "avocado" => "each",
        _ => "lb",
    }
}

fn seasonal_availability(ingredient: &str) -> Availability {
    match ingredient.to_lowercase().as_str() {
        "tomatoes" | "broccoli" | "carrots" | "potatoes" | "sweet potatoes" => Availability::High,
        _ => Availability::Medium,
    }
}

fn seasonal_info(ingredient: &str) -> &'static str {
    match ingredient.to_lowercase().as_str() {
        "tomatoes" => "Peak season (summer), best prices June-September",
        "broccoli" => "Peak season (fall/winter), best prices October-March",
        "spinach" => "Available year-round with slight price variations",
        "carrots" => "Available year-round with consistent pricing",
        "potatoes" => "Harvest season (fall), best prices September-November",
        "sweet potatoes" => "Peak season (fall), best prices October-December",
        _ => "Available year-round",
    }
}

fn local_alternatives(ingredient: &str) -> Vec<&'static str> {
    match ingredient.to_lowercase().as_str() {
        "salmon" => vec!["local trout", "tilapia", "cod"],
        "avocado" => vec!["local nuts", "olive oil", "sunflower seeds"],
        "quinoa" => vec!["local grains", "brown rice", "barley"],
        "spinach" => vec!["local greens", "kale", "collard greens"],
        _ => vec![],
    }
}

fn regional_ingredients(location: &str) -> Vec<&'static str> {
    let location = location.to_lowercase();

    if location.contains("california") {
        vec!["avocados", "almonds", "citrus fruits", "artichokes"]
    } else if location.contains("florida") {
        vec!["citrus fruits", "tomatoes", "peppers", "tropical fruits"]
    } else if location.contains("texas") {
        vec!["beef", "peppers", "onions", "pecans"]
    } else if location.contains("maine") {
        vec!["lobster", "blueberries", "potatoes", "maple syrup"]
    } else {
        vec!["seasonal vegetables", "local dairy", "regional grains"]
    }
}

/// Three tiered store suggestions whose price levels bend toward the
/// caller's budget preference.
fn store_recommendations(budget: BudgetPreference) -> Vec<StoreRecommendation> {
    vec![
        StoreRecommendation {
            name: "Local Farmers Market",
            distance: "0.8 miles",
            price_level: if budget == BudgetPreference::Budget {
                BudgetPreference::Budget
            } else {
                BudgetPreference::Moderate
            },
            specialties: vec!["Fresh vegetables", "Local produce", "Organic options"],
        },
        StoreRecommendation {
            name: "SuperValue Grocery",
            distance: "1.2 miles",
            price_level: BudgetPreference::Budget,
            specialties: vec!["Bulk items", "Generic brands", "Weekly deals"],
        },
        StoreRecommendation {
            name: "Fresh & Fine Market",
            distance: "2.1 miles",
            price_level: if budget == BudgetPreference::Premium {
                BudgetPreference::Premium
            } else {
                BudgetPreference::Moderate
            },
            specialties: vec![
                "Premium ingredients",
                "International foods",
                "Organic selection",
            ],
        },
    ]
}

fn potential_savings(ingredient_count: usize, budget: BudgetPreference) -> f64 {
    let base = ingredient_count as f64 * BASE_SAVINGS_PER_INGREDIENT;
    let budget_multiplier = match budget {
        BudgetPreference::Budget => 1.5,
        BudgetPreference::Moderate => 1.2,
        BudgetPreference::Premium => 1.0,
    };
    base * budget_multiplier
}

fn cost_optimization_tips(budget: BudgetPreference) -> Vec<&'static str> {
    let mut tips = vec![
        "Shop at farmers markets for seasonal produce",
        "Buy in bulk for non-perishable items",
        "Use store loyalty programs and digital coupons",
    ];

    if budget == BudgetPreference::Budget {
        tips.extend([
            "Consider generic brands for staple items",
            "Plan meals around weekly store sales",
            "Freeze ingredients that are on sale",
        ]);
    }

    tips
}
