//! Plan generation, the pluggable trait-based generator behind `/mealplan`.
//!
//! Default: `LlmPlanGenerator` (OpenAI chat completions via `LlmClient`).
//! `AppState` holds an `Arc<dyn PlanGenerator>`, swapped for a double in tests.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::mealplan::prompts::{DIET_OPTIONS, PLAN_PROMPT_TEMPLATE, PLAN_SYSTEM};

/// The plan generator trait. Handlers never see the LLM wire types.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(
        &self,
        ingredients: &str,
        diet: &str,
        location: &str,
    ) -> Result<String, AppError>;
}

/// Generates the weekly plan with a single LLM call. Whatever text the model
/// returns is passed through verbatim; there is no structural validation,
/// no retry and no fallback content.
pub struct LlmPlanGenerator {
    llm: LlmClient,
}

impl LlmPlanGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PlanGenerator for LlmPlanGenerator {
    async fn generate(
        &self,
        ingredients: &str,
        diet: &str,
        location: &str,
    ) -> Result<String, AppError> {
        let prompt = build_plan_prompt(ingredients, diet, location);
        let plan = self.llm.complete(&prompt, PLAN_SYSTEM).await?;
        Ok(plan)
    }
}

/// Builds the generation prompt by filling the template.
fn build_plan_prompt(ingredients: &str, diet: &str, location: &str) -> String {
    PLAN_PROMPT_TEMPLATE
        .replace("{location}", location)
        .replace("{ingredients}", ingredients)
        .replace("{diet}", diet)
        .replace("{diet_options}", DIET_OPTIONS)
}
