// All LLM prompt constants for the meal-plan module.

/// System prompt for plan generation.
pub const PLAN_SYSTEM: &str = "You are a helpful nutrition assistant.";

/// Diet labels offered to the model. Documented in the prompt only; the
/// request field is passed through unvalidated and the model degrades
/// best-effort on unknown labels.
pub const DIET_OPTIONS: &str = "balanced, low-carb, budget, vegetarian, vegan, high-protein, \
    family-kids, weight-loss, diabetic-friendly, gluten-free";

/// Plan generation prompt template.
/// Replace `{location}`, `{ingredients}`, `{diet}` and `{diet_options}` before sending.
pub const PLAN_PROMPT_TEMPLATE: &str = r#"You are a nutrition expert helping families and individuals eat better while reducing food waste.

The user is located in {location} and has these ingredients: {ingredients}.
Generate a 7-day meal plan (Breakfast, Lunch, Dinner for each day).

Requirements:
- Respect this diet type: {diet}
  (options: {diet_options}).
- Use the provided ingredients as much as possible to reduce waste.
- Use local, easy-to-find ingredients and suggest affordable missing ones
  when needed.
- Avoid repeating the same meal within 7 days.
- Keep meals culturally neutral and simple to cook.
- Present results clearly, day by day.
"#;
