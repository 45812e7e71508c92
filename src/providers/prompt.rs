use crate::model::UnitSystem;

/// Instructions shared by every request, independent of the unit system.
///
/// The reply is machine-parsed, so the prompt insists on bare JSON with the
/// exact field names of [`crate::model::Recipe`].
pub const RECIPE_PROMPT: &str = r#"You are an expert chef. Look carefully at this photo of food and write a recipe that would recreate the dish.

Respond with ONLY a JSON object in exactly this shape:

{
  "title": "Name of the dish",
  "description": "One or two sentences describing the dish",
  "ingredients": [
    {"name": "ingredient name", "quantity": "amount as text", "unit": "unit of measure or empty string"}
  ],
  "instructions": ["First step", "Second step"],
  "cookingTime": 30,
  "servings": 4
}

Rules:
- Do not wrap the JSON in markdown code fences.
- Do not add any text before or after the JSON object.
- "quantity" is always a string, e.g. "2", "1/2", "a pinch".
- "cookingTime" is the total time in minutes as a number; "servings" is a number.
- List the instructions in the order they should be performed.
- Make reasonable inferences about ingredients, quantities and cooking method from what is visible in the image alone."#;

const METRIC_RULES: &str = "Use METRIC units: grams (g) and kilograms (kg) for weight, \
milliliters (ml) and liters (l) for volume, and degrees Celsius for temperatures. \
Example quantities: \"250\" g flour, \"500\" ml milk, bake at 180°C.";

const IMPERIAL_RULES: &str = "Use IMPERIAL/US units: ounces (oz) and pounds (lb) for weight, \
cups, tablespoons (tbsp) and teaspoons (tsp) for volume, and degrees Fahrenheit for temperatures. \
Example quantities: \"2\" cups flour, \"1/2\" cup milk, \"8\" oz cheese, bake at 350°F.";

/// Build the full prompt for the requested unit system.
pub fn build_recipe_prompt(unit_system: UnitSystem) -> String {
    let rules = match unit_system {
        UnitSystem::Metric => METRIC_RULES,
        UnitSystem::Imperial => IMPERIAL_RULES,
    };

    format!(
        "{}\n\nMeasurement system: {}. {}",
        RECIPE_PROMPT, unit_system, rules
    )
}
