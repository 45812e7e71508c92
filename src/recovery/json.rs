//! Structured strategies: the reply is (or contains) a JSON object.

use super::heuristic::parse_ingredient_line;
use crate::model::{Ingredient, Recipe, UnitSystem, UNKNOWN_DISH};
use log::debug;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\r?\n?(.*?)```").unwrap());

/// Parse the whole reply as a JSON object.
pub fn parse_direct(text: &str) -> Option<Recipe> {
    parse_object(text).map(|object| coerce_recipe(&object))
}

/// Parse the interior of the first fenced code block, or, when the reply has
/// no fence at all, the span from the first `{` to the last `}`.
pub fn parse_embedded(text: &str) -> Option<Recipe> {
    let candidate = match FENCED_BLOCK.captures(text) {
        Some(caps) => caps.get(1)?.as_str(),
        None => {
            let start = text.find('{')?;
            let end = text.rfind('}')?;
            if end <= start {
                return None;
            }
            &text[start..=end]
        }
    };

    parse_object(candidate.trim()).map(|object| coerce_recipe(&object))
}

/// Retry the direct parse with surrounding whitespace removed.
pub fn parse_trimmed(text: &str) -> Option<Recipe> {
    parse_direct(text.trim())
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Some(object),
        Ok(other) => {
            debug!("Reply parsed as JSON but is not an object: {}", kind_of(&other));
            None
        }
        Err(_) => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerce each field independently into the recipe schema.
///
/// Applied uniformly after any successful structured parse. Fields of the
/// wrong type fall back to their defaults; nothing here can fail.
pub fn coerce_recipe(object: &Map<String, Value>) -> Recipe {
    let title = object
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(UNKNOWN_DISH)
        .to_string();

    let description = object
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let ingredients: Vec<Ingredient> = object
        .get("ingredients")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(coerce_ingredient).collect())
        .unwrap_or_default();

    let instructions: Vec<String> = object
        .get("instructions")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(coerce_instruction).collect())
        .unwrap_or_default();

    let cooking_time = object
        .get("cookingTime")
        .and_then(Value::as_f64)
        .filter(|minutes| *minutes >= 0.0)
        .map(|minutes| minutes.round() as u32);

    let servings = object
        .get("servings")
        .and_then(Value::as_f64)
        .map(f64::round)
        .filter(|count| *count >= 1.0)
        .map(|count| count as u32);

    let unit_system = object
        .get("unitSystem")
        .and_then(Value::as_str)
        .and_then(|value| match value.trim().to_ascii_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        });

    Recipe {
        title,
        description,
        ingredients,
        instructions,
        cooking_time,
        servings,
        unit_system,
    }
}

fn coerce_ingredient(value: &Value) -> Option<Ingredient> {
    match value {
        Value::Object(fields) => {
            let name = scalar_text(fields.get("name")).unwrap_or_default();
            let quantity = scalar_text(fields.get("quantity")).unwrap_or_default();
            let unit = scalar_text(fields.get("unit")).unwrap_or_default();
            Some(Ingredient::new(name, quantity, unit))
        }
        Value::String(line) if !line.trim().is_empty() => Some(parse_ingredient_line(line)),
        _ => None,
    }
}

fn coerce_instruction(value: &Value) -> Option<String> {
    match value {
        Value::String(step) => Some(step.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(fields) => ["text", "step", "instruction"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(String::from),
        _ => None,
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
