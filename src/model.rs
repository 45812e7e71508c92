use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used whenever a dish name cannot be recovered.
pub const UNKNOWN_DISH: &str = "Unknown Dish";

/// Measurement convention requested by the caller and used for generated quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    #[default]
    Imperial,
}

impl UnitSystem {
    /// Parse a caller-supplied preference.
    ///
    /// Matching is case-insensitive. Anything unrecognized (or nothing at all)
    /// falls back to imperial.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "metric" => UnitSystem::Metric,
            _ => UnitSystem::Imperial,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingredient line item.
///
/// `quantity` stays a string so fractions, ranges and phrases like
/// "a pinch" survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Ingredient {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }
}

/// A recipe as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_system: Option<UnitSystem>,
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            title: UNKNOWN_DISH.to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cooking_time: None,
            servings: None,
            unit_system: None,
        }
    }
}
