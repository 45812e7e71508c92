//! Turns whatever text the vision service sent back into a [`Recipe`].
//!
//! Strategies run in order and the first one that produces a structure wins:
//!
//! 1. the whole reply parsed as a JSON object
//! 2. the interior of a fenced code block, or the outermost `{...}` span
//! 3. the whole reply again with surrounding whitespace trimmed
//! 4. free-text heuristics over section headings and sentences
//!
//! The last step is total, so [`recover_recipe`] never fails. Structured
//! results go through field coercion; heuristic results get placeholder
//! entries when nothing could be extracted.

pub mod heuristic;
pub mod json;

pub use heuristic::{PLACEHOLDER_INGREDIENT, PLACEHOLDER_INSTRUCTION};

use crate::model::Recipe;
use log::{debug, warn};

type Strategy = fn(&str) -> Option<Recipe>;

const STRUCTURED_STRATEGIES: [(&str, Strategy); 3] = [
    ("direct", json::parse_direct as Strategy),
    ("embedded", json::parse_embedded as Strategy),
    ("trimmed", json::parse_trimmed as Strategy),
];

/// Recover a recipe from a raw reply.
pub fn recover_recipe(text: &str) -> Recipe {
    for (name, strategy) in STRUCTURED_STRATEGIES {
        if let Some(recipe) = strategy(text) {
            debug!("Recovered recipe '{}' using {} parse", recipe.title, name);
            return recipe;
        }
    }

    warn!(
        "No structured data in {} byte reply, falling back to free-text extraction",
        text.len()
    );
    heuristic::extract(text)
}
