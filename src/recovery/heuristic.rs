//! Free-text extraction for replies that contain no parseable JSON.
//!
//! Everything here is best effort. Ingredient decomposition in particular will
//! misread phrasings like "salt to taste"; such lines keep their full text as
//! the ingredient name.

use crate::model::{Ingredient, Recipe, UNKNOWN_DISH};
use regex::Regex;
use std::sync::LazyLock;

/// Ingredient inserted when no ingredient could be recovered.
pub const PLACEHOLDER_INGREDIENT: &str =
    "Unable to extract ingredients from the AI response";

/// Step inserted when no instruction could be recovered.
pub const PLACEHOLDER_INSTRUCTION: &str = "Unable to extract cooking instructions. \
     Try again with a clearer photo of the dish, or review the raw AI response manually.";

const MIN_INSTRUCTION_CHARS: usize = 10;
const MIN_SENTENCE_CHARS: usize = 20;

static TITLE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t#*]*(?:recipe|title|dish)[ \t*]*:[ \t]*(.+)$").unwrap()
});

// A heading is the whole line: the bare word, or the word and anything up to a
// trailing colon ("Ingredients (serves 4):"). Prose starting with the word is not.
static INGREDIENTS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t#*]*ingredients\b(?:[^\n]*:)?[ \t*]*\r?$").unwrap()
});

static INSTRUCTIONS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t#*]*(?:instructions|directions|steps|method)\b(?:[^\n]*:)?[ \t*]*\r?$",
    )
    .unwrap()
});

// Bullets, "1." / "1)" numbering, and "Step 1:" prefixes.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:[-*•+]+\s*|\d+[.)](?:\s+|$)|step\s+\d+\s*[:.)-]?\s*)").unwrap()
});

// quantity (integer, decimal, fraction, range, mixed number), optional unit word, name
static INGREDIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d*[½¼¾⅓⅔⅛]|\d+(?:[./]\d+)?(?:\s*-\s*\d+(?:[./]\d+)?)?(?:\s+\d+/\d+)?)\s*([A-Za-z]+\.?)?\s+(.+)$",
    )
    .unwrap()
});

static MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d+(?:/\d+)?\s*(?:cups?|tablespoons?|tbsps?|teaspoons?|tsps?|pounds?|lbs?|ounces?|oz|grams?|g|kilograms?|kg|milliliters?|ml|liters?)\b",
    )
    .unwrap()
});

static COOKING_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:heat|cook|bake|mix|stir|add|combine)").unwrap());

/// Build a recipe out of prose. Always succeeds.
pub fn extract(text: &str) -> Recipe {
    let mut ingredients = extract_ingredients(text);
    let mut instructions = extract_instructions(text);

    if ingredients.is_empty() && instructions.is_empty() {
        let (sentence_ingredients, sentence_instructions) = classify_sentences(text);
        ingredients = sentence_ingredients;
        instructions = sentence_instructions;
    }

    if ingredients.is_empty() {
        ingredients.push(Ingredient::new(PLACEHOLDER_INGREDIENT, "", ""));
    }
    if instructions.is_empty() {
        instructions.push(PLACEHOLDER_INSTRUCTION.to_string());
    }

    Recipe {
        title: extract_title(text),
        ingredients,
        instructions,
        ..Default::default()
    }
}

/// A `Recipe:`/`Title:`/`Dish:` label wins, then the first non-empty line.
pub fn extract_title(text: &str) -> String {
    let labeled = TITLE_LABEL
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| clean_title(m.as_str()));

    labeled
        .filter(|t| !t.is_empty())
        .or_else(|| {
            text.lines()
                .map(clean_title)
                .find(|line| !line.is_empty())
        })
        .unwrap_or_else(|| UNKNOWN_DISH.to_string())
}

fn clean_title(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c == '#' || c == '*' || c.is_whitespace())
        .to_string()
}

/// Lines between the "Ingredients" heading and the next section heading.
pub fn extract_ingredients(text: &str) -> Vec<Ingredient> {
    let Some(heading) = INGREDIENTS_HEADING.find(text) else {
        return Vec::new();
    };

    let rest = &text[heading.end()..];
    let section = match INSTRUCTIONS_HEADING.find(rest) {
        Some(next) => &rest[..next.start()],
        None => rest,
    };

    section
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(parse_ingredient_line)
        .collect()
}

/// Lines after the instructions heading, numbering removed.
pub fn extract_instructions(text: &str) -> Vec<String> {
    let Some(heading) = INSTRUCTIONS_HEADING.find(text) else {
        return Vec::new();
    };

    text[heading.end()..]
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_INSTRUCTION_CHARS)
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Split one ingredient line into quantity, unit and name.
///
/// Lines that don't start with a quantity become the name, with quantity "1".
pub fn parse_ingredient_line(line: &str) -> Ingredient {
    let line = line.trim();
    match INGREDIENT_LINE.captures(line) {
        Some(caps) => Ingredient::new(
            caps[3].trim(),
            caps[1].trim(),
            caps.get(2).map(|m| m.as_str()).unwrap_or_default(),
        ),
        None => Ingredient::new(line, "1", ""),
    }
}

/// Last resort for replies with no section headings at all.
fn classify_sentences(text: &str) -> (Vec<Ingredient>, Vec<String>) {
    let mut ingredients = Vec::new();
    let mut instructions = Vec::new();

    for sentence in text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
    {
        if sentence.to_lowercase().contains("ingredient") || MEASUREMENT.is_match(sentence) {
            ingredients.push(parse_ingredient_line(sentence));
        } else if COOKING_VERB.is_match(sentence) {
            instructions.push(sentence.to_string());
        }
    }

    (ingredients, instructions)
}

fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(marker) => line[marker.end()..].trim(),
        None => line.trim(),
    }
}
