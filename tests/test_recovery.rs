use photo_recipe::recovery::{PLACEHOLDER_INGREDIENT, PLACEHOLDER_INSTRUCTION};
use photo_recipe::{recover_recipe, Ingredient, UnitSystem};

const OMELETTE: &str = r#"{"title":"Omelette","ingredients":[{"name":"egg","quantity":"2","unit":""}],"instructions":["Beat eggs","Cook in pan"]}"#;

const PANCAKES: &str = "Recipe: Pancakes\n\nIngredients:\n- 2 cups flour\n- 1 cup milk\n\nInstructions:\n1. Mix ingredients together\n2. Cook on griddle until golden";

#[test]
fn test_clean_json_is_returned_as_is() {
    let recipe = recover_recipe(OMELETTE);

    assert_eq!(recipe.title, "Omelette");
    assert_eq!(recipe.ingredients, vec![Ingredient::new("egg", "2", "")]);
    assert_eq!(recipe.instructions, vec!["Beat eggs", "Cook in pan"]);
    assert_eq!(recipe.description, "");
    assert_eq!(recipe.cooking_time, None);
}

#[test]
fn test_full_json_round_trips_every_field() {
    let text = r#"{
        "title": "Shakshuka",
        "description": "Eggs poached in spiced tomato sauce.",
        "ingredients": [
            {"name": "eggs", "quantity": "4", "unit": ""},
            {"name": "crushed tomatoes", "quantity": "400", "unit": "g"},
            {"name": "eggs", "quantity": "2", "unit": ""}
        ],
        "instructions": ["Simmer the sauce", "Crack in the eggs", "Cover and cook"],
        "cookingTime": 25,
        "servings": 2,
        "unitSystem": "metric"
    }"#;

    let recipe = recover_recipe(text);
    assert_eq!(recipe.title, "Shakshuka");
    assert_eq!(recipe.description, "Eggs poached in spiced tomato sauce.");
    // duplicates and order are preserved
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(
        recipe.ingredients[1],
        Ingredient::new("crushed tomatoes", "400", "g")
    );
    assert_eq!(recipe.ingredients[2], Ingredient::new("eggs", "2", ""));
    assert_eq!(
        recipe.instructions,
        vec!["Simmer the sauce", "Crack in the eggs", "Cover and cook"]
    );
    assert_eq!(recipe.cooking_time, Some(25));
    assert_eq!(recipe.servings, Some(2));
    assert_eq!(recipe.unit_system, Some(UnitSystem::Metric));
}

#[test]
fn test_fenced_json() {
    let text = "```json\n{\"title\":\"Soup\",\"ingredients\":[],\"instructions\":[\"Boil water\"]}\n```";
    let recipe = recover_recipe(text);

    assert_eq!(recipe.title, "Soup");
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.instructions, vec!["Boil water"]);
}

#[test]
fn test_fenced_json_equals_direct_parse() {
    let fenced = format!("Here you go:\n```json\n{}\n```\nBon appétit!", OMELETTE);
    assert_eq!(recover_recipe(&fenced), recover_recipe(OMELETTE));
}

#[test]
fn test_json_embedded_in_prose() {
    let text = format!("I think this is an omelette. {} Let me know!", OMELETTE);
    assert_eq!(recover_recipe(&text), recover_recipe(OMELETTE));
}

#[test]
fn test_malformed_fields_are_coerced() {
    let text = r#"{"title": null, "ingredients": "eggs", "instructions": ["Whisk"], "cookingTime": "ten"}"#;
    let recipe = recover_recipe(text);

    assert_eq!(recipe.title, "Unknown Dish");
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.instructions, vec!["Whisk"]);
    assert_eq!(recipe.cooking_time, None);
}

#[test]
fn test_prose_with_sections() {
    let recipe = recover_recipe(PANCAKES);

    assert_eq!(recipe.title, "Pancakes");
    assert_eq!(
        recipe.ingredients,
        vec![
            Ingredient::new("flour", "2", "cups"),
            Ingredient::new("milk", "1", "cup"),
        ]
    );
    assert_eq!(
        recipe.instructions,
        vec!["Mix ingredients together", "Cook on griddle until golden"]
    );
}

#[test]
fn test_markdown_prose() {
    let text = "## Garlic Butter Shrimp\n\n**Ingredients**\n* 1 lb shrimp\n* 4 cloves garlic\n* salt to taste\n\n**Directions**\n1. Melt the butter in a skillet\n2. Add garlic and cook for one minute\n3. Add shrimp and cook until pink";
    let recipe = recover_recipe(text);

    assert_eq!(recipe.title, "Garlic Butter Shrimp");
    assert_eq!(
        recipe.ingredients,
        vec![
            Ingredient::new("shrimp", "1", "lb"),
            Ingredient::new("garlic", "4", "cloves"),
            Ingredient::new("salt to taste", "1", ""),
        ]
    );
    assert_eq!(recipe.instructions.len(), 3);
    assert_eq!(recipe.instructions[2], "Add shrimp and cook until pink");
}

#[test]
fn test_empty_reply_yields_placeholders() {
    for text in ["", "   \n\n  ", "I'm sorry, I can't help with that."] {
        let recipe = recover_recipe(text);
        assert_eq!(recipe.ingredients.len(), 1, "input: {:?}", text);
        assert_eq!(recipe.ingredients[0].name, PLACEHOLDER_INGREDIENT);
        assert_eq!(recipe.instructions, vec![PLACEHOLDER_INSTRUCTION]);
    }
}

#[test]
fn test_recovery_is_idempotent() {
    let inputs = [
        OMELETTE,
        PANCAKES,
        "",
        "```json\n{broken",
        "Combine everything in a bowl and stir well. Then bake it!",
    ];

    for text in inputs {
        assert_eq!(recover_recipe(text), recover_recipe(text), "input: {:?}", text);
    }
}

#[test]
fn test_truncated_json_falls_back_to_text() {
    // A reply cut off by the token limit.
    let text = "{\"title\": \"Lasagna\", \"ingredients\": [{\"name\": \"pasta\"";
    let recipe = recover_recipe(text);

    assert_eq!(recipe.title, "{\"title\": \"Lasagna\", \"ingredients\": [{\"name\": \"pasta\"");
    // The fragment mentions "ingredients", so sentence classification keeps it.
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.instructions, vec![PLACEHOLDER_INSTRUCTION]);
}

#[test]
fn test_heading_with_annotation_adds_no_stray_entries() {
    let text = "Ingredients are simple here.\nRecipe: Bread\nIngredients (serves 4):\n- 2 cups flour\nInstructions (about 30 minutes):\n1. Knead the dough well";
    let recipe = recover_recipe(text);

    assert_eq!(recipe.title, "Bread");
    assert_eq!(recipe.ingredients, vec![Ingredient::new("flour", "2", "cups")]);
    assert_eq!(recipe.instructions, vec!["Knead the dough well"]);
}

#[test]
fn test_untrimmed_title_and_empty_ingredient_are_kept() {
    let text = r#"{"title":"  Omelette ","ingredients":[{"name":"","quantity":"","unit":""}],"instructions":[]}"#;
    let recipe = recover_recipe(text);

    assert_eq!(recipe.title, "  Omelette ");
    assert_eq!(recipe.ingredients, vec![Ingredient::new("", "", "")]);
}
