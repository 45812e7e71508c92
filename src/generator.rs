use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::image::ImagePayload;
use crate::model::{Ingredient, Recipe, UnitSystem};
use crate::providers::{build_recipe_prompt, ProviderFactory, VisionProvider};
use crate::recovery::recover_recipe;
use log::{debug, info, warn};
use std::time::Duration;

/// Turns food photos into recipes.
///
/// Holds no mutable state; share it behind an `Arc` and call
/// [`RecipeGenerator::generate`] concurrently.
pub struct RecipeGenerator {
    provider: Option<Box<dyn VisionProvider>>,
}

impl RecipeGenerator {
    /// Generator backed by a live provider.
    pub fn new(provider: Box<dyn VisionProvider>) -> Self {
        RecipeGenerator {
            provider: Some(provider),
        }
    }

    /// Generator that always answers with [`sample_recipe`].
    pub fn demo() -> Self {
        RecipeGenerator { provider: None }
    }

    /// Build a generator from configuration.
    ///
    /// Falls back to demo mode when `demo_mode` is set or when the selected
    /// provider has no usable API key.
    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        if config.demo_mode {
            info!("Demo mode enabled in configuration, vision service will not be called");
            return Ok(Self::demo());
        }

        let (name, provider_config) = config.active_provider();
        let timeout = Duration::from_secs(config.timeout);
        match ProviderFactory::create(name, &provider_config, timeout)? {
            Some(provider) => {
                info!("Using '{}' vision provider", provider.provider_name());
                Ok(Self::new(provider))
            }
            None => {
                warn!(
                    "No API key configured for '{}', serving the sample recipe (demo mode)",
                    name
                );
                Ok(Self::demo())
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        self.provider.is_none()
    }

    /// Generate a recipe for one image.
    ///
    /// # Errors
    /// - `InvalidInput` if the image is empty; no request is made.
    /// - `GenerationFailed` if the vision service fails at the transport level.
    ///
    /// A reply that cannot be parsed is not an error: the recovery pipeline
    /// always produces a recipe.
    pub async fn generate(
        &self,
        image: &ImagePayload,
        unit_system: UnitSystem,
    ) -> Result<Recipe, RecipeError> {
        if image.is_empty() {
            return Err(RecipeError::InvalidInput("No image provided".to_string()));
        }

        let Some(provider) = &self.provider else {
            debug!("Demo mode, returning sample recipe");
            return Ok(sample_recipe(unit_system));
        };

        let prompt = build_recipe_prompt(unit_system);
        info!(
            "Generating {} recipe from {} byte image via {}",
            unit_system,
            image.len(),
            provider.provider_name()
        );

        let reply = provider.describe_image(image, &prompt).await?;
        debug!("Raw vision reply: {}", reply);

        let mut recipe = recover_recipe(&reply);
        recipe.unit_system = Some(unit_system);
        Ok(recipe)
    }
}

/// Fixed recipe returned in demo mode.
pub fn sample_recipe(unit_system: UnitSystem) -> Recipe {
    let ingredients = match unit_system {
        UnitSystem::Metric => vec![
            Ingredient::new("all-purpose flour", "250", "g"),
            Ingredient::new("milk", "300", "ml"),
            Ingredient::new("eggs", "2", ""),
            Ingredient::new("butter", "30", "g"),
        ],
        UnitSystem::Imperial => vec![
            Ingredient::new("all-purpose flour", "2", "cups"),
            Ingredient::new("milk", "1 1/4", "cups"),
            Ingredient::new("eggs", "2", ""),
            Ingredient::new("butter", "2", "tbsp"),
        ],
    };

    let key_vars = ProviderFactory::available_providers()
        .into_iter()
        .filter_map(ProviderFactory::api_key_env_var)
        .collect::<Vec<_>>()
        .join(" or ");

    Recipe {
        title: "Sample Recipe (Demo Mode)".to_string(),
        description: "This is a placeholder recipe. No AI service credential is configured, \
                      so your photo was not analyzed."
            .to_string(),
        ingredients,
        instructions: vec![
            "Get an API key from your AI provider (for example OpenAI or Anthropic).".to_string(),
            format!(
                "Set the key for your provider ({}, or PHOTO_RECIPE__PROVIDERS__<NAME>__API_KEY) \
                 in the server environment, or add it under [providers.<name>] in config.toml.",
                key_vars
            ),
            "Make sure demo_mode is not enabled in the configuration.".to_string(),
            "Restart the server and upload your food photo again.".to_string(),
        ],
        cooking_time: Some(20),
        servings: Some(4),
        unit_system: Some(unit_system),
    }
}
