pub mod config;
pub mod error;
pub mod generator;
pub mod image;
pub mod model;
pub mod providers;
pub mod recovery;
pub mod server;

pub use crate::config::AppConfig;
pub use error::RecipeError;
pub use generator::{sample_recipe, RecipeGenerator};
pub use image::{ImageFormat, ImagePayload};
pub use model::{Ingredient, Recipe, UnitSystem};
pub use recovery::recover_recipe;

use log::debug;

/// Generate a recipe from an encoded image using the configuration found in
/// `config.toml` and the environment.
///
/// `encoded_image` is a `data:` URL or bare base64. `unit_system` follows
/// [`UnitSystem::from_preference`].
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = photo_recipe::generate_recipe("data:image/jpeg;base64,...", Some("metric")).await?;
/// println!("{}", recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn generate_recipe(
    encoded_image: &str,
    unit_system: Option<&str>,
) -> Result<Recipe, RecipeError> {
    let config = AppConfig::load()?;
    let generator = RecipeGenerator::from_config(&config)?;
    let image = ImagePayload::from_encoded(encoded_image)?;
    debug!("Decoded {} byte {} image", image.len(), image.mime_type());

    generator
        .generate(&image, UnitSystem::from_preference(unit_system))
        .await
}
