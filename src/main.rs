use log::info;
use photo_recipe::server::{self, GenerateRecipeResponse};
use photo_recipe::{AppConfig, ImagePayload, RecipeGenerator, UnitSystem};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let generator = RecipeGenerator::from_config(&config)?;

    // `photo-recipe <image-path> [metric|imperial]` runs once and prints JSON;
    // with no arguments we serve HTTP.
    let args: Vec<String> = env::args().collect();
    match args.get(1) {
        Some(path) => {
            let bytes = tokio::fs::read(path).await?;
            let image = ImagePayload::new(bytes);
            let unit_system = UnitSystem::from_preference(args.get(2).map(String::as_str));
            info!("Generating recipe for {}", path);

            let recipe = generator.generate(&image, unit_system).await?;
            let response = GenerateRecipeResponse {
                success: true,
                recipe: Some(recipe),
                error: None,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        None => server::serve(&config.server, generator).await?,
    }

    Ok(())
}
