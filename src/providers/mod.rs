mod anthropic;
mod factory;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_recipe_prompt, RECIPE_PROMPT};

use crate::error::RecipeError;
use crate::image::ImagePayload;
use async_trait::async_trait;

/// Unified trait for all vision-capable LLM providers
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send one image plus a text prompt and return the reply text verbatim.
    ///
    /// Exactly one HTTP request is made. Any transport failure, non-success
    /// status or missing content is reported as `GenerationFailed`.
    async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> Result<String, RecipeError>;
}

/// Pull a non-blank reply out of a provider response.
pub(crate) fn require_content(
    content: Option<&str>,
    provider: &str,
) -> Result<String, RecipeError> {
    match content {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(RecipeError::GenerationFailed(format!(
            "No content in {} response",
            provider
        ))),
    }
}
