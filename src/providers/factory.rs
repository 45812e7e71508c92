use crate::config::{is_usable_api_key, ProviderConfig};
use crate::error::RecipeError;
use crate::providers::{AnthropicProvider, OpenAIProvider, VisionProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    ///
    /// Returns `Ok(None)` when no usable API key is available, either from the
    /// configuration or from the provider's conventional environment variable.
    /// Callers treat that as demo mode.
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Duration,
    ) -> Result<Option<Box<dyn VisionProvider>>, RecipeError> {
        let env_var = Self::api_key_env_var(provider_name)
            .ok_or_else(|| RecipeError::UnknownProvider(provider_name.to_string()))?;

        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(env_var).ok())
            .filter(|key| is_usable_api_key(key));

        let Some(api_key) = api_key else {
            return Ok(None);
        };

        let provider: Box<dyn VisionProvider> = match provider_name {
            "openai" => Box::new(OpenAIProvider::new(config, api_key, timeout)?),
            "anthropic" => Box::new(AnthropicProvider::new(config, api_key, timeout)?),
            _ => return Err(RecipeError::UnknownProvider(provider_name.to_string())),
        };

        Ok(Some(provider))
    }

    /// Environment variable holding the API key for a provider
    pub fn api_key_env_var(provider_name: &str) -> Option<&'static str> {
        match provider_name {
            "openai" => Some("OPENAI_API_KEY"),
            "anthropic" => Some("ANTHROPIC_API_KEY"),
            _ => None,
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic"]
    }
}
