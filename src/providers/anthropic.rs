use crate::config::ProviderConfig;
use crate::error::RecipeError;
use crate::image::ImagePayload;
use crate::providers::{require_content, VisionProvider};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(
        config: &ProviderConfig,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, RecipeError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(AnthropicProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        AnthropicProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: ProviderConfig::default_temperature(),
            max_tokens: ProviderConfig::default_max_tokens(),
        }
    }
}

#[async_trait]
impl VisionProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> Result<String, RecipeError> {
        debug!(
            "Sending {} byte {} image to {}",
            image.len(),
            image.mime_type(),
            self.model
        );

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "messages": [
                    {
                        "role": "user",
                        "content": [
                            {
                                "type": "image",
                                "source": {
                                    "type": "base64",
                                    "media_type": image.mime_type(),
                                    "data": image.to_base64()
                                }
                            },
                            {"type": "text", "text": prompt}
                        ]
                    }
                ]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Anthropic API error ({}): {}", status, error_text);
            return Err(RecipeError::GenerationFailed(format!(
                "Anthropic API returned status {}",
                status
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        require_content(
            response_body["content"][0]["text"].as_str(),
            self.provider_name(),
        )
    }
}
