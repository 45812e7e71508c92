use crate::config::ProviderConfig;
use crate::error::RecipeError;
use crate::image::ImagePayload;
use crate::providers::{require_content, VisionProvider};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(
        config: &ProviderConfig,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, RecipeError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIProvider {
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
        OpenAIProvider {
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
impl VisionProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
    ) -> Result<String, RecipeError> {
        debug!(
            "Sending {} byte {} image to {} ({})",
            image.len(),
            image.mime_type(),
            self.model,
            self.base_url
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {
                        "role": "user",
                        "content": [
                            {"type": "text", "text": prompt},
                            {"type": "image_url", "image_url": {"url": image.to_data_url()}}
                        ]
                    }
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        // Check status code before attempting to parse JSON
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(RecipeError::GenerationFailed(format!(
                "OpenAI API returned status {}",
                status
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        require_content(
            response_body["choices"][0]["message"]["content"].as_str(),
            self.provider_name(),
        )
    }
}
