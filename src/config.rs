use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Provider used for recipe generation
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Skip the vision service and always answer with the sample recipe
    #[serde(default)]
    pub demo_mode: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Configuration for a specific vision provider
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProviderConfig {
    /// Model identifier (e.g., "gpt-4o", "claude-sonnet-4-5")
    pub model: Option<String>,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            demo_mode: false,
            timeout: default_timeout(),
            server: ServerConfig::default(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "openai".to_string()
}

// Output is machine-parsed, keep sampling conservative.
fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_timeout() -> u64 {
    60
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ProviderConfig {
    pub fn default_temperature() -> f32 {
        default_temperature()
    }

    pub fn default_max_tokens() -> u32 {
        default_max_tokens()
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PHOTO_RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PHOTO_RECIPE__PROVIDERS__OPENAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configuration of the provider named by `default_provider`, if present.
    ///
    /// A provider that is selected but has no table of its own still gets
    /// defaults, so a bare `OPENAI_API_KEY` in the environment is enough.
    pub fn active_provider(&self) -> (&str, ProviderConfig) {
        let name = self.default_provider.as_str();
        let config = self.providers.get(name).cloned().unwrap_or_else(|| ProviderConfig {
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            ..Default::default()
        });
        (name, config)
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: PHOTO_RECIPE__PROVIDERS__OPENAI__API_KEY
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: PHOTO_RECIPE__PROVIDERS__OPENAI__API_KEY
        .add_source(
            Environment::with_prefix("PHOTO_RECIPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Whether `key` looks like a real credential rather than a template value.
pub fn is_usable_api_key(key: &str) -> bool {
    let key = key.trim().to_ascii_lowercase();
    if key.is_empty() {
        return false;
    }

    const PLACEHOLDERS: [&str; 6] = [
        "your_api_key_here",
        "your-api-key",
        "your_api_key",
        "changeme",
        "placeholder",
        "replace_me",
    ];

    !(PLACEHOLDERS.contains(&key.as_str())
        || key.starts_with("your")
        || key.starts_with("sk-your")
        || key.starts_with("sk-xxx")
        || key.chars().all(|c| c == 'x' || c == '*' || c == '-'))
}
