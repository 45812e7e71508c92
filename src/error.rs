use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// No usable image was supplied
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The vision service was unreachable, timed out, or returned no content
    #[error("Recipe generation failed: {0}")]
    GenerationFailed(String),

    /// Requested provider is not one we know how to talk to
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RecipeError::GenerationFailed(format!("request timed out: {}", err))
        } else {
            RecipeError::GenerationFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RecipeError::InvalidInput("No image provided".to_string());
        assert_eq!(err.to_string(), "Invalid input: No image provided");

        let err = RecipeError::GenerationFailed("status 503".to_string());
        assert_eq!(err.to_string(), "Recipe generation failed: status 503");
    }
}
