use crate::config::ServerConfig;
use crate::error::RecipeError;
use crate::generator::RecipeGenerator;
use crate::image::ImagePayload;
use crate::model::{Recipe, UnitSystem};
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// 10 MB image plus base64 and JSON overhead.
pub const MAX_BODY_BYTES: usize = 15 * 1024 * 1024;

/// Shown to users for every failure that is not their fault.
pub const GENERIC_FAILURE: &str = "Failed to generate recipe. Please try again.";

pub struct AppState {
    pub generator: RecipeGenerator,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    pub image: Option<String>,
    /// Kept loose so an unexpected value degrades to imperial instead of
    /// rejecting the request.
    #[serde(default)]
    pub unit_system: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRecipeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateRecipeResponse {
    fn ok(recipe: Recipe) -> Self {
        Self {
            success: true,
            recipe: Some(recipe),
            error: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            recipe: None,
            error: Some(message.into()),
        }
    }
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RecipeError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message.clone()),
            other => {
                error!("Recipe generation error: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, Json(GenerateRecipeResponse::failure(message))).into_response()
    }
}

pub fn create_router(generator: RecipeGenerator) -> Router {
    let state = Arc::new(AppState { generator });

    Router::new()
        .route("/api/generate-recipe", post(generate_recipe))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: &ServerConfig, generator: RecipeGenerator) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(generator))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down...");
        })
        .await
}

async fn generate_recipe(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRecipeRequest>, JsonRejection>,
) -> Result<Json<GenerateRecipeResponse>, Response> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected generate-recipe body: {}", rejection.body_text());
        (
            rejection_status(&rejection),
            Json(GenerateRecipeResponse::failure("Invalid request body")),
        )
            .into_response()
    })?;

    let encoded = request.image.unwrap_or_default();
    let image = ImagePayload::from_encoded(&encoded).map_err(IntoResponse::into_response)?;
    let unit_system =
        UnitSystem::from_preference(request.unit_system.as_ref().and_then(Value::as_str));

    let recipe = state
        .generator
        .generate(&image, unit_system)
        .await
        .map_err(IntoResponse::into_response)?;

    info!("Generated recipe '{}'", recipe.title);
    Ok(Json(GenerateRecipeResponse::ok(recipe)))
}

/// Any unusable body is the client's fault; only the size cap keeps its own status.
fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StatusCode::PAYLOAD_TOO_LARGE
    } else {
        StatusCode::BAD_REQUEST
    }
}

async fn health_check() -> &'static str {
    "OK"
}
