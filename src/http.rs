//! HTTP surface: one move endpoint plus the static plugin assets
//!
//! The handlers are deliberately thin. The move endpoint decodes the JSON
//! body, hands it to [`crate::api::respond`], and encodes the result;
//! validation rejections become plain-text 400 responses with the stable
//! client-facing messages. The asset handlers stream files from the
//! configured directory so the manifest, OpenAPI spec and logo can be
//! swapped without a rebuild.

use std::path::{Path, PathBuf};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};

use crate::api::{rejection_message, respond};
use crate::model::MoveRequest;

/// Server configuration shared across handlers
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `ai-plugin.json`, `openapi.yaml` and `logo.png`
    pub assets_dir: PathBuf,
}

/// Build the application router
pub fn router(config: AppConfig) -> Router {
    Router::new()
        .route("/v1/tictactoe", post(make_move))
        .route("/.well-known/ai-plugin.json", get(plugin_manifest))
        .route("/openapi.yaml", get(openapi_spec))
        .route("/logo.png", get(logo))
        .fallback(not_found)
        .with_state(config)
}

async fn make_move(Json(request): Json<MoveRequest>) -> Response {
    match respond(&request, &mut rand::rng()) {
        Ok(response) => {
            info!(
                board_size = response.board_size,
                status = ?response.game_status,
                "served move"
            );
            Json(response).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected move request");
            (StatusCode::BAD_REQUEST, rejection_message(&error)).into_response()
        }
    }
}

async fn plugin_manifest(State(config): State<AppConfig>) -> Response {
    serve_asset(&config.assets_dir, "ai-plugin.json", "application/json").await
}

async fn openapi_spec(State(config): State<AppConfig>) -> Response {
    serve_asset(&config.assets_dir, "openapi.yaml", "text/yaml").await
}

async fn logo(State(config): State<AppConfig>) -> Response {
    serve_asset(&config.assets_dir, "logo.png", "image/png").await
}

async fn serve_asset(dir: &Path, name: &str, content_type: &'static str) -> Response {
    match tokio::fs::read(dir.join(name)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(error) => {
            warn!(%error, asset = name, "failed to read asset");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}

async fn not_found(uri: Uri) -> Response {
    info!(path = %uri.path(), "404");
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}
