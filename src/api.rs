//! JSON HTTP surface over the artist catalog.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use catalog::{search, ArtistCache, FilterEngine, FilterQuery};
use common::Error;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ArtistCache>,
    pub engine: FilterEngine,
}

impl AppState {
    pub fn new(cache: Arc<ArtistCache>) -> Self {
        let engine = FilterEngine::new(cache.clone());
        Self { cache, engine }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/artists", get(list_artists))
        .route("/api/artists/:id", get(artist_details))
        .route("/search-suggestions", get(search_suggestions))
        .route("/api/filter", post(filter_artists))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Errors ────────────────────────────────────────────────────────────

/// Error body: `{"status": <code>, "message": <text>}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else if err.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else if matches!(err, Error::NotFound(_)) {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("{} {}", self.status.as_u16(), self.message);
        } else {
            warn!("{} {}", self.status.as_u16(), self.message);
        }

        let body = Json(json!({
            "status": self.status.as_u16(),
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "initialized": state.cache.is_initialized().await,
    }))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let snapshot = state.cache.get().await?;
    let artists = search::search_artists(&snapshot, &params.query);
    Ok(Json(artists).into_response())
}

async fn artist_details(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = match raw_id.trim().parse::<u32>() {
        Ok(id) if id > 0 => id,
        _ => return Err(ApiError::bad_request(format!("Invalid artist id: {}", raw_id))),
    };

    let snapshot = state.cache.get().await?;
    let details = search::details(&snapshot, id)?;
    Ok(Json(details).into_response())
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    init: String,
}

async fn search_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Response, ApiError> {
    let init = params.init == "true";
    if params.q.trim().is_empty() && !init {
        return Ok(Json(Vec::<common::Suggestion>::new()).into_response());
    }

    let snapshot = state.cache.get().await?;
    let suggestions = search::suggest(&snapshot, &params.q, init);
    Ok(Json(suggestions).into_response())
}

async fn filter_artists(
    State(state): State<AppState>,
    body: Result<Json<FilterQuery>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(query) = body.map_err(|e| {
        warn!("Rejected filter body: {}", e);
        ApiError::bad_request("Invalid JSON")
    })?;

    let artists = state.engine.run(&query).await?;
    Ok(Json(json!({
        "status": 200,
        "artists": artists,
    }))
    .into_response())
}
