use anyhow::Result;
use axum::http::HeaderValue;
use axum::{extract::{Query, State}, routing::get, Json, Router};
use search_core::{IndexConfig, IndexStats, SearchHit, SearchIndex, StopWords};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const DEFAULT_K: usize = 10;
pub const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { DEFAULT_K }

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    /// Number of hits before truncation to `k`.
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<SearchIndex>,
}

/// Load the corpus, build the index and wire up the routes.
pub fn build_app(
    corpus_dir: &Path,
    extension: &str,
    stop_words: StopWords,
    config: IndexConfig,
) -> Result<Router> {
    let index = indexer::build_index(corpus_dir, extension, stop_words, config)?;
    tracing::info!(num_docs = index.num_docs(), num_terms = index.num_terms(), "index loaded");
    Ok(router(Arc::new(index)))
}

pub fn router(index: Arc<SearchIndex>) -> Router {
    let origins = std::env::var("CORS_ALLOW_ORIGIN").ok();
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/stats", get(stats_handler))
        .with_state(AppState { index })
        .layer(cors_layer(origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}

/// Origins listed in a comma-separated `CORS_ALLOW_ORIGIN` value; entries that
/// are not valid header values are skipped.
pub fn parse_origins(list: &str) -> Vec<HeaderValue> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Restrict to the listed origins, or allow any when none are usable.
fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let origins = origins.map(parse_origins).unwrap_or_default();
    let allow = if origins.is_empty() { AllowOrigin::any() } else { AllowOrigin::list(origins) };
    CorsLayer::new().allow_origin(allow).allow_methods(Any).allow_headers(Any)
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let mut results = state.index.search(&params.q);
    let total_hits = results.len();
    results.truncate(params.k.clamp(1, MAX_K));
    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(query = %params.q, total_hits, took_s, "search");
    Json(SearchResponse { query: params.q, took_s, total_hits, results })
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<IndexStats> {
    Json(state.index.stats())
}
