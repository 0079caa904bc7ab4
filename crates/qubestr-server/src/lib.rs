//! Qubestr server library logic.

pub mod api;
pub mod config;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Router,
};
use qubestr_policy::{HookChain, Roster};
use qubestr_types::RelayInfo;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Admission hooks for events and filters.
    pub hooks: Arc<HookChain>,
    /// NIP-11 relay information document.
    pub info: Arc<RelayInfo>,
}

impl AppState {
    /// State running the relay's standard policy with `roster`.
    pub fn new(roster: Roster, info: RelayInfo) -> Self {
        Self {
            hooks: Arc::new(HookChain::standard(Arc::new(roster))),
            info: Arc::new(info),
        }
    }
}

/// Maximum request body size (256 KiB). Nostr events are small.
const MAX_REQUEST_BODY_BYTES: usize = 256 * 1024;

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    let admission_routes = Router::new()
        .route("/api/admission/event", post(api::check_event_handler))
        .route("/api/admission/filter", post(api::check_filter_handler))
        .layer(axum::middleware::from_fn(middleware::identity_middleware));

    Router::new()
        .route("/", get(api::root_handler))
        .route("/health", get(api::health))
        .merge(admission_routes)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
