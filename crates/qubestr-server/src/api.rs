//! HTTP handlers for the Qubestr relay.

use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use qubestr_types::{Event, Filter, RequestContext, ValidationOutcome};
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

/// Media type of the NIP-11 relay information document.
pub const NOSTR_JSON: &str = "application/nostr+json";

const LANDING_PAGE: &str = "<h1>Qubestr Nostr Relay</h1>
<p>Specialized relay for hyperqube custom events (kinds 33321 and 3333)</p>";

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Handler for `GET /`.
///
/// Serves the NIP-11 document to clients that ask for `application/nostr+json`
/// and a short landing page to everyone else.
pub async fn root_handler(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let wants_info = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains(NOSTR_JSON));

    if wants_info {
        let body = Json(state.info.as_ref().clone());
        ([(header::CONTENT_TYPE, NOSTR_JSON)], body).into_response()
    } else {
        Html(LANDING_PAGE).into_response()
    }
}

/// Health check handler.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for `POST /api/admission/event`.
///
/// Runs the event hook chain against the submitted event and reports the
/// outcome. A rejected event is never stored or forwarded.
pub async fn check_event_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<Event>, JsonRejection>,
) -> Result<Json<ValidationOutcome>, ApiError> {
    let Json(event) = payload?;
    let outcome = state.hooks.check_event(&ctx, &event);
    if outcome.reject {
        tracing::debug!(event_id = %event.id, reason = %outcome.reason, "event refused");
    }
    Ok(Json(outcome))
}

/// Handler for `POST /api/admission/filter`.
///
/// Runs the filter hook chain before any read is attempted.
pub async fn check_filter_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<Filter>, JsonRejection>,
) -> Result<Json<ValidationOutcome>, ApiError> {
    let Json(filter) = payload?;
    let outcome = state.hooks.check_filter(&ctx, &filter);
    if outcome.reject {
        tracing::debug!(reason = %outcome.reason, "filter refused");
    }
    Ok(Json(outcome))
}
