//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`        - Health check (public)
//! - `{prefix}/*`          - Dashboard template API (identity header required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500 {"errors": ["internal server error"]}`
//! - **Rate limiting** - Per-IP token bucket on the template API
//! - **Identity** - `x-rh-identity` header decoding
//! - **Path normalization** - Trailing slash handling

use std::any::Any;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{identity, rate_limit, tracing};
use crate::api::response::ErrorResponse;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `route_prefix` - path the template API is mounted under, e.g.
///   `/api/chrome-service/v1/dashboard-templates`
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(
    state: AppState,
    route_prefix: &str,
    behind_proxy: bool,
) -> NormalizePath<Router> {
    let templates =
        api::routes::template_routes().route_layer(middleware::from_fn(identity::layer));

    let templates = if behind_proxy {
        templates.layer(rate_limit::proxied_layer())
    } else {
        templates.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest(route_prefix, templates)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Converts a handler panic into the generic error envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    ::tracing::error!(panic = detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal()),
    )
        .into_response()
}
