//! Dashboard template route configuration.
//!
//! The router is mounted by the caller under its own prefix (see
//! [`crate::routes::app_router`]) and expects
//! [`crate::api::middleware::identity::layer`] to run in front of it.

use crate::api::handlers::{
    base_templates_handler, copy_template_handler, delete_template_handler,
    list_templates_handler, set_default_template_handler, update_template_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All dashboard template routes.
///
/// # Endpoints
///
/// - `GET    /`                       - List the caller's templates (`?dashboard=` filter)
/// - `PATCH  /{templateId}`           - Partially update a template
/// - `DELETE /{templateId}`           - Delete a template
/// - `POST   /{templateId}/copy`      - Copy a template
/// - `POST   /{templateId}/default`   - Make a template the default
/// - `GET    /base-template`          - List base templates, or fetch one by `?dashboard=`
pub fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates_handler))
        .route("/base-template", get(base_templates_handler))
        .route(
            "/{templateId}",
            patch(update_template_handler).delete(delete_template_handler),
        )
        .route("/{templateId}/copy", post(copy_template_handler))
        .route("/{templateId}/default", post(set_default_template_handler))
}
