//! Handler for the read-only base templates.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::api::extract::DashboardFilter;
use crate::api::response::{EntityResponse, ListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the base templates.
///
/// # Endpoint
///
/// `GET /base-template?dashboard={category}`
///
/// # Response Shapes
///
/// - without `dashboard`: `{"data": [<base template>, ...]}`
/// - with `dashboard`: `{"data": <base template>}`
///
/// # Errors
///
/// Returns 400 if `dashboard` is not a known category.
pub async fn base_templates_handler(
    State(state): State<AppState>,
    DashboardFilter(category): DashboardFilter,
) -> Result<Response, AppError> {
    let Some(category) = category else {
        let templates = state.template_service.all_base_templates();
        return Ok(Json(ListResponse::new(templates)).into_response());
    };

    let template = state.template_service.base_template(category)?;

    Ok(Json(EntityResponse::new(template)).into_response())
}
