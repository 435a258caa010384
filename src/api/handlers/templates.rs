//! Handlers for the user dashboard template endpoints.
//!
//! Every handler takes the caller's [`UserIdentity`] as an explicit argument,
//! validates its inputs through the extractors in [`crate::api::extract`] and
//! hands the work to [`crate::application::services::TemplateService`].
//! Errors are turned into responses by [`AppError`]'s `IntoResponse`.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::template::UpdateTemplateRequest;
use crate::api::extract::{DashboardFilter, TemplateId, TemplatePayload};
use crate::api::response::{EntityResponse, ListResponse};
use crate::domain::entities::{DashboardTemplate, UserIdentity};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's templates.
///
/// # Endpoint
///
/// `GET /?dashboard={category}`
///
/// Without `dashboard` (or with an empty value) all of the caller's
/// templates are returned. With a category, the caller's templates of that
/// category are returned; a first request creates the caller's default
/// template from the base template.
///
/// # Errors
///
/// Returns 400 if `dashboard` is not a known category.
pub async fn list_templates_handler(
    State(state): State<AppState>,
    user: UserIdentity,
    DashboardFilter(category): DashboardFilter,
) -> Result<Json<ListResponse<DashboardTemplate>>, AppError> {
    let templates = state
        .template_service
        .list_templates(&user.id, category)
        .await?;

    Ok(Json(ListResponse::new(templates)))
}

/// Partially updates one of the caller's templates.
///
/// # Endpoint
///
/// `PATCH /{templateId}`
///
/// # Request Body
///
/// ```json
/// {
///   "displayName": "My landing page",
///   "templateConfig": { "sm": [...], "md": [...], "lg": [...], "xl": [...] }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the id or the body is malformed.
/// Returns 403 if the template belongs to another user.
/// Returns 404 if the template does not exist.
pub async fn update_template_handler(
    State(state): State<AppState>,
    user: UserIdentity,
    TemplateId(template_id): TemplateId,
    TemplatePayload(payload): TemplatePayload<UpdateTemplateRequest>,
) -> Result<Json<EntityResponse<DashboardTemplate>>, AppError> {
    payload.validate()?;

    let template = state
        .template_service
        .update_template(template_id, &user.id, payload.into())
        .await?;

    Ok(Json(EntityResponse::new(template)))
}

/// Copies one of the caller's templates.
///
/// # Endpoint
///
/// `POST /{templateId}/copy`
///
/// The copy is owned by the caller and is not the default.
pub async fn copy_template_handler(
    State(state): State<AppState>,
    user: UserIdentity,
    TemplateId(template_id): TemplateId,
) -> Result<Json<EntityResponse<DashboardTemplate>>, AppError> {
    let template = state
        .template_service
        .copy_template(&user.id, template_id)
        .await?;

    Ok(Json(EntityResponse::new(template)))
}

/// Deletes one of the caller's templates.
///
/// # Endpoint
///
/// `DELETE /{templateId}`
///
/// Responds `204 No Content` with an empty body.
///
/// # Errors
///
/// Returns 400 if the template is the caller's default.
/// Returns 403 if the template belongs to another user.
/// Returns 404 if the template does not exist.
pub async fn delete_template_handler(
    State(state): State<AppState>,
    user: UserIdentity,
    TemplateId(template_id): TemplateId,
) -> Result<impl IntoResponse, AppError> {
    state
        .template_service
        .delete_template(&user.id, template_id)
        .await?;

    Ok((
        StatusCode::NO_CONTENT,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}

/// Makes one of the caller's templates the default for its category.
///
/// # Endpoint
///
/// `POST /{templateId}/default`
pub async fn set_default_template_handler(
    State(state): State<AppState>,
    user: UserIdentity,
    TemplateId(template_id): TemplateId,
) -> Result<Json<EntityResponse<DashboardTemplate>>, AppError> {
    let template = state
        .template_service
        .change_default_template(&user.id, template_id)
        .await?;

    Ok(Json(EntityResponse::new(template)))
}
