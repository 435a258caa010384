//! Request extractors that reject with [`AppError`].
//!
//! Axum's built-in rejections answer in plain text. These wrappers convert
//! every input failure into the `{"errors": [...]}` envelope before any
//! service is called.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::api::dto::template::DashboardQuery;
use crate::domain::entities::{TemplateCategory, UserIdentity};
use crate::error::AppError;

pub const INVALID_TEMPLATE_ID: &str = "invalid template ID";
pub const INVALID_TEMPLATE_PAYLOAD: &str = "unable to parse payload to dashboard template";

/// Parses a `templateId` path segment.
///
/// Accepts any unsigned 64-bit integer that also fits the store's signed key.
pub fn parse_template_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<u64>()
        .ok()
        .and_then(|id| i64::try_from(id).ok())
        .ok_or_else(|| AppError::validation(INVALID_TEMPLATE_ID))
}

/// The `{templateId}` path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for TemplateId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation(INVALID_TEMPLATE_ID))?;

        parse_template_id(&raw).map(TemplateId)
    }
}

/// The optional `?dashboard=` category filter.
///
/// Absent and empty values mean "all categories"; anything else must name a
/// known [`TemplateCategory`]. Only the first `dashboard` parameter counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardFilter(pub Option<TemplateCategory>);

impl<S: Send + Sync> FromRequestParts<S> for DashboardFilter {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::validation(format!("invalid query string: {e}")))?;

        let category = DashboardQuery::from_pairs(pairs)
            .dashboard
            .map(|name| name.parse::<TemplateCategory>())
            .transpose()?;

        Ok(DashboardFilter(category))
    }
}

/// JSON body of a template update.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
#[derive(Debug)]
pub struct TemplatePayload<T>(pub T);

impl<S, T> FromRequest<S> for TemplatePayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "unable to read dashboard template payload");
            AppError::validation(INVALID_TEMPLATE_PAYLOAD)
        })?;

        let payload = serde_json::from_slice::<T>(&body).map_err(|e| {
            tracing::debug!(error = %e, "rejected dashboard template payload");
            AppError::validation(INVALID_TEMPLATE_PAYLOAD)
        })?;

        Ok(TemplatePayload(payload))
    }
}

/// The caller, as resolved by [`crate::api::middleware::identity::layer`].
impl<S: Send + Sync> FromRequestParts<S> for UserIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .ok_or_else(|| AppError::not_authorized("no identity on request"))
    }
}
