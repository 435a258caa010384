//! Identity header middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::api::dto::identity::IdentityHeader;
use crate::domain::entities::UserIdentity;
use crate::error::AppError;

/// Header carrying the base64-encoded identity document.
pub const IDENTITY_HEADER: &str = "x-rh-identity";

/// Resolves the caller from the `x-rh-identity` header.
///
/// # Header Format
///
/// Base64-encoded JSON:
///
/// ```json
/// {"identity": {"account_number": "123", "org_id": "456", "user": {"user_id": "abc", "username": "jdoe"}}}
/// ```
///
/// On success the decoded [`UserIdentity`] is stored in the request
/// extensions, where handlers pick it up as an extractor argument.
///
/// # Errors
///
/// Returns `403 Forbidden` with `{"errors": ["not authorized"]}` if the header
/// is missing, is not valid base64 JSON, or carries no user id.
///
/// # Example
///
/// ```rust,ignore
/// let protected = api::routes::template_routes()
///     .route_layer(middleware::from_fn(identity::layer));
/// ```
pub async fn layer(mut req: Request, next: Next) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(IDENTITY_HEADER)
        .ok_or_else(|| AppError::not_authorized("missing identity header"))?;

    let identity = decode_identity(header.as_bytes())?;
    tracing::debug!(user_id = %identity.id, "request identity resolved");

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Decodes a raw identity header value.
pub fn decode_identity(raw: &[u8]) -> Result<UserIdentity, AppError> {
    let json = STANDARD
        .decode(raw.trim_ascii())
        .map_err(|e| AppError::not_authorized(format!("identity header is not base64: {e}")))?;

    let header: IdentityHeader = serde_json::from_slice(&json)
        .map_err(|e| AppError::not_authorized(format!("identity header is not valid JSON: {e}")))?;

    header
        .into_user_identity()
        .ok_or_else(|| AppError::not_authorized("identity header has no user id"))
}

/// Encodes an identity header value for `user_id`.
///
/// Used by the admin tooling and tests to build requests.
pub fn encode_identity(user_id: &str) -> String {
    let document = serde_json::json!({
        "identity": {
            "user": { "user_id": user_id }
        }
    });
    STANDARD.encode(document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_identity() {
        let document = r#"{"identity":{"account_number":"540155","org_id":"1979710","user":{"user_id":"54321","username":"jdoe"}}}"#;
        let raw = STANDARD.encode(document);

        let identity = decode_identity(raw.as_bytes()).unwrap();

        assert_eq!(identity.id, "54321");
        assert_eq!(identity.username.as_deref(), Some("jdoe"));
        assert_eq!(identity.account_id.as_deref(), Some("540155"));
        assert_eq!(identity.org_id.as_deref(), Some("1979710"));
    }

    #[test]
    fn test_encode_round_trips() {
        let identity = decode_identity(encode_identity("alice").as_bytes()).unwrap();
        assert_eq!(identity, UserIdentity::new("alice"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_identity(b"%%%not-base64%%%").unwrap_err();
        assert!(matches!(err, AppError::NotAuthorized(_)));

        let err = decode_identity(STANDARD.encode("not json").as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::NotAuthorized(_)));
    }

    #[test]
    fn test_decode_requires_user_id() {
        let raw = STANDARD.encode(r#"{"identity":{"account_number":"1"}}"#);
        assert!(decode_identity(raw.as_bytes()).is_err());

        let raw = STANDARD.encode(r#"{"identity":{"user":{"user_id":"  "}}}"#);
        assert!(decode_identity(raw.as_bytes()).is_err());
    }
}
