//! Authenticated caller identity.

/// The user a request is made on behalf of.
///
/// Produced by [`crate::api::middleware::identity`] from the identity header
/// and trusted as-is. `id` is the only field the service relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub username: Option<String>,
    pub account_id: Option<String>,
    pub org_id: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            account_id: None,
            org_id: None,
        }
    }
}
