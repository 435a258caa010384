//! Shape of the decoded `x-rh-identity` header.

use serde::Deserialize;

use crate::domain::entities::UserIdentity;

/// Top-level identity document.
#[derive(Debug, Deserialize)]
pub struct IdentityHeader {
    pub identity: Identity,
}

#[derive(Debug, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub user: Option<IdentityUser>,
}

#[derive(Debug, Deserialize)]
pub struct IdentityUser {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl IdentityHeader {
    /// Converts the document into a [`UserIdentity`].
    ///
    /// Returns `None` when the document carries no usable user id.
    pub fn into_user_identity(self) -> Option<UserIdentity> {
        let Identity {
            account_number,
            org_id,
            user,
        } = self.identity;
        let user = user?;
        let id = user.user_id.filter(|id| !id.trim().is_empty())?;

        Some(UserIdentity {
            id,
            username: user.username,
            account_id: account_number,
            org_id,
        })
    }
}
