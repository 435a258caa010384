//! Repository trait for dashboard template persistence.

use crate::domain::entities::{
    DashboardTemplate, NewDashboardTemplate, TemplateCategory, TemplatePatch,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user-owned dashboard templates.
///
/// The repository does not check ownership; that is the job of
/// [`crate::application::services::TemplateService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTemplateRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Lists a user's templates ordered by id, optionally limited to one category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list_for_user(
        &self,
        user_id: &str,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<DashboardTemplate>, AppError>;

    /// Finds a template by id regardless of owner.
    async fn find_by_id(&self, id: i64) -> Result<Option<DashboardTemplate>, AppError>;

    /// Inserts a new template.
    async fn create(
        &self,
        new_template: NewDashboardTemplate,
    ) -> Result<DashboardTemplate, AppError>;

    /// Inserts `new_template` as the user's default for its category unless
    /// one already exists.
    ///
    /// Returns `None` when another default won, which happens when two
    /// requests fork the same base template concurrently.
    async fn create_default(
        &self,
        new_template: NewDashboardTemplate,
    ) -> Result<Option<DashboardTemplate>, AppError>;

    /// Applies a partial update and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the template does not exist.
    async fn update(&self, id: i64, patch: TemplatePatch) -> Result<DashboardTemplate, AppError>;

    /// Deletes a template.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the template does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Deletes every template of a user and returns how many were removed.
    async fn delete_for_user(&self, user_id: &str) -> Result<u64, AppError>;

    /// Makes `id` the user's default for its category.
    ///
    /// Clears the flag on the user's other templates of the same category in
    /// the same transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user has no template `id`.
    async fn set_default(&self, user_id: &str, id: i64) -> Result<DashboardTemplate, AppError>;

    /// Checks that the backing store answers.
    async fn health_check(&self) -> Result<(), AppError>;
}
