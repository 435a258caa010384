//! Dashboard template management service.

use crate::domain::entities::{
    BaseDashboardTemplate, BaseTemplateRegistry, DashboardTemplate, NewDashboardTemplate,
    TemplateCategory, TemplatePatch,
};
use crate::domain::repositories::TemplateRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service owning the business rules around dashboard templates.
///
/// Enforces:
/// - Users may only read and change their own templates
/// - Each user gets a default template per category, forked from the base template
/// - The default template cannot be deleted
pub struct TemplateService<R: TemplateRepository + ?Sized> {
    repository: Arc<R>,
    base_templates: Arc<BaseTemplateRegistry>,
}

impl<R: TemplateRepository + ?Sized> TemplateService<R> {
    /// Creates a new template service.
    pub fn new(repository: Arc<R>, base_templates: Arc<BaseTemplateRegistry>) -> Self {
        Self {
            repository,
            base_templates,
        }
    }

    /// Lists the user's templates, optionally limited to one category.
    ///
    /// When a category is requested and the user has no template for it yet,
    /// the category's base template is copied into a new default template
    /// owned by the user and returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_templates(
        &self,
        user_id: &str,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<DashboardTemplate>, AppError> {
        let templates = self.repository.list_for_user(user_id, category).await?;

        match category {
            Some(category) if templates.is_empty() => {
                self.fork_base_template(user_id, category).await
            }
            _ => Ok(templates),
        }
    }

    /// Applies a partial update to a template owned by the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the template does not exist.
    /// Returns [`AppError::NotAuthorized`] if another user owns it.
    pub async fn update_template(
        &self,
        template_id: i64,
        user_id: &str,
        patch: TemplatePatch,
    ) -> Result<DashboardTemplate, AppError> {
        let template = self.owned_template(user_id, template_id).await?;

        if patch.is_empty() {
            return Ok(template);
        }

        let updated = self.repository.update(template_id, patch).await?;
        tracing::info!(template_id, user_id, "dashboard template updated");

        Ok(updated)
    }

    /// Duplicates a template owned by the user. The copy is never the default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the template does not exist.
    /// Returns [`AppError::NotAuthorized`] if another user owns it.
    pub async fn copy_template(
        &self,
        user_id: &str,
        template_id: i64,
    ) -> Result<DashboardTemplate, AppError> {
        let template = self.owned_template(user_id, template_id).await?;

        let copy = self
            .repository
            .create(NewDashboardTemplate::copy_of(&template))
            .await?;
        tracing::info!(
            template_id,
            copy_id = copy.id,
            user_id,
            "dashboard template copied"
        );

        Ok(copy)
    }

    /// Deletes a template owned by the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the template does not exist.
    /// Returns [`AppError::NotAuthorized`] if another user owns it.
    /// Returns [`AppError::Unclassified`] if it is the user's default template.
    pub async fn delete_template(&self, user_id: &str, template_id: i64) -> Result<(), AppError> {
        let template = self.owned_template(user_id, template_id).await?;

        if template.default {
            return Err(AppError::unclassified("cannot delete default template"));
        }

        self.repository.delete(template_id).await?;
        tracing::info!(template_id, user_id, "dashboard template deleted");

        Ok(())
    }

    /// Makes a template the user's default for its category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the template does not exist.
    /// Returns [`AppError::NotAuthorized`] if another user owns it.
    pub async fn change_default_template(
        &self,
        user_id: &str,
        template_id: i64,
    ) -> Result<DashboardTemplate, AppError> {
        let template = self.owned_template(user_id, template_id).await?;

        if template.default {
            return Ok(template);
        }

        let updated = self.repository.set_default(user_id, template_id).await?;
        tracing::info!(
            template_id,
            user_id,
            category = %updated.category,
            "default dashboard template changed"
        );

        Ok(updated)
    }

    /// Returns every base template.
    pub fn all_base_templates(&self) -> Vec<BaseDashboardTemplate> {
        self.base_templates.all().to_vec()
    }

    /// Returns the base template of a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the registry has no such template.
    pub fn base_template(
        &self,
        category: TemplateCategory,
    ) -> Result<BaseDashboardTemplate, AppError> {
        self.base_templates
            .get(category)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("base template {category} not found")))
    }

    /// Checks that the repository is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }

    /// Loads a template and checks that `user_id` owns it.
    async fn owned_template(
        &self,
        user_id: &str,
        template_id: i64,
    ) -> Result<DashboardTemplate, AppError> {
        let template = self
            .repository
            .find_by_id(template_id)
            .await?
            .ok_or_else(AppError::record_not_found)?;

        if !template.is_owned_by(user_id) {
            return Err(AppError::not_authorized(format!(
                "user {user_id} does not own template {template_id}"
            )));
        }

        Ok(template)
    }

    /// Creates the user's default template for `category` from the base
    /// template. A concurrent request may fork first; its template is
    /// returned instead.
    async fn fork_base_template(
        &self,
        user_id: &str,
        category: TemplateCategory,
    ) -> Result<Vec<DashboardTemplate>, AppError> {
        let base = self.base_template(category)?;

        let created = self
            .repository
            .create_default(NewDashboardTemplate::from_base(user_id, &base, true))
            .await?;

        match created {
            Some(created) => {
                tracing::info!(
                    template_id = created.id,
                    user_id,
                    category = %category,
                    "forked base dashboard template"
                );
                Ok(vec![created])
            }
            None => {
                tracing::debug!(user_id, category = %category, "base template already forked");
                self.repository.list_for_user(user_id, Some(category)).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TemplateConfig;
    use crate::domain::repositories::MockTemplateRepository;
    use chrono::Utc;

    fn create_test_template(id: i64, user_id: &str, default: bool) -> DashboardTemplate {
        DashboardTemplate {
            id,
            user_id: user_id.to_string(),
            category: TemplateCategory::LandingPage,
            display_name: format!("Template {id}"),
            default,
            template_config: TemplateConfig::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(mock_repo: MockTemplateRepository) -> TemplateService<MockTemplateRepository> {
        TemplateService::new(
            Arc::new(mock_repo),
            Arc::new(BaseTemplateRegistry::builtin()),
        )
    }

    #[tokio::test]
    async fn test_list_templates_without_filter() {
        let mut mock_repo = MockTemplateRepository::new();

        let templates = vec![
            create_test_template(1, "alice", true),
            create_test_template(2, "alice", false),
        ];
        mock_repo
            .expect_list_for_user()
            .withf(|user_id, category| user_id == "alice" && category.is_none())
            .times(1)
            .returning(move |_, _| Ok(templates.clone()));
        mock_repo.expect_create_default().never();

        let result = service(mock_repo).list_templates("alice", None).await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_templates_without_filter_does_not_fork() {
        let mut mock_repo = MockTemplateRepository::new();

        mock_repo
            .expect_list_for_user()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        mock_repo.expect_create_default().never();

        let result = service(mock_repo).list_templates("alice", None).await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_templates_forks_base_template() {
        let mut mock_repo = MockTemplateRepository::new();

        mock_repo
            .expect_list_for_user()
            .withf(|_, category| *category == Some(TemplateCategory::LandingPage))
            .times(1)
            .returning(|_, _| Ok(vec![]));
        mock_repo
            .expect_create_default()
            .withf(|new_template| {
                new_template.user_id == "alice"
                    && new_template.default
                    && new_template.category == TemplateCategory::LandingPage
                    && !new_template.template_config.lg.is_empty()
            })
            .times(1)
            .returning(|new_template| {
                let mut created = create_test_template(10, &new_template.user_id, true);
                created.template_config = new_template.template_config;
                Ok(Some(created))
            });

        let result = service(mock_repo)
            .list_templates("alice", Some(TemplateCategory::LandingPage))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 10);
        assert!(result[0].default);
    }

    #[tokio::test]
    async fn test_list_templates_fork_lost_to_concurrent_request() {
        let mut mock_repo = MockTemplateRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_list_for_user()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec![]));
        mock_repo
            .expect_create_default()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        mock_repo
            .expect_list_for_user()
            .withf(|user_id, category| {
                user_id == "alice" && *category == Some(TemplateCategory::LandingPage)
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec![create_test_template(7, "alice", true)]));

        let result = service(mock_repo)
            .list_templates("alice", Some(TemplateCategory::LandingPage))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 7);
    }

    #[tokio::test]
    async fn test_list_templates_existing_category() {
        let mut mock_repo = MockTemplateRepository::new();

        let templates = vec![create_test_template(3, "alice", true)];
        mock_repo
            .expect_list_for_user()
            .times(1)
            .returning(move |_, _| Ok(templates.clone()));
        mock_repo.expect_create_default().never();

        let result = service(mock_repo)
            .list_templates("alice", Some(TemplateCategory::LandingPage))
            .await
            .unwrap();

        assert_eq!(result[0].id, 3);
    }

    #[tokio::test]
    async fn test_update_template_success() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(42, "alice", false);
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_update()
            .withf(|id, patch| *id == 42 && patch.display_name.as_deref() == Some("Renamed"))
            .times(1)
            .returning(|id, patch| {
                let mut updated = create_test_template(id, "alice", false);
                updated.display_name = patch.display_name.unwrap();
                Ok(updated)
            });

        let patch = TemplatePatch {
            display_name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let result = service(mock_repo)
            .update_template(42, "alice", patch)
            .await
            .unwrap();

        assert_eq!(result.display_name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_template_empty_patch_skips_write() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(42, "alice", false);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_update().never();

        let result = service(mock_repo)
            .update_template(42, "alice", TemplatePatch::default())
            .await
            .unwrap();

        assert_eq!(result.id, 42);
    }

    #[tokio::test]
    async fn test_update_template_not_found() {
        let mut mock_repo = MockTemplateRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo)
            .update_template(42, "alice", TemplatePatch::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_template_of_other_user() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(42, "bob", false);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_update().never();

        let result = service(mock_repo)
            .update_template(42, "alice", TemplatePatch::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotAuthorized(_)));
    }

    #[tokio::test]
    async fn test_copy_template() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(5, "alice", true);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_create()
            .withf(|new_template| {
                !new_template.default && new_template.display_name == "Template 5 (copy)"
            })
            .times(1)
            .returning(|_| Ok(create_test_template(6, "alice", false)));

        let copy = service(mock_repo).copy_template("alice", 5).await.unwrap();

        assert_eq!(copy.id, 6);
        assert!(!copy.default);
    }

    #[tokio::test]
    async fn test_copy_template_of_other_user() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(5, "bob", false);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().never();

        let result = service(mock_repo).copy_template("alice", 5).await;

        assert!(matches!(result.unwrap_err(), AppError::NotAuthorized(_)));
    }

    #[tokio::test]
    async fn test_delete_template() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(8, "alice", false);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 8)
            .times(1)
            .returning(|_| Ok(()));

        let result = service(mock_repo).delete_template("alice", 8).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_default_template_rejected() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(8, "alice", true);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_delete().never();

        let result = service(mock_repo).delete_template("alice", 8).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Unclassified(_)));
        assert_eq!(err.to_string(), "cannot delete default template");
    }

    #[tokio::test]
    async fn test_change_default_template() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(9, "alice", false);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_set_default()
            .withf(|user_id, id| user_id == "alice" && *id == 9)
            .times(1)
            .returning(|_, id| Ok(create_test_template(id, "alice", true)));

        let result = service(mock_repo)
            .change_default_template("alice", 9)
            .await
            .unwrap();

        assert!(result.default);
    }

    #[tokio::test]
    async fn test_change_default_already_default() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(9, "alice", true);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_set_default().never();

        let result = service(mock_repo)
            .change_default_template("alice", 9)
            .await
            .unwrap();

        assert!(result.default);
    }

    #[tokio::test]
    async fn test_change_default_of_other_user() {
        let mut mock_repo = MockTemplateRepository::new();

        let existing = create_test_template(42, "bob", false);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_set_default().never();

        let result = service(mock_repo).change_default_template("alice", 42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotAuthorized(_)));
    }

    #[test]
    fn test_base_templates() {
        let service = service(MockTemplateRepository::new());

        assert_eq!(service.all_base_templates().len(), 1);
        let landing = service.base_template(TemplateCategory::LandingPage).unwrap();
        assert_eq!(landing.name, TemplateCategory::LandingPage);
    }
}
