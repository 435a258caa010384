//! PostgreSQL implementation of the template repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{
    DashboardTemplate, NewDashboardTemplate, TemplateCategory, TemplateConfig, TemplatePatch,
};
use crate::domain::repositories::TemplateRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error::{DEFAULT_CONFLICT, is_default_conflict};

const COLUMNS: &str =
    "id, user_id, category, display_name, is_default, template_config, created_at, updated_at";

/// PostgreSQL repository for dashboard templates.
///
/// Layouts are stored as JSONB. Default switching runs in a transaction and is
/// backed by a partial unique index on `(user_id, category) WHERE is_default`.
/// Violations of that index surface as [`AppError::Unclassified`] with a fixed
/// message, never as the raw database error.
pub struct PgTemplateRepository {
    pool: Arc<PgPool>,
}

impl PgTemplateRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TemplateRow {
    id: i64,
    user_id: String,
    category: String,
    display_name: String,
    is_default: bool,
    template_config: Json<TemplateConfig>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn map_write_error(e: sqlx::Error) -> AppError {
    if is_default_conflict(&e) {
        tracing::warn!(error = %e, "default dashboard template conflict");
        return AppError::unclassified(DEFAULT_CONFLICT);
    }
    e.into()
}

impl TryFrom<TemplateRow> for DashboardTemplate {
    type Error = AppError;

    fn try_from(row: TemplateRow) -> Result<Self, Self::Error> {
        let category: TemplateCategory = row.category.parse().map_err(|_| {
            AppError::unclassified(format!(
                "template {} has unknown category {}",
                row.id, row.category
            ))
        })?;

        Ok(DashboardTemplate {
            id: row.id,
            user_id: row.user_id,
            category,
            display_name: row.display_name,
            default: row.is_default,
            template_config: row.template_config.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TemplateRepository for PgTemplateRepository {
    async fn list_for_user(
        &self,
        user_id: &str,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<DashboardTemplate>, AppError> {
        let rows = sqlx::query_as::<_, TemplateRow>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM dashboard_templates
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY id
            "#
        ))
        .bind(user_id)
        .bind(category.map(|c| c.as_str()))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(DashboardTemplate::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DashboardTemplate>, AppError> {
        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            "SELECT {COLUMNS} FROM dashboard_templates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(DashboardTemplate::try_from).transpose()
    }

    async fn create(
        &self,
        new_template: NewDashboardTemplate,
    ) -> Result<DashboardTemplate, AppError> {
        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            r#"
            INSERT INTO dashboard_templates (user_id, category, display_name, is_default, template_config)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new_template.user_id)
        .bind(new_template.category.as_str())
        .bind(&new_template.display_name)
        .bind(new_template.default)
        .bind(Json(&new_template.template_config))
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        row.try_into()
    }

    async fn create_default(
        &self,
        new_template: NewDashboardTemplate,
    ) -> Result<Option<DashboardTemplate>, AppError> {
        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            r#"
            INSERT INTO dashboard_templates (user_id, category, display_name, is_default, template_config)
            VALUES ($1, $2, $3, TRUE, $4)
            ON CONFLICT (user_id, category) WHERE is_default DO NOTHING
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new_template.user_id)
        .bind(new_template.category.as_str())
        .bind(&new_template.display_name)
        .bind(Json(&new_template.template_config))
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(DashboardTemplate::try_from).transpose()
    }

    async fn update(&self, id: i64, patch: TemplatePatch) -> Result<DashboardTemplate, AppError> {
        // RowNotFound from fetch_one surfaces as AppError::NotFound.
        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            r#"
            UPDATE dashboard_templates SET
                display_name    = COALESCE($2::TEXT, display_name),
                template_config = COALESCE($3::JSONB, template_config),
                updated_at      = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.display_name)
        .bind(patch.template_config.map(Json))
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM dashboard_templates WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::record_not_found());
        }

        Ok(())
    }

    async fn delete_for_user(&self, user_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM dashboard_templates WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn set_default(&self, user_id: &str, id: i64) -> Result<DashboardTemplate, AppError> {
        let mut tx = self.pool.begin().await?;

        // Serializes concurrent default switches within the user's category.
        sqlx::query(
            r#"
            SELECT id FROM dashboard_templates
            WHERE user_id = $1
              AND category = (SELECT category FROM dashboard_templates WHERE id = $2)
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE dashboard_templates SET is_default = FALSE, updated_at = NOW()
            WHERE user_id = $1
              AND is_default
              AND id <> $2
              AND category = (SELECT category FROM dashboard_templates WHERE id = $2)
            "#,
        )
        .bind(user_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_write_error)?;

        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            r#"
            UPDATE dashboard_templates SET is_default = TRUE, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_write_error)?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Err(AppError::record_not_found());
        };

        tx.commit().await.map_err(map_write_error)?;
        row.try_into()
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
