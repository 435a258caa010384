//! Classification of PostgreSQL errors raised by template writes.

/// Partial unique index allowing one default template per user and category.
pub const DEFAULT_TEMPLATE_CONSTRAINT: &str = "uq_dashboard_templates_default";

/// Message returned when a write would leave two defaults in one category.
pub const DEFAULT_CONFLICT: &str = "default dashboard template was changed concurrently";

/// Returns true if `e` is a unique violation on [`DEFAULT_TEMPLATE_CONSTRAINT`].
pub fn is_default_conflict(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(DEFAULT_TEMPLATE_CONSTRAINT))
}
