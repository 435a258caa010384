#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use dashboard_templates::api;
use dashboard_templates::api::handlers::health_handler;
use dashboard_templates::api::middleware::identity;
use dashboard_templates::application::services::TemplateService;
use dashboard_templates::domain::entities::{BaseTemplateRegistry, TemplateCategory};
use dashboard_templates::domain::repositories::TemplateRepository;
use dashboard_templates::infrastructure::persistence::PgTemplateRepository;
use dashboard_templates::state::AppState;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

pub use dashboard_templates::api::middleware::identity::IDENTITY_HEADER;

pub const TEMPLATES: &str = "/api/templates";

pub async fn create_test_template(
    pool: &PgPool,
    user_id: &str,
    display_name: &str,
    is_default: bool,
) -> i64 {
    let base = BaseTemplateRegistry::builtin();
    let config = &base
        .get(TemplateCategory::LandingPage)
        .unwrap()
        .template_config;

    sqlx::query_scalar(
        r#"
        INSERT INTO dashboard_templates (user_id, category, display_name, is_default, template_config)
        VALUES ($1, 'landingPage', $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(display_name)
    .bind(is_default)
    .bind(Json(config))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_templates(pool: &PgPool, user_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM dashboard_templates WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository: Arc<dyn TemplateRepository> =
        Arc::new(PgTemplateRepository::new(Arc::new(pool)));
    let service = TemplateService::new(repository, Arc::new(BaseTemplateRegistry::builtin()));

    AppState::new(Arc::new(service))
}

/// Identity header value for `user_id`.
pub fn identity_for(user_id: &str) -> String {
    identity::encode_identity(user_id)
}

/// Build a test server with the template API under [`TEMPLATES`] and `/health`.
///
/// Mirrors the production router minus rate limiting, which needs the peer
/// address of a real connection.
pub fn make_server(pool: PgPool) -> TestServer {
    let templates =
        api::routes::template_routes().route_layer(middleware::from_fn(identity::layer));

    let app = Router::new()
        .route("/health", get(health_handler))
        .nest(TEMPLATES, templates)
        .with_state(create_test_state(pool));

    TestServer::new(app).unwrap()
}
