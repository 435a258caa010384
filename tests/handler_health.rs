mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_health_needs_no_identity(pool: PgPool) {
    let server = common::make_server(pool);

    server.get("/health").await.assert_status_ok();
}

#[sqlx::test]
async fn test_health_endpoint_database_down(pool: PgPool) {
    let server = common::make_server(pool.clone());
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
