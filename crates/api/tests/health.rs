//! Root-level routes: health check, landing page and the JSON fallback.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_catalog, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database_ok(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["email_enabled"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_is_json_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_page_lists_widgets(pool: PgPool) {
    create_catalog(&pool).await;
    let app = build_test_app(pool);

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["stats"]["total_services"], 2);
    assert_eq!(data["stats"]["total_offices"], 1);
    assert_eq!(data["stats"]["avg_service_cost"], "300.00");
    assert_eq!(data["offices"].as_array().unwrap().len(), 1);
    assert_eq!(data["popular_services"].as_array().unwrap().len(), 2);
    assert!(data["latest_news"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_page_is_cached_between_requests(pool: PgPool) {
    create_catalog(&pool).await;
    let app = build_test_app(pool.clone());

    let first = body_json(get(app.clone(), "/").await).await;
    assert_eq!(first["data"]["stats"]["total_offices"], 1);

    sqlx::query(
        "INSERT INTO offices (name, address, phone, work_schedule)
         VALUES ('МФЦ Западный', 'ул. Западная, д. 25', '', '')",
    )
    .execute(&pool)
    .await
    .unwrap();

    // Same router, same cache: the new office is not visible yet.
    let second = body_json(get(app, "/").await).await;
    assert_eq!(second["data"]["stats"]["total_offices"], 1);
}
