//! HTTP-level tests for the citizen `/applications` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_catalog, create_user, delete_auth, get, get_auth,
    post_json_auth, put_json_auth,
};
use mfc_core::status::ApplicationState;
use mfc_db::repositories::ApplicationRepo;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_application_is_always_submitted(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let (_, token) = create_user(&pool, "citizen", false).await;
    let app = build_test_app(pool);

    // A client-supplied status is ignored.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/applications",
        json!({
            "service_id": catalog.offered_service_id,
            "application_data": "Прошу заменить паспорт",
            "status_id": 3,
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status_id"], 1);
    assert_eq!(json["data"]["status_name"], "Подано");
    assert_eq!(json["data"]["service_name"], "Замена паспорта в 20 лет");
    assert_eq!(json["data"]["username"], "citizen");

    let list = body_json(get_auth(app, "/api/v1/applications", &token).await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn applications_require_authentication(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/applications").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_details_and_unknown_service_rejected(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let (_, token) = create_user(&pool, "citizen", false).await;
    let app = build_test_app(pool.clone());

    let response = post_json_auth(
        app.clone(),
        "/api/v1/applications",
        json!({ "service_id": catalog.offered_service_id, "application_data": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/applications",
        json!({ "service_id": 999_999, "application_data": "Заявление" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_users_application_is_not_found(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let (_, owner_token) = create_user(&pool, "owner", false).await;
    let (_, other_token) = create_user(&pool, "stranger", false).await;
    let app = build_test_app(pool.clone());

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/applications",
            json!({
                "service_id": catalog.offered_service_id,
                "application_data": "Заявление",
            }),
            &owner_token,
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/applications/{id}");

    let response = get_auth(app.clone(), &uri, &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "application_data": "Чужое" }),
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app.clone(), &uri, &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_json(get_auth(app, "/api/v1/applications", &other_token).await).await;
    assert!(list["data"].as_array().unwrap().is_empty());

    let row = ApplicationRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.application_data, "Заявление");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_edits_only_while_submitted(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let (_, token) = create_user(&pool, "citizen", false).await;
    let app = build_test_app(pool.clone());

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/applications",
            json!({
                "service_id": catalog.offered_service_id,
                "application_data": "Черновик",
            }),
            &token,
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/applications/{id}");

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({
            "service_id": catalog.other_service_id,
            "application_data": "Исправлено",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["application_data"], "Исправлено");
    assert_eq!(json["data"]["service_name"], "Выдача загранпаспорта");

    ApplicationRepo::set_status(
        &pool,
        id,
        ApplicationState::Submitted.id(),
        ApplicationState::InProgress.id(),
    )
    .await
    .unwrap()
    .unwrap();

    let response = put_json_auth(
        app,
        &uri,
        json!({ "application_data": "Слишком поздно" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["error"],
        "Application can only be edited while 'Подано', current status is 'В работе'"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_deletes_application(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let (_, token) = create_user(&pool, "citizen", false).await;
    let app = build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/applications",
            json!({
                "service_id": catalog.offered_service_id,
                "application_data": "Заявление",
            }),
            &token,
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/applications/{}", created["data"]["id"]);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
