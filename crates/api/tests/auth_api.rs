//! HTTP-level tests for registration, login and the current-user endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_user, get, get_auth, post_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

fn registration(username: &str, snils: &str) -> serde_json::Value {
    json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "strong-password",
        "first_name": "Иван",
        "last_name": "Иванов",
        "phone": "+79001234567",
        "snils": snils,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_citizen_with_normalized_snils(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        registration("ivanov", "12345678901"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["role"], "citizen");
    assert_eq!(json["data"]["token_type"], "Bearer");
    let token = json["data"]["access_token"].as_str().unwrap().to_string();

    let me = body_json(get_auth(app, "/api/v1/auth/me", &token).await).await;
    assert_eq!(me["data"]["user"]["username"], "ivanov");
    assert_eq!(me["data"]["profile"]["snils"], "123-456-789 01");
    assert_eq!(me["data"]["profile"]["phone"], "+79001234567");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_snils_is_conflict_and_leaves_no_account(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let first = post_json(
        app.clone(),
        "/api/v1/auth/register",
        registration("first", "123-456-789 01"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        app,
        "/api/v1/auth/register",
        registration("second", "12345678901"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'second'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_is_conflict(pool: PgPool) {
    create_user(&pool, "taken", false).await;
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/register",
        registration("taken", "98765432100"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_registration_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        registration("citizen", "123-45"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let mut short_password = registration("citizen", "12345678901");
    short_password["password"] = json!("short");
    let response = post_json(app.clone(), "/api/v1/auth/register", short_password).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_email = registration("citizen", "12345678901");
    bad_email["email"] = json!("not-an-email");
    let response = post_json(app, "/api/v1/auth/register", bad_email).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "email must be a valid address");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_role_from_staff_flag(pool: PgPool) {
    create_user(&pool, "clerk", true).await;
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "clerk", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 3600);
    assert_eq!(json["data"]["user"]["role"], "staff");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_is_unauthorized(pool: PgPool) {
    create_user(&pool, "citizen", false).await;
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "citizen", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "nobody", "password": "whatever" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_a_valid_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}
