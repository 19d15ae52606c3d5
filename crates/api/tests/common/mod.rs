#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use mfc_api::auth::jwt::{generate_access_token, JwtConfig};
use mfc_api::auth::password::hash_password;
use mfc_api::config::ServerConfig;
use mfc_api::router::build_app_router;
use mfc_api::state::AppState;
use mfc_core::roles::role_for;
use mfc_core::types::DbId;
use mfc_db::models::category::CreateCategory;
use mfc_db::models::office::CreateOffice;
use mfc_db::models::office_service::CreateOfficeService;
use mfc_db::models::service::CreateService;
use mfc_db::models::user::{CreateUser, User};
use mfc_db::repositories::{CategoryRepo, OfficeRepo, OfficeServiceRepo, ServiceRepo, UserRepo};
use mfc_notifications::Notifier;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "test_password_123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with the production middleware stack.
///
/// Notifications are logged only; no SMTP is attempted.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone(), Notifier::log_only());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an account directly and mint a token for it.
pub async fn create_user(pool: &PgPool, username: &str, is_staff: bool) -> (User, String) {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        first_name: String::new(),
        last_name: String::new(),
        is_staff,
    };
    let user = UserRepo::create(pool, &input).await.unwrap();
    let token = generate_access_token(user.id, role_for(is_staff), &test_config().jwt).unwrap();
    (user, token)
}

/// A minimal catalog: one category, two services, one office offering only
/// the first service.
pub struct Catalog {
    pub category_id: DbId,
    pub offered_service_id: DbId,
    pub other_service_id: DbId,
    pub office_id: DbId,
}

pub async fn create_catalog(pool: &PgPool) -> Catalog {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Паспортные услуги".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let service = |name: &str| CreateService {
        category_id: category.id,
        name: name.to_string(),
        description: None,
        execution_term: "10 дней".to_string(),
        cost: Some(Decimal::new(300, 0)),
    };
    let offered = ServiceRepo::create(pool, &service("Замена паспорта в 20 лет"))
        .await
        .unwrap();
    let other = ServiceRepo::create(pool, &service("Выдача загранпаспорта"))
        .await
        .unwrap();

    let office = OfficeRepo::create(
        pool,
        &CreateOffice {
            name: "МФЦ на Ленина".to_string(),
            address: "ул. Ленина, д. 1".to_string(),
            phone: "+74951234567".to_string(),
            work_schedule: "пн-пт 9:00-18:00".to_string(),
        },
    )
    .await
    .unwrap();

    OfficeServiceRepo::create(
        pool,
        &CreateOfficeService {
            office_id: office.id,
            service_id: offered.id,
        },
    )
    .await
    .unwrap();

    Catalog {
        category_id: category.id,
        offered_service_id: offered.id,
        other_service_id: other.id,
        office_id: office.id,
    }
}
