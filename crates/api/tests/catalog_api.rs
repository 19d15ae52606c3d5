//! HTTP-level tests for the public catalog, search and suggestions.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_catalog, get};
use sqlx::PgPool;

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn services_filter_by_text_category_and_office(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let app = build_test_app(pool);

    let all = body_json(get(app.clone(), "/api/v1/services").await).await;
    assert_eq!(
        names(&all),
        vec!["Выдача загранпаспорта", "Замена паспорта в 20 лет"]
    );

    let by_text = body_json(get(app.clone(), "/api/v1/services?q=20").await).await;
    assert_eq!(names(&by_text), vec!["Замена паспорта в 20 лет"]);

    let uri = format!("/api/v1/services?office={}", catalog.office_id);
    let by_office = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(names(&by_office), vec!["Замена паспорта в 20 лет"]);
    assert_eq!(by_office["data"][0]["category_name"], "Паспортные услуги");

    let uri = format!(
        "/api/v1/services?category={}&limit=1&offset=1",
        catalog.category_id
    );
    let paged = body_json(get(app, &uri).await).await;
    assert_eq!(names(&paged), vec!["Замена паспорта в 20 лет"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn like_metacharacters_match_literally(pool: PgPool) {
    create_catalog(&pool).await;
    let app = build_test_app(pool);

    // `%` alone would match every row if it were not escaped.
    let json = body_json(get(app, "/api/v1/services?q=%25").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_detail_lists_offering_offices(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let app = build_test_app(pool);

    let uri = format!("/api/v1/services/{}", catalog.offered_service_id);
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["data"]["name"], "Замена паспорта в 20 лет");
    assert_eq!(json["data"]["cost"], "300.00");
    assert_eq!(json["data"]["offices"][0]["name"], "МФЦ на Ленина");

    let uri = format!("/api/v1/services/{}", catalog.other_service_id);
    let json = body_json(get(app.clone(), &uri).await).await;
    assert!(json["data"]["offices"].as_array().unwrap().is_empty());

    let response = get(app, "/api/v1/services/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn offices_filter_by_service_and_carry_counts(pool: PgPool) {
    let catalog = create_catalog(&pool).await;
    let app = build_test_app(pool);

    let uri = format!("/api/v1/offices?service={}", catalog.offered_service_id);
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(names(&json), vec!["МФЦ на Ленина"]);
    assert_eq!(json["data"][0]["service_count"], 1);

    let uri = format!("/api/v1/offices?service={}", catalog.other_service_id);
    let json = body_json(get(app.clone(), &uri).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let uri = format!("/api/v1/offices/{}", catalog.office_id);
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["data"]["address"], "ул. Ленина, д. 1");
    assert_eq!(json["data"]["services"].as_array().unwrap().len(), 1);
    assert!(json["data"]["employees"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn categories_carry_service_counts(pool: PgPool) {
    create_catalog(&pool).await;
    let app = build_test_app(pool);

    let json = body_json(get(app, "/api/v1/categories").await).await;
    assert_eq!(json["data"][0]["name"], "Паспортные услуги");
    assert_eq!(json["data"][0]["service_count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_groups_results(pool: PgPool) {
    create_catalog(&pool).await;
    let app = build_test_app(pool);

    // q=Ленина
    let json = body_json(
        get(app.clone(), "/api/v1/search?q=%D0%9B%D0%B5%D0%BD%D0%B8%D0%BD%D0%B0").await,
    )
    .await;
    assert_eq!(json["data"]["query"], "Ленина");
    assert!(json["data"]["services"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["offices"][0]["name"], "МФЦ на Ленина");

    let json = body_json(get(app, "/api/v1/search?q=").await).await;
    assert!(json["data"]["offices"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn suggestions_follow_priority_and_length_rules(pool: PgPool) {
    create_catalog(&pool).await;
    let app = build_test_app(pool);

    // q=п (one character)
    let json = body_json(get(app.clone(), "/api/v1/search/suggestions?q=%D0%BF").await).await;
    assert_eq!(json["suggestions"], serde_json::json!([]));

    // q=пас: two service hits, then popular terms fill in.
    let json =
        body_json(get(app.clone(), "/api/v1/search/suggestions?q=%D0%BF%D0%B0%D1%81").await).await;
    let suggestions: Vec<&str> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        suggestions,
        vec![
            "Выдача загранпаспорта",
            "Замена паспорта в 20 лет",
            "паспорт",
            "загранпаспорт"
        ]
    );

    // q=Ленина: office name.
    let json = body_json(
        get(app, "/api/v1/search/suggestions?q=%D0%9B%D0%B5%D0%BD%D0%B8%D0%BD%D0%B0").await,
    )
    .await;
    assert_eq!(json["suggestions"], serde_json::json!(["МФЦ на Ленина"]));
}
