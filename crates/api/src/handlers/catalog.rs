//! Public catalog handlers: categories, services, offices and news.
//!
//! All endpoints are anonymous. List endpoints filter in the repository and
//! paginate here with `?limit=&offset=`.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mfc_core::error::CoreError;
use mfc_core::types::DbId;
use mfc_db::models::employee::EmployeeListItem;
use mfc_db::models::office::{Office, OfficeFilter, OfficeSummary};
use mfc_db::models::service::ServiceWithCategory;
use mfc_db::repositories::{
    CategoryRepo, EmployeeRepo, NewsRepo, OfficeRepo, OfficeServiceRepo, ServiceRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{paginate, NewsListParams, OfficeListParams, ServiceListParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Service detail with the offices where it can be obtained.
#[derive(Debug, Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: ServiceWithCategory,
    pub offices: Vec<OfficeSummary>,
}

/// Office detail with its staff and offered services.
#[derive(Debug, Serialize)]
pub struct OfficeDetail {
    #[serde(flatten)]
    pub office: Office,
    pub employees: Vec<EmployeeListItem>,
    pub services: Vec<ServiceWithCategory>,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_with_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// GET /api/v1/services?q=&category=&office=&limit=&offset=
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list_filtered(&state.pool, &params.filter()).await?;
    let page = paginate(services, params.limit, params.offset);
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_with_category(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;

    let offices = OfficeRepo::list_filtered(
        &state.pool,
        &OfficeFilter {
            q: None,
            service_id: Some(id),
        },
    )
    .await?;

    Ok(Json(DataResponse {
        data: ServiceDetail { service, offices },
    }))
}

// ---------------------------------------------------------------------------
// Offices
// ---------------------------------------------------------------------------

/// GET /api/v1/offices?q=&service=&limit=&offset=
pub async fn list_offices(
    State(state): State<AppState>,
    Query(params): Query<OfficeListParams>,
) -> AppResult<impl IntoResponse> {
    let offices = OfficeRepo::list_filtered(&state.pool, &params.filter()).await?;
    let page = paginate(offices, params.limit, params.offset);
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/offices/{id}
pub async fn get_office(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let office = OfficeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Office",
            id,
        }))?;
    let employees = EmployeeRepo::list_for_office(&state.pool, id).await?;
    let services = OfficeServiceRepo::services_for_office(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: OfficeDetail {
            office,
            employees,
            services,
        },
    }))
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// GET /api/v1/news?q=&office=&limit=&offset=
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::list_filtered(&state.pool, &params.filter()).await?;
    let page = paginate(news, params.limit, params.offset);
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = NewsRepo::find_item(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;
    Ok(Json(DataResponse { data: item }))
}
