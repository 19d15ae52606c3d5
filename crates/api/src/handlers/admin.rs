//! Staff management handlers for the catalog, lookups and accounts.
//!
//! Every handler requires [`RequireStaff`]. Derive-level validation runs
//! first, then the blank-text and money checks a derive cannot express.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mfc_core::employee::validate_position;
use mfc_core::error::CoreError;
use mfc_core::forms::require_text;
use mfc_core::types::DbId;
use mfc_db::models::application_status::CreateApplicationStatus;
use mfc_db::models::category::{CreateCategory, UpdateCategory};
use mfc_db::models::employee::{CreateEmployee, UpdateEmployee};
use mfc_db::models::news::{CreateNews, NewsFilter, UpdateNews};
use mfc_db::models::office::{CreateOffice, OfficeFilter, UpdateOffice};
use mfc_db::models::office_service::CreateOfficeService;
use mfc_db::models::service::{CreateService, UpdateService};
use mfc_db::repositories::{
    ApplicationStatusRepo, CategoryRepo, EmployeeRepo, NewsRepo, OfficeRepo, OfficeServiceRepo,
    ServiceRepo, UserRepo,
};
use rust_decimal::Decimal;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::not_found(entity, id))
}

fn require_optional_text(field: &str, value: Option<&String>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}

fn validate_cost(cost: Option<Decimal>) -> Result<(), CoreError> {
    match cost {
        Some(c) if c.is_sign_negative() && !c.is_zero() => {
            Err(CoreError::Validation("cost must not be negative".into()))
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/categories
pub async fn list_categories(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_with_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_text("name", &input.name)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, user_id = staff.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/admin/categories/{id}
pub async fn get_category(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("ServiceCategory", id))?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/admin/categories/{id}
pub async fn update_category(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_optional_text("name", input.name.as_ref())?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("ServiceCategory", id))?;
    tracing::info!(category_id = id, user_id = staff.user_id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Cascades to the category's services.
pub async fn delete_category(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found("ServiceCategory", id));
    }
    tracing::info!(category_id = id, user_id = staff.user_id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/services
///
/// Each row carries the number of offices offering the service.
pub async fn list_services(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list_with_office_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/admin/services
pub async fn create_service(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_text("name", &input.name)?;
    validate_cost(input.cost)?;

    let service = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(service_id = service.id, user_id = staff.user_id, "Service created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// GET /api/v1/admin/services/{id}
pub async fn get_service(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Service", id))?;
    Ok(Json(DataResponse { data: service }))
}

/// PUT /api/v1/admin/services/{id}
pub async fn update_service(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_optional_text("name", input.name.as_ref())?;
    validate_cost(input.cost)?;

    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Service", id))?;
    tracing::info!(service_id = id, user_id = staff.user_id, "Service updated");

    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/v1/admin/services/{id}
pub async fn delete_service(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(not_found("Service", id));
    }
    tracing::info!(service_id = id, user_id = staff.user_id, "Service deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Offices
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/offices
///
/// Each row carries service and employee counts.
pub async fn list_offices(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let offices = OfficeRepo::list_filtered(&state.pool, &OfficeFilter::default()).await?;
    Ok(Json(DataResponse { data: offices }))
}

/// POST /api/v1/admin/offices
pub async fn create_office(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateOffice>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_text("name", &input.name)?;
    require_text("address", &input.address)?;

    let office = OfficeRepo::create(&state.pool, &input).await?;
    tracing::info!(office_id = office.id, user_id = staff.user_id, "Office created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: office })))
}

/// GET /api/v1/admin/offices/{id}
pub async fn get_office(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let office = OfficeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Office", id))?;
    Ok(Json(DataResponse { data: office }))
}

/// PUT /api/v1/admin/offices/{id}
pub async fn update_office(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOffice>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_optional_text("name", input.name.as_ref())?;
    require_optional_text("address", input.address.as_ref())?;

    let office = OfficeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Office", id))?;
    tracing::info!(office_id = id, user_id = staff.user_id, "Office updated");

    Ok(Json(DataResponse { data: office }))
}

/// DELETE /api/v1/admin/offices/{id}
pub async fn delete_office(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !OfficeRepo::delete(&state.pool, id).await? {
        return Err(not_found("Office", id));
    }
    tracing::info!(office_id = id, user_id = staff.user_id, "Office deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/employees
///
/// Each row carries the employee's office name and authored-news count.
pub async fn list_employees(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: employees }))
}

/// POST /api/v1/admin/employees
pub async fn create_employee(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_text("full_name", &input.full_name)?;
    validate_position(&input.position)?;

    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::info!(employee_id = employee.id, user_id = staff.user_id, "Employee created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// GET /api/v1/admin/employees/{id}
pub async fn get_employee(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Employee", id))?;
    Ok(Json(DataResponse { data: employee }))
}

/// PUT /api/v1/admin/employees/{id}
pub async fn update_employee(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_optional_text("full_name", input.full_name.as_ref())?;
    if let Some(position) = &input.position {
        validate_position(position)?;
    }

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Employee", id))?;
    tracing::info!(employee_id = id, user_id = staff.user_id, "Employee updated");

    Ok(Json(DataResponse { data: employee }))
}

/// DELETE /api/v1/admin/employees/{id}
///
/// Cascades to the employee's news.
pub async fn delete_employee(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !EmployeeRepo::delete(&state.pool, id).await? {
        return Err(not_found("Employee", id));
    }
    tracing::info!(employee_id = id, user_id = staff.user_id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/news
pub async fn list_news(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::list_filtered(&state.pool, &NewsFilter::default()).await?;
    Ok(Json(DataResponse { data: news }))
}

/// POST /api/v1/admin/news
///
/// `published_at` defaults to now.
pub async fn create_news(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateNews>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_text("title", &input.title)?;
    require_text("content", &input.content)?;

    let news = NewsRepo::create(&state.pool, &input).await?;
    tracing::info!(news_id = news.id, user_id = staff.user_id, "News created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: news })))
}

/// GET /api/v1/admin/news/{id}
pub async fn get_news(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = NewsRepo::find_item(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("News", id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/admin/news/{id}
pub async fn update_news(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNews>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_optional_text("title", input.title.as_ref())?;
    require_optional_text("content", input.content.as_ref())?;

    let news = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("News", id))?;
    tracing::info!(news_id = id, user_id = staff.user_id, "News updated");

    Ok(Json(DataResponse { data: news }))
}

/// DELETE /api/v1/admin/news/{id}
pub async fn delete_news(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !NewsRepo::delete(&state.pool, id).await? {
        return Err(not_found("News", id));
    }
    tracing::info!(news_id = id, user_id = staff.user_id, "News deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Office-service links
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/office-services
pub async fn list_office_services(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let links = OfficeServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: links }))
}

/// POST /api/v1/admin/office-services
///
/// A pair that is already linked is a 409.
pub async fn create_office_service(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateOfficeService>,
) -> AppResult<impl IntoResponse> {
    let link = OfficeServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        office_id = link.office_id,
        service_id = link.service_id,
        user_id = staff.user_id,
        "Service linked to office",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// DELETE /api/v1/admin/office-services/{id}
pub async fn delete_office_service(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !OfficeServiceRepo::delete(&state.pool, id).await? {
        return Err(not_found("OfficeService", id));
    }
    tracing::info!(link_id = id, user_id = staff.user_id, "Office-service link removed");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Application statuses
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/application-statuses
///
/// Each row carries the number of applications currently in that status.
pub async fn list_statuses(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let statuses = ApplicationStatusRepo::list_with_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: statuses }))
}

/// POST /api/v1/admin/application-statuses
pub async fn create_status(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateApplicationStatus>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_text("name", &input.name)?;

    let status = ApplicationStatusRepo::create(&state.pool, &input).await?;
    tracing::info!(status_id = status.id, user_id = staff.user_id, "Application status created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: status })))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/users
///
/// Accounts with phone and SNILS from their profile, if any.
pub async fn list_users(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_with_profiles(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}
