//! Citizen handlers for the `/applications` resource.
//!
//! Every query is scoped to the caller; another user's application is
//! reported as not found.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mfc_core::error::CoreError;
use mfc_core::forms::validate_application_data;
use mfc_core::status::ApplicationState;
use mfc_core::types::DbId;
use mfc_db::models::application::{ApplicationDetail, CreateApplication, UpdateApplication};
use mfc_db::repositories::{ApplicationRepo, ServiceRepo};
use mfc_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/applications
///
/// File a new application. The status is always "Подано" on creation.
pub async fn create_application(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateApplication>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_application_data(&input.application_data)?;
    ensure_service_exists(&state.pool, input.service_id).await?;

    let application = ApplicationRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        application_id = application.id,
        user_id = auth.user_id,
        service_id = application.service_id,
        "Application submitted",
    );

    let detail = load_owned(&state.pool, application.id, auth.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/applications
///
/// The caller's applications, newest first.
pub async fn list_applications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let applications = ApplicationRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// GET /api/v1/applications/{id}
pub async fn get_application(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = load_owned(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/applications/{id}
///
/// Owners may change the service or the details only while the application
/// is still "Подано".
pub async fn update_application(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplication>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(data) = &input.application_data {
        validate_application_data(data)?;
    }
    if let Some(service_id) = input.service_id {
        ensure_service_exists(&state.pool, service_id).await?;
    }

    let updated = ApplicationRepo::update_for_user(&state.pool, id, auth.user_id, &input).await?;
    if updated.is_none() {
        // Distinguish a missing row from one that has moved on.
        let current = load_owned(&state.pool, id, auth.user_id).await?;
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Application can only be edited while '{}', current status is '{}'",
            ApplicationState::Submitted.display_name(),
            current.status_name
        ))));
    }

    tracing::info!(application_id = id, user_id = auth.user_id, "Application updated");

    let detail = load_owned(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/applications/{id}
pub async fn delete_application(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ApplicationRepo::delete_for_user(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(application_id = id, user_id = auth.user_id, "Application deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Application",
        id,
    })
}

async fn load_owned(pool: &DbPool, id: DbId, user_id: DbId) -> AppResult<ApplicationDetail> {
    ApplicationRepo::find_for_user(pool, id, user_id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn ensure_service_exists(pool: &DbPool, service_id: DbId) -> AppResult<()> {
    if ServiceRepo::find_by_id(pool, service_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "service_id {service_id} does not reference an existing service"
        ))));
    }
    Ok(())
}
