//! Staff handlers for the application and appointment workflows.
//!
//! Single-row status changes follow the application state machine strictly.
//! Bulk actions close every selected row that is still open in one UPDATE.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mfc_core::error::CoreError;
use mfc_core::status::{
    ApplicationState, BulkAction, StatusId, APPOINTMENT_CANCELLED, APPOINTMENT_COMPLETED,
};
use mfc_core::types::DbId;
use mfc_db::repositories::{ApplicationRepo, AppointmentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::notify::spawn_status_notices;
use crate::query::{AdminApplicationParams, AdminAppointmentParams};
use crate::response::{BulkActionResponse, DataResponse};
use crate::state::AppState;

/// Request body for `POST /admin/applications/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status_id: StatusId,
}

/// Request body for every bulk action.
#[derive(Debug, Deserialize)]
pub struct BulkIdsRequest {
    pub ids: Vec<DbId>,
}

impl BulkIdsRequest {
    fn ids(&self) -> AppResult<&[DbId]> {
        if self.ids.is_empty() {
            return Err(AppError::BadRequest("ids must not be empty".into()));
        }
        Ok(&self.ids)
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/applications?status=&service=&user=
pub async fn list_applications(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<AdminApplicationParams>,
) -> AppResult<impl IntoResponse> {
    let applications = ApplicationRepo::list_filtered(&state.pool, &params.into()).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// POST /api/v1/admin/applications/{id}/status
///
/// Move one application a single step along its workflow. Illegal moves
/// are a 409. The owner is notified of the new status.
pub async fn set_application_status(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let current = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;

    let next = ApplicationState::check_transition(current.status_id, input.status_id)?;

    ApplicationRepo::set_status(&state.pool, id, current.status_id, next.id())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Application status changed concurrently, reload and retry".into(),
            ))
        })?;

    tracing::info!(
        application_id = id,
        from = current.status_id,
        to = next.id(),
        user_id = staff.user_id,
        "Application status changed",
    );

    spawn_status_notices(&state, vec![id]);

    let detail = ApplicationRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/admin/applications/mark-completed
pub async fn mark_applications_completed(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<BulkIdsRequest>,
) -> AppResult<Json<DataResponse<BulkActionResponse>>> {
    close_applications(
        &state,
        &staff,
        input.ids()?,
        ApplicationState::Completed,
        BulkAction::ApplicationsCompleted,
    )
    .await
}

/// POST /api/v1/admin/applications/mark-rejected
pub async fn mark_applications_rejected(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<BulkIdsRequest>,
) -> AppResult<Json<DataResponse<BulkActionResponse>>> {
    close_applications(
        &state,
        &staff,
        input.ids()?,
        ApplicationState::Rejected,
        BulkAction::ApplicationsRejected,
    )
    .await
}

async fn close_applications(
    state: &AppState,
    staff: &AuthUser,
    ids: &[DbId],
    target: ApplicationState,
    action: BulkAction,
) -> AppResult<Json<DataResponse<BulkActionResponse>>> {
    let changed = ApplicationRepo::bulk_set_status(&state.pool, ids, target.id()).await?;
    let updated = changed.len() as u64;

    tracing::info!(
        requested = ids.len(),
        updated,
        status = target.display_name(),
        user_id = staff.user_id,
        "Bulk application status change",
    );

    spawn_status_notices(state, changed);

    Ok(Json(DataResponse {
        data: BulkActionResponse {
            updated,
            message: action.message(updated),
        },
    }))
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/appointments?status=&office=
pub async fn list_appointments(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<AdminAppointmentParams>,
) -> AppResult<impl IntoResponse> {
    let appointments = AppointmentRepo::list_filtered(&state.pool, &params.into()).await?;
    Ok(Json(DataResponse { data: appointments }))
}

/// POST /api/v1/admin/appointments/mark-completed
pub async fn mark_appointments_completed(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<BulkIdsRequest>,
) -> AppResult<Json<DataResponse<BulkActionResponse>>> {
    close_appointments(
        &state,
        &staff,
        input.ids()?,
        APPOINTMENT_COMPLETED,
        BulkAction::AppointmentsCompleted,
    )
    .await
}

/// POST /api/v1/admin/appointments/cancel
pub async fn cancel_appointments(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<BulkIdsRequest>,
) -> AppResult<Json<DataResponse<BulkActionResponse>>> {
    close_appointments(
        &state,
        &staff,
        input.ids()?,
        APPOINTMENT_CANCELLED,
        BulkAction::AppointmentsCancelled,
    )
    .await
}

async fn close_appointments(
    state: &AppState,
    staff: &AuthUser,
    ids: &[DbId],
    status: &str,
    action: BulkAction,
) -> AppResult<Json<DataResponse<BulkActionResponse>>> {
    let updated = AppointmentRepo::bulk_set_status(&state.pool, ids, status).await?;

    tracing::info!(
        requested = ids.len(),
        updated,
        status,
        user_id = staff.user_id,
        "Bulk appointment status change",
    );

    Ok(Json(DataResponse {
        data: BulkActionResponse {
            updated,
            message: action.message(updated),
        },
    }))
}
