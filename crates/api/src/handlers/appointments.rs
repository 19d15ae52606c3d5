//! Citizen handlers for the `/appointments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use mfc_core::error::CoreError;
use mfc_core::forms::{ensure_service_offered, validate_appointment_datetime};
use mfc_core::status::{AppointmentState, APPOINTMENT_CANCELLED};
use mfc_core::types::{DbId, Timestamp};
use mfc_db::models::appointment::{AppointmentDetail, CreateAppointment, UpdateAppointment};
use mfc_db::repositories::{AppointmentRepo, OfficeServiceRepo};
use mfc_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::notify::spawn_booking_confirmation;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/appointments
///
/// Book a visit. The time must be in the future and the office must offer
/// the service. A confirmation is sent after the booking is stored.
pub async fn create_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAppointment>,
) -> AppResult<impl IntoResponse> {
    check_booking(
        &state.pool,
        input.office_id,
        input.service_id,
        input.appointment_datetime,
    )
    .await?;

    let appointment = AppointmentRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        appointment_id = appointment.id,
        user_id = auth.user_id,
        office_id = appointment.office_id,
        service_id = appointment.service_id,
        "Appointment booked",
    );

    spawn_booking_confirmation(&state, appointment.id);

    let detail = load_owned(&state.pool, appointment.id, auth.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/appointments
///
/// The caller's appointments, soonest first.
pub async fn list_appointments(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let appointments = AppointmentRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: appointments }))
}

/// GET /api/v1/appointments/{id}
pub async fn get_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = load_owned(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/appointments/{id}
///
/// Reschedule or move an active appointment. The booking rules are checked
/// against the merged office, service and time.
pub async fn update_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAppointment>,
) -> AppResult<impl IntoResponse> {
    let current = AppointmentRepo::find_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(id))?;
    AppointmentState::parse(&current.status)?.ensure_active("edit")?;

    check_booking(
        &state.pool,
        input.office_id.unwrap_or(current.office_id),
        input.service_id.unwrap_or(current.service_id),
        input
            .appointment_datetime
            .unwrap_or(current.appointment_datetime),
    )
    .await?;

    AppointmentRepo::update_for_user(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Appointment is no longer active".into(),
            ))
        })?;

    tracing::info!(appointment_id = id, user_id = auth.user_id, "Appointment updated");

    let detail = load_owned(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/appointments/{id}/cancel
pub async fn cancel_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let current = AppointmentRepo::find_owned(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(id))?;
    AppointmentState::parse(&current.status)?.ensure_active("cancel")?;

    AppointmentRepo::close_for_user(&state.pool, id, auth.user_id, APPOINTMENT_CANCELLED)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Appointment is no longer active".into(),
            ))
        })?;

    tracing::info!(appointment_id = id, user_id = auth.user_id, "Appointment cancelled");

    let detail = load_owned(&state.pool, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/appointments/{id}
pub async fn delete_appointment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AppointmentRepo::delete_for_user(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(appointment_id = id, user_id = auth.user_id, "Appointment deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Appointment",
        id,
    })
}

async fn load_owned(pool: &DbPool, id: DbId, user_id: DbId) -> AppResult<AppointmentDetail> {
    AppointmentRepo::find_for_user(pool, id, user_id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Time must be ahead of the submission moment; the office must offer the service.
async fn check_booking(
    pool: &DbPool,
    office_id: DbId,
    service_id: DbId,
    at: Timestamp,
) -> AppResult<()> {
    validate_appointment_datetime(at, Utc::now())?;
    let offered = OfficeServiceRepo::exists(pool, office_id, service_id).await?;
    ensure_service_offered(offered)?;
    Ok(())
}
