//! Appointment (office visit booking) model and DTOs.

use mfc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub user_id: DbId,
    pub office_id: DbId,
    pub service_id: DbId,
    pub appointment_datetime: Timestamp,
    /// One of `active`, `completed`, `cancelled`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Appointment joined with office, service and owner names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppointmentDetail {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub office_id: DbId,
    pub office_name: String,
    pub office_address: String,
    pub service_id: DbId,
    pub service_name: String,
    pub appointment_datetime: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
}

/// Booking confirmation payload.
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentNotice {
    pub id: DbId,
    pub email: String,
    pub office_name: String,
    pub service_name: String,
    pub appointment_datetime: Timestamp,
}

/// Citizen booking form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointment {
    pub office_id: DbId,
    pub service_id: DbId,
    pub appointment_datetime: Timestamp,
}

/// Owner edit of an active appointment. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointment {
    pub office_id: Option<DbId>,
    pub service_id: Option<DbId>,
    pub appointment_datetime: Option<Timestamp>,
}

/// Management listing filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilter {
    pub status: Option<String>,
    pub office_id: Option<DbId>,
}
