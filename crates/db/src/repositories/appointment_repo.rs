//! Repository for the `appointments` table.

use mfc_core::status::APPOINTMENT_ACTIVE;
use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment::{
    Appointment, AppointmentDetail, AppointmentFilter, AppointmentNotice, CreateAppointment,
    UpdateAppointment,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, office_id, service_id, appointment_datetime, status, created_at, updated_at";

/// Joined select for [`AppointmentDetail`]; callers append WHERE/ORDER BY.
const DETAIL_QUERY: &str = "SELECT ap.id, ap.user_id, u.username, ap.office_id, o.name AS office_name,
            o.address AS office_address, ap.service_id, s.name AS service_name,
            ap.appointment_datetime, ap.status, ap.created_at
     FROM appointments ap
     JOIN users u ON u.id = ap.user_id
     JOIN offices o ON o.id = ap.office_id
     JOIN services s ON s.id = ap.service_id";

/// Provides citizen-scoped and staff-scoped access to appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Book an appointment for `user_id`. New bookings are always active.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments (user_id, office_id, service_id, appointment_datetime, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(user_id)
            .bind(input.office_id)
            .bind(input.service_id)
            .bind(input.appointment_datetime)
            .bind(APPOINTMENT_ACTIVE)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment owned by `user_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Joined view of one appointment, only if owned by `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<AppointmentDetail>, sqlx::Error> {
        let query = format!("{DETAIL_QUERY} WHERE ap.id = $1 AND ap.user_id = $2");
        sqlx::query_as::<_, AppointmentDetail>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// A citizen's own appointments, soonest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_QUERY} WHERE ap.user_id = $1 ORDER BY ap.appointment_datetime, ap.id"
        );
        sqlx::query_as::<_, AppointmentDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Owner edit of an active appointment. Returns `None` when the row is
    /// missing, foreign, or no longer active.
    pub async fn update_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateAppointment,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET
                office_id = COALESCE($3, office_id),
                service_id = COALESCE($4, service_id),
                appointment_datetime = COALESCE($5, appointment_datetime)
             WHERE id = $1 AND user_id = $2 AND status = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.office_id)
            .bind(input.service_id)
            .bind(input.appointment_datetime)
            .bind(APPOINTMENT_ACTIVE)
            .fetch_optional(pool)
            .await
    }

    /// Move an owned, active appointment to `status`.
    pub async fn close_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        status: &str,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET status = $3
             WHERE id = $1 AND user_id = $2 AND status = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(user_id)
            .bind(status)
            .bind(APPOINTMENT_ACTIVE)
            .fetch_optional(pool)
            .await
    }

    /// Delete an appointment owned by `user_id`. Returns `true` if removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Management listing with optional status/office filters.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &AppointmentFilter,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.status.is_some() {
            conditions.push(format!("ap.status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.office_id.is_some() {
            conditions.push(format!("ap.office_id = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "{DETAIL_QUERY} {where_clause} ORDER BY ap.appointment_datetime DESC, ap.id DESC"
        );

        let mut query = sqlx::query_as::<_, AppointmentDetail>(&query);
        if let Some(ref status) = filter.status {
            query = query.bind(status);
        }
        if let Some(office_id) = filter.office_id {
            query = query.bind(office_id);
        }
        query.fetch_all(pool).await
    }

    /// Staff bulk action: close the selected rows that are still active.
    /// Returns the number of rows changed.
    pub async fn bulk_set_status(
        pool: &PgPool,
        ids: &[DbId],
        status: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointments SET status = $2 WHERE id = ANY($1) AND status = $3",
        )
        .bind(ids)
        .bind(status)
        .bind(APPOINTMENT_ACTIVE)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Owner contact and names for the booking confirmation.
    pub async fn notice(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AppointmentNotice>, sqlx::Error> {
        sqlx::query_as::<_, AppointmentNotice>(
            "SELECT ap.id, u.email, o.name AS office_name, s.name AS service_name,
                    ap.appointment_datetime
             FROM appointments ap
             JOIN users u ON u.id = ap.user_id
             JOIN offices o ON o.id = ap.office_id
             JOIN services s ON s.id = ap.service_id
             WHERE ap.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
