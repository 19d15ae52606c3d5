//! Repository for the `applications` table.

use mfc_core::status::{ApplicationState, StatusId};
use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{
    Application, ApplicationDetail, ApplicationFilter, ApplicationNotice, CreateApplication,
    UpdateApplication,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, service_id, status_id, application_data, created_at, updated_at";

/// Joined select for [`ApplicationDetail`]; callers append WHERE/ORDER BY.
const DETAIL_QUERY: &str = "SELECT a.id, a.user_id, u.username, a.service_id, s.name AS service_name,
            a.status_id, st.name AS status_name, a.application_data, a.created_at, a.updated_at
     FROM applications a
     JOIN users u ON u.id = a.user_id
     JOIN services s ON s.id = a.service_id
     JOIN application_statuses st ON st.id = a.status_id";

/// Provides citizen-scoped and staff-scoped access to applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Create an application for `user_id`. The status is always the initial one.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (user_id, service_id, status_id, application_data)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(user_id)
            .bind(input.service_id)
            .bind(ApplicationState::Submitted.id())
            .bind(&input.application_data)
            .fetch_one(pool)
            .await
    }

    /// Find an application by ID regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Joined view of one application regardless of owner.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_QUERY} WHERE a.id = $1");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Joined view of one application, only if owned by `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_QUERY} WHERE a.id = $1 AND a.user_id = $2");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// A citizen's own applications, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let query = format!("{DETAIL_QUERY} WHERE a.user_id = $1 ORDER BY a.created_at DESC, a.id DESC");
        sqlx::query_as::<_, ApplicationDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Owner edit. Applies only while the application is still submitted;
    /// returns `None` when the row is missing, foreign, or already picked up.
    pub async fn update_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateApplication,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET
                service_id = COALESCE($3, service_id),
                application_data = COALESCE($4, application_data)
             WHERE id = $1 AND user_id = $2 AND status_id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.service_id)
            .bind(&input.application_data)
            .bind(ApplicationState::Submitted.id())
            .fetch_optional(pool)
            .await
    }

    /// Delete an application owned by `user_id`. Returns `true` if removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Management listing with optional status/service/user filters.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.status_id.is_some() {
            conditions.push(format!("a.status_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.service_id.is_some() {
            conditions.push(format!("a.service_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.user_id.is_some() {
            conditions.push(format!("a.user_id = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("{DETAIL_QUERY} {where_clause} ORDER BY a.created_at DESC, a.id DESC");

        let mut query = sqlx::query_as::<_, ApplicationDetail>(&query);
        if let Some(status_id) = filter.status_id {
            query = query.bind(status_id);
        }
        if let Some(service_id) = filter.service_id {
            query = query.bind(service_id);
        }
        if let Some(user_id) = filter.user_id {
            query = query.bind(user_id);
        }
        query.fetch_all(pool).await
    }

    /// Move one application to `status_id`, guarded on its current status so
    /// a concurrent change is not overwritten.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        expected_current: StatusId,
        status_id: StatusId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET status_id = $3
             WHERE id = $1 AND status_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(expected_current)
            .bind(status_id)
            .fetch_optional(pool)
            .await
    }

    /// Staff bulk action: move the selected rows that are still open to
    /// `status_id`. Returns the ids actually updated.
    pub async fn bulk_set_status(
        pool: &PgPool,
        ids: &[DbId],
        status_id: StatusId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let open = ApplicationState::open_ids();
        sqlx::query_scalar::<_, DbId>(
            "UPDATE applications SET status_id = $2
             WHERE id = ANY($1) AND status_id = ANY($3)
             RETURNING id",
        )
        .bind(ids)
        .bind(status_id)
        .bind(&open[..])
        .fetch_all(pool)
        .await
    }

    /// Owner contact and names for status-change notifications.
    pub async fn notices(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<ApplicationNotice>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationNotice>(
            "SELECT a.id, u.email, s.name AS service_name, st.name AS status_name
             FROM applications a
             JOIN users u ON u.id = a.user_id
             JOIN services s ON s.id = a.service_id
             JOIN application_statuses st ON st.id = a.status_id
             WHERE a.id = ANY($1)
             ORDER BY a.id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }
}
