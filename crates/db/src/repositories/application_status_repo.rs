//! Repository for the `application_statuses` lookup table.

use mfc_core::status::StatusId;
use sqlx::PgPool;

use crate::models::application_status::{
    ApplicationStatus, ApplicationStatusWithCount, CreateApplicationStatus,
};

pub struct ApplicationStatusRepo;

impl ApplicationStatusRepo {
    /// All statuses in id order, so the seeded workflow comes first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ApplicationStatus>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationStatus>(
            "SELECT id, name FROM application_statuses ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Statuses with how many applications currently hold each one.
    pub async fn list_with_counts(
        pool: &PgPool,
    ) -> Result<Vec<ApplicationStatusWithCount>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationStatusWithCount>(
            "SELECT st.id, st.name, COUNT(a.id) AS application_count
             FROM application_statuses st
             LEFT JOIN applications a ON a.status_id = st.id
             GROUP BY st.id
             ORDER BY st.id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: StatusId,
    ) -> Result<Option<ApplicationStatus>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationStatus>(
            "SELECT id, name FROM application_statuses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Add a staff-defined status. Names are unique.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplicationStatus,
    ) -> Result<ApplicationStatus, sqlx::Error> {
        sqlx::query_as::<_, ApplicationStatus>(
            "INSERT INTO application_statuses (name) VALUES ($1) RETURNING id, name",
        )
        .bind(input.name.trim())
        .fetch_one(pool)
        .await
    }
}
