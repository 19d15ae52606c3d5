//! Repository for the `office_services` link table.

use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::office_service::{CreateOfficeService, OfficeService, OfficeServiceItem};
use crate::models::service::ServiceWithCategory;

const COLUMNS: &str = "id, office_id, service_id, created_at";

/// Manages which services each office offers.
pub struct OfficeServiceRepo;

impl OfficeServiceRepo {
    /// Link a service to an office.
    ///
    /// A duplicate pair violates `uq_office_services_office_service`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOfficeService,
    ) -> Result<OfficeService, sqlx::Error> {
        let query = format!(
            "INSERT INTO office_services (office_id, service_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OfficeService>(&query)
            .bind(input.office_id)
            .bind(input.service_id)
            .fetch_one(pool)
            .await
    }

    /// Whether `office_id` offers `service_id`.
    pub async fn exists(
        pool: &PgPool,
        office_id: DbId,
        service_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM office_services WHERE office_id = $1 AND service_id = $2
             )",
        )
        .bind(office_id)
        .bind(service_id)
        .fetch_one(pool)
        .await
    }

    /// All links with office and service names.
    pub async fn list(pool: &PgPool) -> Result<Vec<OfficeServiceItem>, sqlx::Error> {
        sqlx::query_as::<_, OfficeServiceItem>(
            "SELECT os.id, os.office_id, o.name AS office_name,
                    os.service_id, s.name AS service_name
             FROM office_services os
             JOIN offices o ON o.id = os.office_id
             JOIN services s ON s.id = os.service_id
             ORDER BY o.name, s.name",
        )
        .fetch_all(pool)
        .await
    }

    /// Services offered by one office.
    pub async fn services_for_office(
        pool: &PgPool,
        office_id: DbId,
    ) -> Result<Vec<ServiceWithCategory>, sqlx::Error> {
        sqlx::query_as::<_, ServiceWithCategory>(
            "SELECT s.id, s.category_id, c.name AS category_name, s.name,
                    s.description, s.execution_term, s.cost
             FROM office_services os
             JOIN services s ON s.id = os.service_id
             JOIN service_categories c ON c.id = s.category_id
             WHERE os.office_id = $1
             ORDER BY s.name",
        )
        .bind(office_id)
        .fetch_all(pool)
        .await
    }

    /// Remove a link. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM office_services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
