//! Repository for the `offices` table.

use mfc_core::search::{contains_pattern, normalize_query};
use mfc_core::suggest::OfficeCandidate;
use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::office::{CreateOffice, Office, OfficeFilter, OfficeSummary, UpdateOffice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, phone, work_schedule, created_at, updated_at";

/// Select list for [`OfficeSummary`]; expects the table aliased as `o`.
const SUMMARY_COLUMNS: &str = "o.id, o.name, o.address, o.phone, o.work_schedule, \
     (SELECT COUNT(*) FROM office_services os WHERE os.office_id = o.id) AS service_count, \
     (SELECT COUNT(*) FROM employees e WHERE e.office_id = o.id) AS employee_count";

/// Provides CRUD and catalog queries for offices.
pub struct OfficeRepo;

impl OfficeRepo {
    /// Insert a new office, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOffice) -> Result<Office, sqlx::Error> {
        let query = format!(
            "INSERT INTO offices (name, address, phone, work_schedule)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Office>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.work_schedule)
            .fetch_one(pool)
            .await
    }

    /// Find an office by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Office>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM offices WHERE id = $1");
        sqlx::query_as::<_, Office>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Catalog read: offices matching `filter` with service/employee counts,
    /// alphabetically by name.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &OfficeFilter,
    ) -> Result<Vec<OfficeSummary>, sqlx::Error> {
        let q = normalize_query(filter.q.as_deref());

        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if q.is_some() {
            conditions.push(format!(
                "(o.name ILIKE ${bind_idx} OR o.address ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if filter.service_id.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM office_services x \
                 WHERE x.office_id = o.id AND x.service_id = ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM offices o {where_clause} ORDER BY o.name, o.id"
        );

        let mut query = sqlx::query_as::<_, OfficeSummary>(&query);
        if let Some(ref q) = q {
            query = query.bind(contains_pattern(q));
        }
        if let Some(service_id) = filter.service_id {
            query = query.bind(service_id);
        }
        query.fetch_all(pool).await
    }

    /// A random sample of offices for the landing page.
    pub async fn random(pool: &PgPool, limit: i64) -> Result<Vec<OfficeSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM offices o ORDER BY random() LIMIT $1");
        sqlx::query_as::<_, OfficeSummary>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Offices whose name or address contains `q`. Feeds the suggestion assembler.
    pub async fn suggest(
        pool: &PgPool,
        q: &str,
        limit: i64,
    ) -> Result<Vec<OfficeCandidate>, sqlx::Error> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT name, address FROM offices
             WHERE name ILIKE $1 OR address ILIKE $1
             ORDER BY name
             LIMIT $2",
        )
        .bind(contains_pattern(q))
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name, address)| OfficeCandidate { name, address })
            .collect())
    }

    /// Update an office. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOffice,
    ) -> Result<Option<Office>, sqlx::Error> {
        let query = format!(
            "UPDATE offices SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                work_schedule = COALESCE($5, work_schedule)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Office>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.work_schedule)
            .fetch_optional(pool)
            .await
    }

    /// Delete an office. Employees, links and appointments cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
