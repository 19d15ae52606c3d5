//! Repository for the `services` table and the service side of the catalog.

use mfc_core::search::{contains_pattern, normalize_query};
use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{
    CreateService, PopularService, Service, ServiceFilter, ServiceWithCategory,
    ServiceWithOfficeCount, UpdateService,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, category_id, name, description, execution_term, cost, created_at, updated_at";

/// Select list for [`ServiceWithCategory`]; expects `services s JOIN service_categories c`.
const CATALOG_COLUMNS: &str = "s.id, s.category_id, c.name AS category_name, s.name, \
                               s.description, s.execution_term, s.cost";

/// Provides CRUD and catalog queries for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row. Cost defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (category_id, name, description, execution_term, cost)
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.execution_term)
            .bind(input.cost)
            .fetch_one(pool)
            .await
    }

    /// Find a service by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a service joined with its category.
    pub async fn find_with_category(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATALOG_COLUMNS}
             FROM services s
             JOIN service_categories c ON c.id = s.category_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, ServiceWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Catalog read: services matching `filter`, alphabetically.
    ///
    /// No limit is applied here; callers cap the result size.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &ServiceFilter,
    ) -> Result<Vec<ServiceWithCategory>, sqlx::Error> {
        let q = normalize_query(filter.q.as_deref());

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if q.is_some() {
            conditions.push(format!(
                "(s.name ILIKE ${bind_idx} OR s.description ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if filter.category_id.is_some() {
            conditions.push(format!("s.category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.office_id.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM office_services os \
                 WHERE os.service_id = s.id AND os.office_id = ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {CATALOG_COLUMNS} \
             FROM services s \
             JOIN service_categories c ON c.id = s.category_id \
             {where_clause} \
             ORDER BY s.name, s.id"
        );

        let mut query = sqlx::query_as::<_, ServiceWithCategory>(&query);
        if let Some(ref q) = q {
            query = query.bind(contains_pattern(q));
        }
        if let Some(category_id) = filter.category_id {
            query = query.bind(category_id);
        }
        if let Some(office_id) = filter.office_id {
            query = query.bind(office_id);
        }
        query.fetch_all(pool).await
    }

    /// Services ranked by number of applications, most requested first.
    pub async fn popular(pool: &PgPool, limit: i64) -> Result<Vec<PopularService>, sqlx::Error> {
        sqlx::query_as::<_, PopularService>(
            "SELECT s.id, s.name, s.cost, COUNT(a.id) AS application_count
             FROM services s
             LEFT JOIN applications a ON a.service_id = s.id
             GROUP BY s.id
             ORDER BY application_count DESC, s.name
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Management listing with the number of offices offering each service.
    pub async fn list_with_office_counts(
        pool: &PgPool,
    ) -> Result<Vec<ServiceWithOfficeCount>, sqlx::Error> {
        sqlx::query_as::<_, ServiceWithOfficeCount>(
            "SELECT s.id, s.name, s.category_id, c.name AS category_name,
                    s.execution_term, s.cost, COUNT(os.id) AS office_count
             FROM services s
             JOIN service_categories c ON c.id = s.category_id
             LEFT JOIN office_services os ON os.service_id = s.id
             GROUP BY s.id, c.name
             ORDER BY s.name",
        )
        .fetch_all(pool)
        .await
    }

    /// Service names containing `q`, alphabetically. Feeds the suggestion assembler.
    pub async fn suggest_names(
        pool: &PgPool,
        q: &str,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM services WHERE name ILIKE $1 ORDER BY name LIMIT $2",
        )
        .bind(contains_pattern(q))
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Update a service. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                category_id = COALESCE($2, category_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                execution_term = COALESCE($5, execution_term),
                cost = COALESCE($6, cost)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.execution_term)
            .bind(input.cost)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
