//! Repository for the `service_categories` table.

use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{CategoryWithCount, CreateCategory, ServiceCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for service categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategory,
    ) -> Result<ServiceCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_categories (name, description)
             VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_categories WHERE id = $1");
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<ServiceCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_categories ORDER BY name");
        sqlx::query_as::<_, ServiceCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// List categories with the number of services in each.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<CategoryWithCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryWithCount>(
            "SELECT c.id, c.name, c.description, COUNT(s.id) AS service_count
             FROM service_categories c
             LEFT JOIN services s ON s.category_id = c.id
             GROUP BY c.id
             ORDER BY c.name",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE service_categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category (and, by cascade, its services). Returns `true` if removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
