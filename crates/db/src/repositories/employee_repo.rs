//! Repository for the `employees` table.

use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, EmployeeListItem, UpdateEmployee};

const COLUMNS: &str = "id, office_id, full_name, position, created_at, updated_at";

const LIST_QUERY: &str = "SELECT e.id, e.office_id, o.name AS office_name, e.full_name, e.position,
            (SELECT COUNT(*) FROM news n WHERE n.author_id = e.id) AS news_count
     FROM employees e
     JOIN offices o ON o.id = e.office_id";

pub struct EmployeeRepo;

impl EmployeeRepo {
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (office_id, full_name, position)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(input.office_id)
            .bind(&input.full_name)
            .bind(&input.position)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All employees with office name, ordered by full name.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeListItem>, sqlx::Error> {
        let query = format!("{LIST_QUERY} ORDER BY e.full_name, e.id");
        sqlx::query_as::<_, EmployeeListItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Staff of one office, for the office detail page.
    pub async fn list_for_office(
        pool: &PgPool,
        office_id: DbId,
    ) -> Result<Vec<EmployeeListItem>, sqlx::Error> {
        let query = format!("{LIST_QUERY} WHERE e.office_id = $1 ORDER BY e.full_name, e.id");
        sqlx::query_as::<_, EmployeeListItem>(&query)
            .bind(office_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                office_id = COALESCE($2, office_id),
                full_name = COALESCE($3, full_name),
                position = COALESCE($4, position)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(input.office_id)
            .bind(&input.full_name)
            .bind(&input.position)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee together with the news they authored.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
