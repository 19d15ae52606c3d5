//! Employee model and DTOs.

use mfc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub office_id: DbId,
    pub full_name: String,
    pub position: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Employee joined with office name and authored-news count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeListItem {
    pub id: DbId,
    pub office_id: DbId,
    pub office_name: String,
    pub full_name: String,
    pub position: String,
    pub news_count: i64,
}

/// DTO for creating an employee. `position` is checked against
/// [`mfc_core::employee::VALID_POSITIONS`] by the handler.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    pub office_id: DbId,
    #[validate(length(min = 1, max = 200, message = "full_name must be 1-200 characters"))]
    pub full_name: String,
    pub position: String,
}

/// DTO for updating an employee. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmployee {
    pub office_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "full_name must be 1-200 characters"))]
    pub full_name: Option<String>,
    pub position: Option<String>,
}
