//! MFC office model, read models and DTOs.

use mfc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `offices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Office {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub work_schedule: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Office with counts of linked services and staff.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OfficeSummary {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub work_schedule: String,
    pub service_count: i64,
    pub employee_count: i64,
}

/// Catalog filter for offices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficeFilter {
    /// Case-insensitive substring over name and address.
    pub q: Option<String>,
    /// Only offices offering this service.
    pub service_id: Option<DbId>,
}

/// DTO for creating an office.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOffice {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 300, message = "address must be 1-300 characters"))]
    pub address: String,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: String,
    #[validate(length(max = 100, message = "work_schedule must be at most 100 characters"))]
    pub work_schedule: String,
}

/// DTO for updating an office. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOffice {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 300, message = "address must be 1-300 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "work_schedule must be at most 100 characters"))]
    pub work_schedule: Option<String>,
}
