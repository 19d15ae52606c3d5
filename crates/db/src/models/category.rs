//! Service category model and DTOs.

use mfc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `service_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category with the number of services it holds (management listing).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryWithCount {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub service_count: i64,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a category. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
}
