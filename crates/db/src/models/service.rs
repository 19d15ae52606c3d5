//! Service catalog model, read models and DTOs.

use mfc_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub execution_term: String,
    pub cost: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Service joined with its category name (catalog listing and detail).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceWithCategory {
    pub id: DbId,
    pub category_id: DbId,
    pub category_name: String,
    pub name: String,
    pub description: String,
    pub execution_term: String,
    pub cost: Decimal,
}

/// Service ranked by how many applications reference it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PopularService {
    pub id: DbId,
    pub name: String,
    pub cost: Decimal,
    pub application_count: i64,
}

/// Service with the number of offices offering it (management listing).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceWithOfficeCount {
    pub id: DbId,
    pub name: String,
    pub category_id: DbId,
    pub category_name: String,
    pub execution_term: String,
    pub cost: Decimal,
    pub office_count: i64,
}

/// Catalog filter for services. Every field narrows the result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceFilter {
    /// Case-insensitive substring over name and description.
    pub q: Option<String>,
    pub category_id: Option<DbId>,
    /// Only services offered at this office.
    pub office_id: Option<DbId>,
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateService {
    pub category_id: DbId,
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 100, message = "execution_term must be at most 100 characters"))]
    pub execution_term: String,
    /// Defaults to 0 when omitted.
    pub cost: Option<Decimal>,
}

/// DTO for updating a service. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateService {
    pub category_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100, message = "execution_term must be at most 100 characters"))]
    pub execution_term: Option<String>,
    pub cost: Option<Decimal>,
}
