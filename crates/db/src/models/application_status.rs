//! Application status lookup rows.

use mfc_core::status::StatusId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `application_statuses` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationStatus {
    pub id: StatusId,
    pub name: String,
}

/// Status with the number of applications currently in it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationStatusWithCount {
    pub id: StatusId,
    pub name: String,
    pub application_count: i64,
}

/// DTO for adding a custom status.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApplicationStatus {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: String,
}
