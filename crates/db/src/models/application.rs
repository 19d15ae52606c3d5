//! Application (citizen service request) model and DTOs.

use mfc_core::status::StatusId;
use mfc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub user_id: DbId,
    pub service_id: DbId,
    pub status_id: StatusId,
    pub application_data: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Application joined with service and status names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationDetail {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub service_id: DbId,
    pub service_name: String,
    pub status_id: StatusId,
    pub status_name: String,
    pub application_data: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Everything needed to tell the owner about a status change.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationNotice {
    pub id: DbId,
    pub email: String,
    pub service_name: String,
    pub status_name: String,
}

/// Citizen-submitted application form. Status is never accepted from input.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApplication {
    #[validate(range(min = 1, message = "service_id is required"))]
    pub service_id: DbId,
    #[validate(length(min = 1, message = "application_data is required"))]
    pub application_data: String,
}

/// Owner edit of a still-submitted application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateApplication {
    #[validate(range(min = 1, message = "service_id must be a valid id"))]
    pub service_id: Option<DbId>,
    pub application_data: Option<String>,
}

/// Management listing filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationFilter {
    pub status_id: Option<StatusId>,
    pub service_id: Option<DbId>,
    pub user_id: Option<DbId>,
}
