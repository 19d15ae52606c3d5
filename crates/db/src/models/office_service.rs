//! Office-service link model.

use mfc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `office_services` link table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OfficeService {
    pub id: DbId,
    pub office_id: DbId,
    pub service_id: DbId,
    pub created_at: Timestamp,
}

/// Link joined with both sides' names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OfficeServiceItem {
    pub id: DbId,
    pub office_id: DbId,
    pub office_name: String,
    pub service_id: DbId,
    pub service_name: String,
}

/// DTO for linking a service to an office.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfficeService {
    pub office_id: DbId,
    pub service_id: DbId,
}
