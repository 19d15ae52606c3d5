//! Citizen profile (phone and SNILS), one-to-one with a user.

use mfc_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub phone: String,
    /// Normalized `XXX-XXX-XXX YY` form.
    pub snils: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
