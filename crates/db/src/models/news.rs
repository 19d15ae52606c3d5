//! News model and DTOs.

use mfc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub published_at: Timestamp,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// News joined with the author's name and office.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsItem {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub published_at: Timestamp,
    pub author_id: DbId,
    pub author_name: String,
    pub office_id: DbId,
}

/// Catalog filter for news.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsFilter {
    /// Case-insensitive substring over title and content.
    pub q: Option<String>,
    /// Only news written by employees of this office.
    pub office_id: Option<DbId>,
}

/// DTO for publishing news.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNews {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    /// Defaults to now.
    pub published_at: Option<Timestamp>,
    pub author_id: DbId,
}

/// DTO for editing news. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNews {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub published_at: Option<Timestamp>,
    pub author_id: Option<DbId>,
}
