//! Repository for the `news` table.

use mfc_core::search::{contains_pattern, normalize_query};
use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::news::{CreateNews, News, NewsFilter, NewsItem, UpdateNews};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, published_at, author_id, created_at, updated_at";

/// Joined select for [`NewsItem`]; callers append WHERE/ORDER BY.
const ITEM_QUERY: &str = "SELECT n.id, n.title, n.content, n.published_at, n.author_id,
            e.full_name AS author_name, e.office_id
     FROM news n
     JOIN employees e ON e.id = n.author_id";

/// Provides CRUD and catalog queries for news.
pub struct NewsRepo;

impl NewsRepo {
    /// Publish a news item. `published_at` defaults to now.
    pub async fn create(pool: &PgPool, input: &CreateNews) -> Result<News, sqlx::Error> {
        let query = format!(
            "INSERT INTO news (title, content, published_at, author_id)
             VALUES ($1, $2, COALESCE($3, NOW()), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.published_at)
            .bind(input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Joined view of one news item.
    pub async fn find_item(pool: &PgPool, id: DbId) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!("{ITEM_QUERY} WHERE n.id = $1");
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Catalog read: news matching `filter`, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &NewsFilter,
    ) -> Result<Vec<NewsItem>, sqlx::Error> {
        let q = normalize_query(filter.q.as_deref());

        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if q.is_some() {
            conditions.push(format!(
                "(n.title ILIKE ${bind_idx} OR n.content ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if filter.office_id.is_some() {
            conditions.push(format!("e.office_id = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("{ITEM_QUERY} {where_clause} ORDER BY n.published_at DESC, n.id DESC");

        let mut query = sqlx::query_as::<_, NewsItem>(&query);
        if let Some(ref q) = q {
            query = query.bind(contains_pattern(q));
        }
        if let Some(office_id) = filter.office_id {
            query = query.bind(office_id);
        }
        query.fetch_all(pool).await
    }

    /// Most recent news for the landing page.
    pub async fn latest(pool: &PgPool, limit: i64) -> Result<Vec<NewsItem>, sqlx::Error> {
        let query = format!("{ITEM_QUERY} ORDER BY n.published_at DESC, n.id DESC LIMIT $1");
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a news item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNews,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                published_at = COALESCE($4, published_at),
                author_id = COALESCE($5, author_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.published_at)
            .bind(input.author_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
