//! Handler for the landing page.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use mfc_core::search::HOME_WIDGET_LIMIT;
use mfc_db::models::news::NewsItem;
use mfc_db::models::office::OfficeSummary;
use mfc_db::models::service::PopularService;
use mfc_db::models::stats::CatalogStats;
use mfc_db::repositories::{NewsRepo, OfficeRepo, ServiceRepo, StatsRepo};
use mfc_db::DbPool;
use serde::Serialize;

use crate::cache::TtlCache;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// How long landing-page aggregates are served from memory.
pub const HOME_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Landing-page cache.
pub type HomeCache = TtlCache<HomePage>;

/// Landing-page widgets.
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub latest_news: Vec<NewsItem>,
    /// Most-applied services first.
    pub popular_services: Vec<PopularService>,
    /// A random pick of offices, fixed for the lifetime of the cache entry.
    pub offices: Vec<OfficeSummary>,
    pub stats: CatalogStats,
}

/// GET /
///
/// Served from the in-process cache; recomputed at most every 15 minutes.
pub async fn home(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomePage>>> {
    let page = state
        .home_cache
        .get_or_try_load(|| load_home(&state.pool))
        .await?;

    Ok(Json(DataResponse { data: page }))
}

async fn load_home(pool: &DbPool) -> Result<HomePage, sqlx::Error> {
    tracing::debug!("Recomputing landing-page widgets");

    Ok(HomePage {
        latest_news: NewsRepo::latest(pool, HOME_WIDGET_LIMIT).await?,
        popular_services: ServiceRepo::popular(pool, HOME_WIDGET_LIMIT).await?,
        offices: OfficeRepo::random(pool, HOME_WIDGET_LIMIT).await?,
        stats: StatsRepo::catalog(pool).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_ttl_is_fifteen_minutes() {
        assert_eq!(HOME_CACHE_TTL.as_secs(), 900);
    }
}
