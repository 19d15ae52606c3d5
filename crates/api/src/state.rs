use std::sync::Arc;

use mfc_notifications::Notifier;

use crate::config::ServerConfig;
use crate::handlers::home::{HomeCache, HOME_CACHE_TTL};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mfc_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Landing-page aggregates, refreshed at most every 15 minutes.
    pub home_cache: Arc<HomeCache>,
    /// Best-effort citizen notifications.
    pub notifier: Arc<Notifier>,
}

impl AppState {
    pub fn new(pool: mfc_db::DbPool, config: ServerConfig, notifier: Notifier) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            home_cache: Arc::new(HomeCache::new(HOME_CACHE_TTL)),
            notifier: Arc::new(notifier),
        }
    }
}
