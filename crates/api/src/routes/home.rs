//! Landing page, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// ```text
/// GET /   -> home (cached)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home::home))
}
