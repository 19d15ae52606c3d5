//! Public catalog routes, merged directly into `/api/v1`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{catalog, search};
use crate::state::AppState;

/// ```text
/// GET /categories            -> list_categories
/// GET /services              -> list_services
/// GET /services/{id}         -> get_service
/// GET /offices               -> list_offices
/// GET /offices/{id}          -> get_office
/// GET /news                  -> list_news
/// GET /news/{id}             -> get_news
/// GET /search                -> search
/// GET /search/suggestions    -> suggestions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/services", get(catalog::list_services))
        .route("/services/{id}", get(catalog::get_service))
        .route("/offices", get(catalog::list_offices))
        .route("/offices/{id}", get(catalog::get_office))
        .route("/news", get(catalog::list_news))
        .route("/news/{id}", get(catalog::get_news))
        .route("/search", get(search::search))
        .route("/search/suggestions", get(search::suggestions))
}
