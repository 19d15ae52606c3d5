//! Route definitions for the citizen `/appointments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::appointments;
use crate::state::AppState;

/// Routes mounted at `/appointments`.
///
/// ```text
/// GET    /              -> list_appointments
/// POST   /              -> create_appointment
/// GET    /{id}          -> get_appointment
/// PUT    /{id}          -> update_appointment
/// DELETE /{id}          -> delete_appointment
/// POST   /{id}/cancel   -> cancel_appointment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/{id}",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        )
        .route("/{id}/cancel", post(appointments::cancel_appointment))
}
