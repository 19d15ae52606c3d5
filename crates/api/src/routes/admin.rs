//! Route definitions for the staff management surface mounted at `/admin`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{admin, workflow};
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires the `staff` role.
///
/// ```text
/// GET, POST          /categories                    -> list_categories, create_category
/// GET, PUT, DELETE   /categories/{id}               -> get/update/delete_category
/// GET, POST          /services                      -> list_services, create_service
/// GET, PUT, DELETE   /services/{id}                 -> get/update/delete_service
/// GET, POST          /offices                       -> list_offices, create_office
/// GET, PUT, DELETE   /offices/{id}                  -> get/update/delete_office
/// GET, POST          /employees                     -> list_employees, create_employee
/// GET, PUT, DELETE   /employees/{id}                -> get/update/delete_employee
/// GET, POST          /news                          -> list_news, create_news
/// GET, PUT, DELETE   /news/{id}                     -> get/update/delete_news
/// GET, POST          /office-services               -> list/create_office_service
/// DELETE             /office-services/{id}          -> delete_office_service
/// GET, POST          /application-statuses          -> list_statuses, create_status
/// GET                /users                         -> list_users
/// GET                /applications                  -> list_applications
/// POST               /applications/{id}/status      -> set_application_status
/// POST               /applications/mark-completed   -> mark_applications_completed
/// POST               /applications/mark-rejected    -> mark_applications_rejected
/// GET                /appointments                  -> list_appointments
/// POST               /appointments/mark-completed   -> mark_appointments_completed
/// POST               /appointments/cancel           -> cancel_appointments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Catalog.
        .route(
            "/categories",
            get(admin::list_categories).post(admin::create_category),
        )
        .route(
            "/categories/{id}",
            get(admin::get_category)
                .put(admin::update_category)
                .delete(admin::delete_category),
        )
        .route(
            "/services",
            get(admin::list_services).post(admin::create_service),
        )
        .route(
            "/services/{id}",
            get(admin::get_service)
                .put(admin::update_service)
                .delete(admin::delete_service),
        )
        .route("/offices", get(admin::list_offices).post(admin::create_office))
        .route(
            "/offices/{id}",
            get(admin::get_office)
                .put(admin::update_office)
                .delete(admin::delete_office),
        )
        .route(
            "/employees",
            get(admin::list_employees).post(admin::create_employee),
        )
        .route(
            "/employees/{id}",
            get(admin::get_employee)
                .put(admin::update_employee)
                .delete(admin::delete_employee),
        )
        .route("/news", get(admin::list_news).post(admin::create_news))
        .route(
            "/news/{id}",
            get(admin::get_news)
                .put(admin::update_news)
                .delete(admin::delete_news),
        )
        .route(
            "/office-services",
            get(admin::list_office_services).post(admin::create_office_service),
        )
        .route(
            "/office-services/{id}",
            delete(admin::delete_office_service),
        )
        // Lookups and accounts.
        .route(
            "/application-statuses",
            get(admin::list_statuses).post(admin::create_status),
        )
        .route("/users", get(admin::list_users))
        // Workflow.
        .route("/applications", get(workflow::list_applications))
        .route(
            "/applications/{id}/status",
            post(workflow::set_application_status),
        )
        .route(
            "/applications/mark-completed",
            post(workflow::mark_applications_completed),
        )
        .route(
            "/applications/mark-rejected",
            post(workflow::mark_applications_rejected),
        )
        .route("/appointments", get(workflow::list_appointments))
        .route(
            "/appointments/mark-completed",
            post(workflow::mark_appointments_completed),
        )
        .route("/appointments/cancel", post(workflow::cancel_appointments))
}
