pub mod admin;
pub mod applications;
pub mod appointments;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod home;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   create citizen + profile (public)
/// /auth/login                                      access token (public)
/// /auth/me                                         current user (auth)
///
/// /categories                                      list (public)
/// /services                                        list ?q=&category=&office= (public)
/// /services/{id}                                   detail + offices (public)
/// /offices                                         list ?q=&service= (public)
/// /offices/{id}                                    detail + employees + services (public)
/// /news                                            list ?q=&office= (public)
/// /news/{id}                                       detail (public)
/// /search                                          grouped search ?q= (public)
/// /search/suggestions                              suggestions ?q= (public)
///
/// /applications                                    list own, create (auth)
/// /applications/{id}                               get, update, delete (owner)
///
/// /appointments                                    list own, create (auth)
/// /appointments/{id}                               get, update, delete (owner)
/// /appointments/{id}/cancel                        cancel (owner, POST)
///
/// /admin/categories                                list, create (staff)
/// /admin/categories/{id}                           get, update, delete
/// /admin/services                                  list, create
/// /admin/services/{id}                             get, update, delete
/// /admin/offices                                   list, create
/// /admin/offices/{id}                              get, update, delete
/// /admin/employees                                 list, create
/// /admin/employees/{id}                            get, update, delete
/// /admin/news                                      list, create
/// /admin/news/{id}                                 get, update, delete
/// /admin/office-services                           list, create
/// /admin/office-services/{id}                      delete
/// /admin/application-statuses                      list, create
/// /admin/users                                     list with profiles
/// /admin/applications                              list ?status=&service=&user=
/// /admin/applications/{id}/status                  single transition (POST)
/// /admin/applications/mark-completed               bulk (POST)
/// /admin/applications/mark-rejected                bulk (POST)
/// /admin/appointments                              list ?status=&office=
/// /admin/appointments/mark-completed               bulk (POST)
/// /admin/appointments/cancel                       bulk (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(catalog::router())
        .nest("/applications", applications::router())
        .nest("/appointments", appointments::router())
        .nest("/admin", admin::router())
}
