//! Shared query parameter types for API handlers.
//!
//! Public list endpoints accept the short filter names used by the web
//! front-end (`?category=`, `?office=`, `?service=`) and translate them into
//! the repository filter structs.

use mfc_core::search::{
    clamp_limit, clamp_offset, normalize_query, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
use mfc_core::status::StatusId;
use mfc_core::types::DbId;
use mfc_db::models::application::ApplicationFilter;
use mfc_db::models::appointment::AppointmentFilter;
use mfc_db::models::news::NewsFilter;
use mfc_db::models::office::OfficeFilter;
use mfc_db::models::service::ServiceFilter;
use serde::Deserialize;

/// Apply a clamped `limit`/`offset` window to an already-filtered result set.
pub fn paginate<T>(items: Vec<T>, limit: Option<i64>, offset: Option<i64>) -> Vec<T> {
    let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(offset);
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

/// `GET /services?q=&category=&office=&limit=&offset=`
#[derive(Debug, Deserialize)]
pub struct ServiceListParams {
    pub q: Option<String>,
    pub category: Option<DbId>,
    pub office: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ServiceListParams {
    pub fn filter(&self) -> ServiceFilter {
        ServiceFilter {
            q: normalize_query(self.q.as_deref()),
            category_id: self.category,
            office_id: self.office,
        }
    }
}

/// `GET /offices?q=&service=&limit=&offset=`
#[derive(Debug, Deserialize)]
pub struct OfficeListParams {
    pub q: Option<String>,
    pub service: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl OfficeListParams {
    pub fn filter(&self) -> OfficeFilter {
        OfficeFilter {
            q: normalize_query(self.q.as_deref()),
            service_id: self.service,
        }
    }
}

/// `GET /news?q=&office=&limit=&offset=`
#[derive(Debug, Deserialize)]
pub struct NewsListParams {
    pub q: Option<String>,
    pub office: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl NewsListParams {
    pub fn filter(&self) -> NewsFilter {
        NewsFilter {
            q: normalize_query(self.q.as_deref()),
            office_id: self.office,
        }
    }
}

/// `?q=` for the unified search and suggestion endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /admin/applications?status=&service=&user=`
#[derive(Debug, Deserialize)]
pub struct AdminApplicationParams {
    pub status: Option<StatusId>,
    pub service: Option<DbId>,
    pub user: Option<DbId>,
}

impl From<AdminApplicationParams> for ApplicationFilter {
    fn from(params: AdminApplicationParams) -> Self {
        Self {
            status_id: params.status,
            service_id: params.service,
            user_id: params.user,
        }
    }
}

/// `GET /admin/appointments?status=&office=`
#[derive(Debug, Deserialize)]
pub struct AdminAppointmentParams {
    pub status: Option<String>,
    pub office: Option<DbId>,
}

impl From<AdminAppointmentParams> for AppointmentFilter {
    fn from(params: AdminAppointmentParams) -> Self {
        Self {
            status: params.status.filter(|s| !s.trim().is_empty()),
            office_id: params.office,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_fifty() {
        let items: Vec<i32> = (0..120).collect();
        let page = paginate(items, None, None);
        assert_eq!(page.len(), 50);
        assert_eq!(page[0], 0);
    }

    #[test]
    fn pagination_honours_offset_and_limit() {
        let items: Vec<i32> = (0..10).collect();
        assert_eq!(paginate(items, Some(3), Some(8)), vec![8, 9]);
    }

    #[test]
    fn blank_query_becomes_no_filter() {
        let params = ServiceListParams {
            q: Some("   ".into()),
            category: Some(2),
            office: None,
            limit: None,
            offset: None,
        };
        let filter = params.filter();
        assert_eq!(filter.q, None);
        assert_eq!(filter.category_id, Some(2));
    }
}
