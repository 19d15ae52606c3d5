//! Aggregate counters shown on the landing page.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogStats {
    pub total_services: i64,
    pub total_offices: i64,
    pub total_applications: i64,
    pub avg_service_cost: Decimal,
}
