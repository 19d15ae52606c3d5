//! Aggregate counters for the landing page.

use sqlx::PgPool;

use crate::models::stats::CatalogStats;

pub struct StatsRepo;

impl StatsRepo {
    /// Totals across the catalog. The average cost is 0 for an empty catalog.
    pub async fn catalog(pool: &PgPool) -> Result<CatalogStats, sqlx::Error> {
        sqlx::query_as::<_, CatalogStats>(
            "SELECT
                (SELECT COUNT(*) FROM services) AS total_services,
                (SELECT COUNT(*) FROM offices) AS total_offices,
                (SELECT COUNT(*) FROM applications) AS total_applications,
                (SELECT COALESCE(ROUND(AVG(cost), 2), 0) FROM services) AS avg_service_cost",
        )
        .fetch_one(pool)
        .await
    }
}
