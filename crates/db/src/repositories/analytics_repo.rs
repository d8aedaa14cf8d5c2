//! Repository for the `analytics` singleton.
//!
//! The table is constrained to a single row (`id = 1`); both
//! operations are upserts so the row is lazily created on first
//! access and the visitor increment is atomic.

use sqlx::PgPool;

use crate::models::analytics::Analytics;

/// Column list for analytics queries (the fixed id is not exposed).
const COLUMNS: &str = "total_views, total_stars, visitor_count, last_updated";

pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Fetch the singleton, creating it with zero defaults if absent.
    pub async fn get_or_create(pool: &PgPool) -> Result<Analytics, sqlx::Error> {
        let query = format!(
            "INSERT INTO analytics (id) VALUES (1)
             ON CONFLICT (id) DO UPDATE SET id = analytics.id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Analytics>(&query).fetch_one(pool).await
    }

    /// Atomically count one site visit, creating the singleton with
    /// `visitor_count = 1` if absent. Refreshes `last_updated`.
    pub async fn record_visit(pool: &PgPool) -> Result<Analytics, sqlx::Error> {
        let query = format!(
            "INSERT INTO analytics (id, visitor_count) VALUES (1, 1)
             ON CONFLICT (id) DO UPDATE
                SET visitor_count = analytics.visitor_count + 1,
                    last_updated = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Analytics>(&query).fetch_one(pool).await
    }
}
