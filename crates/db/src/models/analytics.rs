//! Analytics singleton model.

use folio_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// The analytics singleton (`analytics` table, always row id 1).
///
/// `total_views` / `total_stars` are legacy snapshot fields kept for
/// compatibility; dashboard stats compute live sums from the projects
/// table instead of reading them, so they may drift.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_views: i64,
    pub total_stars: i64,
    pub visitor_count: i64,
    pub last_updated: Timestamp,
}
