//! Handlers for dashboard stats and the visitor counter.
//!
//! Stats are admin-only; the visitor signal is anonymous.

use axum::extract::State;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::project::Project;
use folio_db::repositories::{AnalyticsRepo, ProjectRepo};
use serde::Serialize;

use crate::auth::{self, AdminSecret};
use crate::error::AppResult;
use crate::state::AppState;

/// How many projects each top/recent stat list includes.
const STATS_LIST_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A project ranked by views.
#[derive(Debug, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopViewedItem {
    pub id: DbId,
    pub title: String,
    pub views: i64,
    pub image_url: Option<String>,
}

/// A project ranked by stars.
#[derive(Debug, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStarredItem {
    pub id: DbId,
    pub title: String,
    pub stars: i64,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: i64,
    pub total_views: i64,
    pub total_stars: i64,
    pub visitor_count: i64,
    pub top_viewed: Vec<TopViewedItem>,
    pub top_starred: Vec<TopStarredItem>,
    pub recent_projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: DashboardStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorResponse {
    pub success: bool,
    pub visitor_count: i64,
}

/// Row for the live totals aggregation query.
#[derive(Debug, sqlx::FromRow)]
struct TotalsRow {
    total_projects: i64,
    total_views: i64,
    total_stars: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/dashboard/stats
///
/// Totals are computed live from the projects table at call time. The
/// analytics singleton's cached `totalViews` / `totalStars` are legacy
/// snapshot fields and are deliberately not read here -- only
/// `visitorCount` comes from the singleton.
pub async fn stats(
    State(state): State<AppState>,
    Json(input): Json<AdminSecret>,
) -> AppResult<Json<StatsResponse>> {
    auth::authorize(&state.config, input.secret.as_deref())?;

    let totals = sqlx::query_as::<_, TotalsRow>(
        "SELECT COUNT(*) AS total_projects, \
                COALESCE(SUM(views), 0)::BIGINT AS total_views, \
                COALESCE(SUM(stars), 0)::BIGINT AS total_stars \
         FROM projects",
    )
    .fetch_one(&state.pool)
    .await?;

    let top_viewed = sqlx::query_as::<_, TopViewedItem>(
        "SELECT id, title, views, image_url FROM projects \
         ORDER BY views DESC LIMIT $1",
    )
    .bind(STATS_LIST_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    let top_starred = sqlx::query_as::<_, TopStarredItem>(
        "SELECT id, title, stars, image_url FROM projects \
         ORDER BY stars DESC LIMIT $1",
    )
    .bind(STATS_LIST_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    let recent_projects = ProjectRepo::recent(&state.pool, STATS_LIST_LIMIT).await?;

    let analytics = AnalyticsRepo::get_or_create(&state.pool).await?;

    Ok(Json(StatsResponse {
        success: true,
        stats: DashboardStats {
            total_projects: totals.total_projects,
            total_views: totals.total_views,
            total_stars: totals.total_stars,
            visitor_count: analytics.visitor_count,
            top_viewed,
            top_starred,
            recent_projects,
        },
    }))
}

/// POST /api/dashboard/visitor
///
/// Anonymous visit signal, independent of any per-project counter.
pub async fn record_visit(State(state): State<AppState>) -> AppResult<Json<VisitorResponse>> {
    let analytics = AnalyticsRepo::record_visit(&state.pool).await?;

    tracing::debug!(visitor_count = analytics.visitor_count, "Visitor recorded");

    Ok(Json(VisitorResponse {
        success: true,
        visitor_count: analytics.visitor_count,
    }))
}
