//! Project entity model.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// This struct is also the wire shape the front end consumes, so it
/// serializes in camelCase. The `sort_order` column is exposed as
/// `order` on the wire; the column name differs only because `order`
/// is a reserved word in SQL.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github_link: String,
    pub live_link: Option<String>,
    pub image_url: Option<String>,
    pub image_fit: String,
    pub stars: i64,
    pub views: i64,
    pub featured: bool,
    #[sqlx(rename = "sort_order")]
    #[serde(rename = "order")]
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
