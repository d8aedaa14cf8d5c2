//! Repository for the `projects` table.
//!
//! Counter mutations (`views`, `stars`) are single-statement atomic
//! read-modify-writes so concurrent increments never lose updates.

use folio_core::catalog::{NewProject, ProjectFilter, ProjectPatch};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list for projects queries.
const COLUMNS: &str = "id, title, description, tags, github_link, live_link, \
    image_url, image_fit, stars, views, featured, sort_order, created_at, updated_at";

/// Provides CRUD and engagement operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with validated fields.
    ///
    /// Counters start at zero via column defaults; `created_at` and
    /// `updated_at` are both set to the insertion time.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, tags, github_link, live_link, image_url,
                 image_fit, featured, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.tags)
            .bind(&input.github_link)
            .bind(&input.live_link)
            .bind(&input.image_url)
            .bind(input.image_fit.as_str())
            .bind(input.featured)
            .bind(input.order)
            .fetch_one(pool)
            .await
    }

    /// List projects matching the filter, sorted for the showcase:
    /// `sort_order` ascending, then newest first.
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if filter.tag.is_some() {
            conditions.push(format!("${bind_idx} = ANY(tags)"));
            bind_idx += 1;
        }

        if filter.search.is_some() {
            conditions.push(format!(
                "(title ILIKE '%' || ${bind_idx} || '%' \
                  OR description ILIKE '%' || ${bind_idx} || '%')"
            ));
            bind_idx += 1;
        }

        if filter.featured == Some(true) {
            conditions.push("featured".to_string());
        }
        let _ = bind_idx;

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             {where_clause} \
             ORDER BY sort_order ASC, created_at DESC"
        );

        let mut q = sqlx::query_as::<_, Project>(&query);
        if let Some(ref tag) = filter.tag {
            q = q.bind(tag);
        }
        if let Some(ref search) = filter.search {
            q = q.bind(search);
        }

        q.fetch_all(pool).await
    }

    /// Find a project by ID without touching its counters.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a project and count the read: `views` is incremented in
    /// the same statement, so the bump is persisted before the row is
    /// returned and concurrent reads cannot lose an update.
    pub async fn fetch_and_increment_views(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET views = views + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically add one star. No per-visitor dedup exists server-side.
    pub async fn add_star(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET stars = stars + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update. `None` fields leave the stored value
    /// unchanged; present fields replace it, including `false` / `0`.
    /// Refreshes `updated_at`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &ProjectPatch,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                tags = COALESCE($3, tags),
                github_link = COALESCE($4, github_link),
                live_link = COALESCE($5, live_link),
                image_url = COALESCE($6, image_url),
                image_fit = COALESCE($7, image_fit),
                featured = COALESCE($8, featured),
                sort_order = COALESCE($9, sort_order),
                updated_at = NOW()
             WHERE id = $10
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(&patch.tags)
            .bind(&patch.github_link)
            .bind(&patch.live_link)
            .bind(&patch.image_url)
            .bind(patch.image_fit.map(|f| f.as_str()))
            .bind(patch.featured)
            .bind(patch.order)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a project. Returns `false` when the id was absent,
    /// so a repeated delete reports NotFound rather than success.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Most recently created projects, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
