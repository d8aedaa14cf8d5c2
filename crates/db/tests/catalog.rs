//! Repository-level integration tests for the project catalog.
//!
//! Each test runs against its own migrated database via `#[sqlx::test]`.

use folio_core::catalog::{CreateProject, ProjectFilter, UpdateProject};
use folio_db::repositories::{AnalyticsRepo, ProjectRepo};
use sqlx::PgPool;

fn draft(title: &str) -> CreateProject {
    CreateProject {
        title: Some(title.into()),
        description: Some(format!("{title} description")),
        github_link: Some(format!("https://github.com/me/{title}")),
        ..Default::default()
    }
}

async fn seed(pool: &PgPool, input: CreateProject) -> folio_db::models::project::Project {
    let fields = input.validate().expect("valid draft");
    ProjectRepo::create(pool, &fields).await.expect("insert")
}

// ---------------------------------------------------------------------------
// Counter atomicity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_stars_never_lose_updates(pool: PgPool) {
    let project = seed(&pool, draft("starred")).await;
    assert_eq!(project.stars, 0);

    let mut handles = Vec::new();
    for _ in 0..10 {
        let pool = pool.clone();
        let id = project.id;
        handles.push(tokio::spawn(async move {
            ProjectRepo::add_star(&pool, id).await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("task panicked")
            .expect("star failed")
            .expect("project vanished");
    }

    let current = ProjectRepo::find_by_id(&pool, project.id)
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(current.stars, 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn view_increment_is_persisted_per_read(pool: PgPool) {
    let project = seed(&pool, draft("viewed")).await;

    let first = ProjectRepo::fetch_and_increment_views(&pool, project.id)
        .await
        .expect("query")
        .expect("present");
    assert_eq!(first.views, 1);

    let second = ProjectRepo::fetch_and_increment_views(&pool, project.id)
        .await
        .expect("query")
        .expect("present");
    assert_eq!(second.views, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_visits_all_count(pool: PgPool) {
    let mut handles = Vec::new();
    for _ in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(
            async move { AnalyticsRepo::record_visit(&pool).await },
        ));
    }
    for handle in handles {
        handle.await.expect("task panicked").expect("visit failed");
    }

    let analytics = AnalyticsRepo::get_or_create(&pool).await.expect("fetch");
    assert_eq!(analytics.visitor_count, 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn analytics_singleton_lazily_created_with_zero_defaults(pool: PgPool) {
    let analytics = AnalyticsRepo::get_or_create(&pool).await.expect("fetch");
    assert_eq!(analytics.visitor_count, 0);
    assert_eq!(analytics.total_views, 0);
    assert_eq!(analytics.total_stars, 0);
}

// ---------------------------------------------------------------------------
// Listing order and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_sorts_by_order_then_newest(pool: PgPool) {
    seed(
        &pool,
        CreateProject {
            order: Some(2),
            ..draft("late")
        },
    )
    .await;
    let older = seed(
        &pool,
        CreateProject {
            order: Some(1),
            ..draft("older")
        },
    )
    .await;
    let newer = seed(
        &pool,
        CreateProject {
            order: Some(1),
            ..draft("newer")
        },
    )
    .await;

    // Force a visible created_at gap between the two order=1 rows.
    sqlx::query("UPDATE projects SET created_at = created_at - INTERVAL '1 hour' WHERE id = $1")
        .bind(older.id)
        .execute(&pool)
        .await
        .expect("backdate");

    let listed = ProjectRepo::list(&pool, &ProjectFilter::default())
        .await
        .expect("list");
    let titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["newer", "older", "late"]);
    assert_eq!(listed[0].id, newer.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_tag_membership(pool: PgPool) {
    seed(
        &pool,
        CreateProject {
            tags: Some(vec!["rust".into(), "cli".into()]),
            ..draft("tagged")
        },
    )
    .await;
    seed(&pool, draft("untagged")).await;

    let filter = ProjectFilter {
        tag: Some("rust".into()),
        ..Default::default()
    };
    let listed = ProjectRepo::list(&pool, &filter).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "tagged");

    // Membership is exact, not substring.
    let filter = ProjectFilter {
        tag: Some("rus".into()),
        ..Default::default()
    };
    assert!(ProjectRepo::list(&pool, &filter)
        .await
        .expect("list")
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_search_is_case_insensitive_over_title_and_description(pool: PgPool) {
    seed(&pool, draft("Fractal Explorer")).await;
    seed(
        &pool,
        CreateProject {
            description: Some("renders fractals in the terminal".into()),
            ..draft("tui-toy")
        },
    )
    .await;
    seed(&pool, draft("unrelated")).await;

    let filter = ProjectFilter {
        search: Some("FRACTAL".into()),
        ..Default::default()
    };
    let listed = ProjectRepo::list(&pool, &filter).await.expect("list");
    assert_eq!(listed.len(), 2);

    // Empty-string search matches everything.
    let filter = ProjectFilter {
        search: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(ProjectRepo::list(&pool, &filter).await.expect("list").len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_featured_filter_only_restricts_when_true(pool: PgPool) {
    seed(
        &pool,
        CreateProject {
            featured: Some(true),
            ..draft("headliner")
        },
    )
    .await;
    seed(&pool, draft("regular")).await;

    let filter = ProjectFilter {
        featured: Some(true),
        ..Default::default()
    };
    let listed = ProjectRepo::list(&pool, &filter).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "headliner");

    // featured=false imposes no filter.
    let filter = ProjectFilter {
        featured: Some(false),
        ..Default::default()
    };
    assert_eq!(ProjectRepo::list(&pool, &filter).await.expect("list").len(), 2);
}

// ---------------------------------------------------------------------------
// Updates and deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_falsy_values(pool: PgPool) {
    let project = seed(
        &pool,
        CreateProject {
            featured: Some(true),
            order: Some(5),
            ..draft("demoted")
        },
    )
    .await;

    let patch = UpdateProject {
        featured: Some(false),
        order: Some(0),
        ..Default::default()
    }
    .validate()
    .expect("valid patch");

    let updated = ProjectRepo::update(&pool, project.id, &patch)
        .await
        .expect("update")
        .expect("present");
    assert!(!updated.featured);
    assert_eq!(updated.order, 0);
    assert!(updated.updated_at >= project.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_leaves_absent_fields_unchanged(pool: PgPool) {
    let project = seed(
        &pool,
        CreateProject {
            tags: Some(vec!["rust".into()]),
            live_link: Some("https://demo.example".into()),
            ..draft("stable")
        },
    )
    .await;

    let patch = UpdateProject {
        title: Some("renamed".into()),
        ..Default::default()
    }
    .validate()
    .expect("valid patch");

    let updated = ProjectRepo::update(&pool, project.id, &patch)
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.description, project.description);
    assert_eq!(updated.tags, project.tags);
    assert_eq!(updated.live_link, project.live_link);
    assert_eq!(updated.created_at, project.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_is_hard_and_not_idempotent_success(pool: PgPool) {
    let project = seed(&pool, draft("doomed")).await;

    assert!(ProjectRepo::delete(&pool, project.id).await.expect("delete"));
    assert!(ProjectRepo::find_by_id(&pool, project.id)
        .await
        .expect("lookup")
        .is_none());
    // Second delete reports absence, not success.
    assert!(!ProjectRepo::delete(&pool, project.id).await.expect("delete"));
}
