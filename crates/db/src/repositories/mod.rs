pub mod analytics_repo;
pub mod project_repo;

pub use analytics_repo::AnalyticsRepo;
pub use project_repo::ProjectRepo;
