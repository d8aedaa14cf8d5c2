pub mod analytics;
pub mod project;
