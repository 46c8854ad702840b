//! Core data-access layer for the taskboard app.
//! Projects, tasks, tags and categories live in shared in-memory repositories.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig, LogConfig, ProjectDeletePolicy};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::Category;
pub use model::project::Project;
pub use model::tag::Tag;
pub use model::task::ProjectTask;
pub use model::{Entity, EntityId, DEFAULT_COLOR, UNASSIGNED_ID};
pub use repo::association::AssociationIndex;
pub use repo::category_repo::{CategoryRepository, InMemoryCategoryRepository};
pub use repo::entity_store::EntityStore;
pub use repo::project_repo::{InMemoryProjectRepository, ProjectRepository};
pub use repo::registry::Repositories;
pub use repo::tag_repo::{InMemoryTagRepository, TagRepository};
pub use repo::task_repo::{InMemoryTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::seed_service::{SeedDataService, SeedSummary};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
