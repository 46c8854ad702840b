//! Process-wide repository wiring.
//!
//! Builds one shared instance per repository and injects the task, tag and
//! category repositories into the project repository.

use super::category_repo::{CategoryRepository, InMemoryCategoryRepository};
use super::project_repo::{InMemoryProjectRepository, ProjectRepository};
use super::tag_repo::{InMemoryTagRepository, TagRepository};
use super::task_repo::{InMemoryTaskRepository, TaskRepository};
use crate::config::CoreConfig;
use log::info;
use std::sync::Arc;

/// Shared handles to every repository. Cloning shares the same stores.
#[derive(Clone)]
pub struct Repositories {
    pub projects: Arc<dyn ProjectRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl Repositories {
    /// Creates empty in-memory repositories configured by `config`.
    pub fn in_memory(config: &CoreConfig) -> Self {
        let tasks: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
        let tags: Arc<dyn TagRepository> = Arc::new(InMemoryTagRepository::new());
        let categories: Arc<dyn CategoryRepository> =
            Arc::new(InMemoryCategoryRepository::new());
        let projects: Arc<dyn ProjectRepository> = Arc::new(InMemoryProjectRepository::new(
            Arc::clone(&tasks),
            Arc::clone(&tags),
            Arc::clone(&categories),
            config.project_delete,
        ));

        info!(
            "event=repositories_init module=repo status=ok backend=memory project_delete={}",
            config.project_delete.as_str()
        );

        Self {
            projects,
            tasks,
            tags,
            categories,
        }
    }
}
