//! Task repository contract and in-memory implementation.
//!
//! # Invariants
//! - `project_id` is not checked against the project store on write.
//! - `list_by_project` keeps insertion order.

use super::entity_store::EntityStore;
use super::RepoResult;
use crate::model::task::ProjectTask;
use crate::model::EntityId;

/// Repository interface for project tasks.
pub trait TaskRepository: Send + Sync {
    fn list(&self) -> RepoResult<Vec<ProjectTask>>;
    /// Lists tasks whose `project_id` equals `project_id`.
    fn list_by_project(&self, project_id: EntityId) -> RepoResult<Vec<ProjectTask>>;
    fn get(&self, id: EntityId) -> RepoResult<Option<ProjectTask>>;
    fn save(&self, task: &ProjectTask) -> RepoResult<EntityId>;
    fn delete(&self, task: &ProjectTask) -> RepoResult<usize>;
}

pub struct InMemoryTaskRepository {
    store: EntityStore<ProjectTask>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new("tasks"),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list(&self) -> RepoResult<Vec<ProjectTask>> {
        self.store.list()
    }

    fn list_by_project(&self, project_id: EntityId) -> RepoResult<Vec<ProjectTask>> {
        self.store.list_where(|task| task.project_id == project_id)
    }

    fn get(&self, id: EntityId) -> RepoResult<Option<ProjectTask>> {
        self.store.get(id)
    }

    fn save(&self, task: &ProjectTask) -> RepoResult<EntityId> {
        self.store.save(task.clone())
    }

    fn delete(&self, task: &ProjectTask) -> RepoResult<usize> {
        self.store.delete(task.id)
    }
}
