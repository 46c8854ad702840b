//! Project repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store project rows with identity assignment.
//! - Hydrate tasks, tags and category on read from the collaborating
//!   repositories.
//! - Apply the configured `ProjectDeletePolicy` on delete.
//!
//! # Invariants
//! - Reads return fresh values. Stored rows never carry relations.
//! - The project lock is released before any collaborator is called.
//! - Saving a project never saves its tasks, tags or category.
//! - Under `Cascade`, the project row is removed only after its tasks and
//!   links are gone, so a failed cascade leaves the project readable.
//!
//! # See also
//! - `crate::repo::tag_repo` for the link semantics `tags` relies on.
//! - `crate::config::ProjectDeletePolicy`.

use super::category_repo::CategoryRepository;
use super::entity_store::EntityStore;
use super::tag_repo::TagRepository;
use super::task_repo::TaskRepository;
use super::RepoResult;
use crate::config::ProjectDeletePolicy;
use crate::model::project::Project;
use crate::model::EntityId;
use log::debug;
use std::sync::Arc;

/// Repository interface for projects.
pub trait ProjectRepository: Send + Sync {
    /// Lists every project with relations hydrated.
    fn list(&self) -> RepoResult<Vec<Project>>;
    /// Gets one project with relations hydrated.
    fn get(&self, id: EntityId) -> RepoResult<Option<Project>>;
    /// Saves the project row only and returns its id.
    fn save(&self, project: &Project) -> RepoResult<EntityId>;
    /// Deletes the project row; follow-up cleanup depends on the delete policy.
    fn delete(&self, project: &Project) -> RepoResult<usize>;
}

pub struct InMemoryProjectRepository {
    projects: EntityStore<Project>,
    tasks: Arc<dyn TaskRepository>,
    tags: Arc<dyn TagRepository>,
    categories: Arc<dyn CategoryRepository>,
    delete_policy: ProjectDeletePolicy,
}

impl InMemoryProjectRepository {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        tags: Arc<dyn TagRepository>,
        categories: Arc<dyn CategoryRepository>,
        delete_policy: ProjectDeletePolicy,
    ) -> Self {
        Self {
            projects: EntityStore::new("projects"),
            tasks,
            tags,
            categories,
            delete_policy,
        }
    }

    pub fn delete_policy(&self) -> ProjectDeletePolicy {
        self.delete_policy
    }

    fn hydrate(&self, mut project: Project) -> RepoResult<Project> {
        project.tasks = self.tasks.list_by_project(project.id)?;
        project.tags = self.tags.list_by_project(project.id)?;
        project.category = self.categories.get(project.category_id)?;
        Ok(project)
    }

    fn cascade_delete(&self, project_id: EntityId) -> RepoResult<()> {
        let mut removed_tasks = 0;
        for task in self.tasks.list_by_project(project_id)? {
            removed_tasks += self.tasks.delete(&task)?;
        }
        let unlinked_tags = self.tags.unlink_project(project_id)?;
        debug!(
            "event=project_delete module=repo status=ok policy=cascade project_id={} removed_tasks={} unlinked_tags={}",
            project_id, removed_tasks, unlinked_tags
        );
        Ok(())
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn list(&self) -> RepoResult<Vec<Project>> {
        // Why: `list()` returns a copy and drops the project lock before any
        // collaborator lock is taken, so hydration never nests store locks.
        self.projects
            .list()?
            .into_iter()
            .map(|row| self.hydrate(row))
            .collect()
    }

    fn get(&self, id: EntityId) -> RepoResult<Option<Project>> {
        match self.projects.get(id)? {
            Some(row) => Ok(Some(self.hydrate(row)?)),
            None => Ok(None),
        }
    }

    fn save(&self, project: &Project) -> RepoResult<EntityId> {
        self.projects.save(project.to_row())
    }

    fn delete(&self, project: &Project) -> RepoResult<usize> {
        if self.projects.get(project.id)?.is_none() {
            return Ok(0);
        }

        match self.delete_policy {
            // Why: orphaned tasks and links stay queryable by project id;
            // cleanup is opt-in through `Cascade`.
            ProjectDeletePolicy::Retain => debug!(
                "event=project_delete module=repo status=ok policy=retain project_id={}",
                project.id
            ),
            ProjectDeletePolicy::Cascade => self.cascade_delete(project.id)?,
        }

        self.projects.delete(project.id)
    }
}
