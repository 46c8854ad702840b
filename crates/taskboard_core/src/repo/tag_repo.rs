//! Tag repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store tags globally and keep project-scoped links in an
//!   `AssociationIndex`.
//!
//! # Invariants
//! - Global delete removes the tag from every project's link set.
//! - Project-scoped delete only unlinks; the tag stays in the global store.
//! - Project-scoped listing follows global store order.
//! - The entity store and the link index have separate locks and are never
//!   held at the same time.
//!
//! # See also
//! - `crate::repo::association::AssociationIndex`.

use super::association::AssociationIndex;
use super::entity_store::EntityStore;
use super::{RepoError, RepoResult};
use crate::model::tag::Tag;
use crate::model::EntityId;
use log::debug;
use std::sync::{Mutex, MutexGuard};

const LINKS_STORE_NAME: &str = "tag_links";

/// Repository interface for tags.
pub trait TagRepository: Send + Sync {
    /// Lists every tag in the global store.
    fn list(&self) -> RepoResult<Vec<Tag>>;
    /// Lists tags linked to `project_id`.
    fn list_by_project(&self, project_id: EntityId) -> RepoResult<Vec<Tag>>;
    fn get(&self, id: EntityId) -> RepoResult<Option<Tag>>;
    fn save(&self, tag: &Tag) -> RepoResult<EntityId>;
    /// Saves `tag` globally, then links it to `project_id`.
    ///
    /// Always returns 1, whether or not the link already existed.
    /// A nonzero id missing from the store is still linked, and resolves once
    /// the store allocates that id.
    fn save_for_project(&self, tag: &Tag, project_id: EntityId) -> RepoResult<usize>;
    /// Deletes `tag` globally and unlinks it from every project.
    fn delete(&self, tag: &Tag) -> RepoResult<usize>;
    /// Unlinks `tag` from `project_id` only.
    ///
    /// Returns 1 when the project had a link set, 0 otherwise.
    fn delete_for_project(&self, tag: &Tag, project_id: EntityId) -> RepoResult<usize>;
    /// Drops every link of `project_id`. Returns the number of links dropped.
    fn unlink_project(&self, project_id: EntityId) -> RepoResult<usize>;
}

pub struct InMemoryTagRepository {
    tags: EntityStore<Tag>,
    links: Mutex<AssociationIndex>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self {
            tags: EntityStore::new("tags"),
            links: Mutex::new(AssociationIndex::new()),
        }
    }

    fn links(&self) -> RepoResult<MutexGuard<'_, AssociationIndex>> {
        self.links
            .lock()
            .map_err(|_| RepoError::LockPoisoned(LINKS_STORE_NAME))
    }
}

impl Default for InMemoryTagRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagRepository for InMemoryTagRepository {
    fn list(&self) -> RepoResult<Vec<Tag>> {
        self.tags.list()
    }

    fn list_by_project(&self, project_id: EntityId) -> RepoResult<Vec<Tag>> {
        let linked = self.links()?.list_for_project(project_id);
        if linked.is_empty() {
            return Ok(Vec::new());
        }
        self.tags.list_where(|tag| linked.contains(&tag.id))
    }

    fn get(&self, id: EntityId) -> RepoResult<Option<Tag>> {
        self.tags.get(id)
    }

    fn save(&self, tag: &Tag) -> RepoResult<EntityId> {
        self.tags.save(tag.clone())
    }

    fn save_for_project(&self, tag: &Tag, project_id: EntityId) -> RepoResult<usize> {
        let tag_id = self.save(tag)?;
        let created = self.links()?.add(project_id, tag_id);
        debug!(
            "event=tag_link module=repo status=ok action=add project_id={} tag_id={} created={}",
            project_id, tag_id, created
        );
        Ok(1)
    }

    fn delete(&self, tag: &Tag) -> RepoResult<usize> {
        let removed = self.tags.delete(tag.id)?;
        let unlinked = self.links()?.remove_everywhere(tag.id);
        debug!(
            "event=tag_link module=repo status=ok action=remove_everywhere tag_id={} unlinked={}",
            tag.id, unlinked
        );
        Ok(removed)
    }

    fn delete_for_project(&self, tag: &Tag, project_id: EntityId) -> RepoResult<usize> {
        let had_links = self.links()?.remove_one(project_id, tag.id);
        debug!(
            "event=tag_link module=repo status=ok action=remove_one project_id={} tag_id={} had_links={}",
            project_id, tag.id, had_links
        );
        Ok(usize::from(had_links))
    }

    fn unlink_project(&self, project_id: EntityId) -> RepoResult<usize> {
        let unlinked = self.links()?.remove_parent(project_id);
        debug!(
            "event=tag_link module=repo status=ok action=remove_parent project_id={} unlinked={}",
            project_id, unlinked
        );
        Ok(unlinked)
    }
}
