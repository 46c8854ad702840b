//! Project → tag association index.
//!
//! # Invariants
//! - A project's tag set never holds duplicates.
//! - A project's set, once created, survives until `remove_parent`, even
//!   when it becomes empty.
//! - The index never checks that ids exist in any entity store.

use crate::model::EntityId;
use std::collections::{BTreeSet, HashMap};

/// Many-to-many link table keyed by project id.
#[derive(Debug, Default, Clone)]
pub struct AssociationIndex {
    links: HashMap<EntityId, BTreeSet<EntityId>>,
}

impl AssociationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `tag_id` to `project_id`. Returns `false` when the link existed.
    pub fn add(&mut self, project_id: EntityId, tag_id: EntityId) -> bool {
        self.links.entry(project_id).or_default().insert(tag_id)
    }

    /// Unlinks `tag_id` from `project_id`.
    ///
    /// Returns whether the project had a tag set at all, independent of
    /// whether `tag_id` was in it.
    pub fn remove_one(&mut self, project_id: EntityId, tag_id: EntityId) -> bool {
        match self.links.get_mut(&project_id) {
            Some(tags) => {
                tags.remove(&tag_id);
                true
            }
            None => false,
        }
    }

    /// Unlinks `tag_id` from every project. Returns the number of links dropped.
    pub fn remove_everywhere(&mut self, tag_id: EntityId) -> usize {
        self.links
            .values_mut()
            .map(|tags| tags.remove(&tag_id))
            .filter(|removed| *removed)
            .count()
    }

    /// Drops the whole tag set of `project_id`. Returns the number of links dropped.
    pub fn remove_parent(&mut self, project_id: EntityId) -> usize {
        self.links
            .remove(&project_id)
            .map(|tags| tags.len())
            .unwrap_or(0)
    }

    /// Returns a copy of the tag ids linked to `project_id`.
    pub fn list_for_project(&self, project_id: EntityId) -> BTreeSet<EntityId> {
        self.links.get(&project_id).cloned().unwrap_or_default()
    }
}
