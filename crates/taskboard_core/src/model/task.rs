//! Task record owned by exactly one project.

use super::{Entity, EntityId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

/// Unit of work inside a project.
///
/// `project_id` is a plain foreign key. Stores do not check that it points
/// at a live project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: EntityId,
    pub title: String,
    pub is_completed: bool,
    pub project_id: EntityId,
}

impl ProjectTask {
    /// Creates an unsaved, open task attached to `project_id`.
    pub fn new(title: impl Into<String>, project_id: EntityId) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            is_completed: false,
            project_id,
        }
    }
}

impl Entity for ProjectTask {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
