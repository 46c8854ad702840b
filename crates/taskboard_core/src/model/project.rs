//! Project aggregate root.
//!
//! # Invariants
//! - `category`, `tasks` and `tags` are read-side projections filled in by
//!   `ProjectRepository` reads. Saving a project never persists them.

use super::category::Category;
use super::tag::Tag;
use super::task::ProjectTask;
use super::{Entity, EntityId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Glyph code point rendered by the icon font.
    pub icon: String,
    pub category_id: EntityId,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tasks: Vec<ProjectTask>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Project {
    /// Creates an unsaved project without category or relations.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            ..Self::default()
        }
    }

    /// Returns a copy stripped of every transient relation.
    pub fn to_row(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            category_id: self.category_id,
            category: None,
            tasks: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl Entity for Project {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
