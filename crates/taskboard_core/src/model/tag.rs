//! Tag record, globally stored and linked to projects by association.

use super::{default_color, Entity, EntityId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: EntityId,
    pub title: String,
    #[serde(default = "default_color")]
    pub color: String,
    /// UI selection state. Never serialized and never meaningful to stores.
    #[serde(skip)]
    pub is_selected: bool,
}

impl Tag {
    /// Creates an unsaved, unselected tag.
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            color: color.into(),
            is_selected: false,
        }
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::new(String::new(), default_color())
    }
}

impl Entity for Tag {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
