//! Category record referenced by projects through `category_id`.

use super::{default_color, Entity, EntityId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Grouping label owned independently of any project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub title: String,
    /// Hex color string; stored as given, never validated.
    #[serde(default = "default_color")]
    pub color: String,
}

impl Category {
    /// Creates an unsaved category.
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            color: color.into(),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: String::new(),
            color: default_color(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

impl Entity for Category {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
