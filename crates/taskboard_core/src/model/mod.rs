//! Domain model for projects and the entities hanging off them.
//!
//! # Responsibility
//! - Define the plain records stored by the repository layer.
//! - Provide the identity contract (`Entity`) shared by every store.
//!
//! # Invariants
//! - `UNASSIGNED_ID` (0) marks a record that has never been saved.
//! - Assigned ids are strictly positive and owned by the storing repository.
//! - Relational fields on `Project` are transient; stores never persist them.

pub mod category;
pub mod project;
pub mod tag;
pub mod task;

/// Integer identity assigned by the owning store.
pub type EntityId = i64;

/// Sentinel id for records that have not been saved yet.
pub const UNASSIGNED_ID: EntityId = 0;

/// Identity contract for records kept in an `EntityStore`.
pub trait Entity: Clone {
    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);

    /// Returns whether the record still carries the unassigned sentinel.
    fn is_new(&self) -> bool {
        self.id() == UNASSIGNED_ID
    }
}

/// Default display color for categories and tags.
pub const DEFAULT_COLOR: &str = "#FF0000";

pub(crate) fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
