//! Category repository contract and in-memory implementation.

use super::entity_store::EntityStore;
use super::RepoResult;
use crate::model::category::Category;
use crate::model::EntityId;

/// Repository interface for categories.
pub trait CategoryRepository: Send + Sync {
    fn list(&self) -> RepoResult<Vec<Category>>;
    fn get(&self, id: EntityId) -> RepoResult<Option<Category>>;
    /// Inserts (id 0) or replaces (known id) and returns the id.
    fn save(&self, category: &Category) -> RepoResult<EntityId>;
    /// Returns the number of removed rows (0 or 1).
    fn delete(&self, category: &Category) -> RepoResult<usize>;
}

pub struct InMemoryCategoryRepository {
    store: EntityStore<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new("categories"),
        }
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn list(&self) -> RepoResult<Vec<Category>> {
        self.store.list()
    }

    fn get(&self, id: EntityId) -> RepoResult<Option<Category>> {
        self.store.get(id)
    }

    fn save(&self, category: &Category) -> RepoResult<EntityId> {
        self.store.save(category.clone())
    }

    fn delete(&self, category: &Category) -> RepoResult<usize> {
        self.store.delete(category.id)
    }
}
