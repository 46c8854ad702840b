//! Generic list-backed store with integer identity assignment.
//!
//! # Responsibility
//! - Allocate ids for new records and append them in insertion order.
//! - Replace existing records in place on update.
//! - Remove records by id.
//!
//! # Invariants
//! - `next_id` starts at 1 and only grows; deleted ids are never reused.
//! - Allocate-and-append and find-and-replace run under one lock guard.
//! - Saving a nonzero id that is not stored is a silent no-op.

use super::{RepoError, RepoResult};
use crate::model::{Entity, EntityId};
use log::debug;
use std::sync::{Mutex, MutexGuard};

const FIRST_ID: EntityId = 1;

struct StoreState<T> {
    items: Vec<T>,
    next_id: EntityId,
}

/// Mutex-guarded ordered collection of one entity kind.
pub struct EntityStore<T: Entity> {
    name: &'static str,
    state: Mutex<StoreState<T>>,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store. `name` tags log events and lock errors.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(StoreState {
                items: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// Returns a copy of every record in insertion order.
    pub fn list(&self) -> RepoResult<Vec<T>> {
        Ok(self.lock()?.items.clone())
    }

    /// Returns copies of the records matching `predicate`, in insertion order.
    pub fn list_where<F>(&self, predicate: F) -> RepoResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        let state = self.lock()?;
        Ok(state
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect())
    }

    /// Returns the first record with `id`, if any.
    pub fn get(&self, id: EntityId) -> RepoResult<Option<T>> {
        let state = self.lock()?;
        Ok(state.items.iter().find(|item| item.id() == id).cloned())
    }

    /// Inserts or replaces `item` and returns its id.
    ///
    /// # Contract
    /// - Unassigned id: a fresh id is allocated, written into the record and
    ///   returned.
    /// - Known id: the stored record at the same position is overwritten.
    /// - Unknown nonzero id: nothing changes, the given id is still returned.
    pub fn save(&self, mut item: T) -> RepoResult<EntityId> {
        let mut state = self.lock()?;

        if item.is_new() {
            let id = state.next_id;
            state.next_id += 1;
            item.set_id(id);
            state.items.push(item);
            debug!(
                "event=entity_save module=repo status=ok store={} mode=insert id={}",
                self.name, id
            );
            return Ok(id);
        }

        let id = item.id();
        match state.items.iter().position(|stored| stored.id() == id) {
            Some(index) => {
                state.items[index] = item;
                debug!(
                    "event=entity_save module=repo status=ok store={} mode=update id={}",
                    self.name, id
                );
            }
            None => {
                debug!(
                    "event=entity_save module=repo status=skipped store={} mode=update id={} reason=unknown_id",
                    self.name, id
                );
            }
        }

        Ok(id)
    }

    /// Removes every record with `id` and returns how many were removed.
    pub fn delete(&self, id: EntityId) -> RepoResult<usize> {
        let mut state = self.lock()?;
        let before = state.items.len();
        state.items.retain(|item| item.id() != id);
        let removed = before - state.items.len();
        debug!(
            "event=entity_delete module=repo status=ok store={} id={} removed={}",
            self.name, id, removed
        );
        Ok(removed)
    }

    // Why: a poisoned guard means a writer panicked mid-mutation; callers get
    // a typed error instead of a second panic.
    fn lock(&self) -> RepoResult<MutexGuard<'_, StoreState<T>>> {
        self.state
            .lock()
            .map_err(|_| RepoError::LockPoisoned(self.name))
    }
}
