//! Repository layer contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define one data access contract per entity kind.
//! - Keep identity assignment and association bookkeeping inside the stores.
//!
//! # Invariants
//! - Every store owns exactly one mutex; no lock is held across a call into
//!   another repository.
//! - Domain misses (unknown ids, unknown projects) are never errors. The
//!   only failure surfaced here is infrastructure (`LockPoisoned`).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod association;
pub mod category_repo;
pub mod entity_store;
pub mod project_repo;
pub mod registry;
pub mod tag_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository failure unrelated to the stored data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A writer panicked while holding the named store's lock.
    LockPoisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned(store) => write!(f, "store lock poisoned: {store}"),
        }
    }
}

impl Error for RepoError {}
