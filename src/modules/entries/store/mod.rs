// Port for the entry table, without implementing it.
//
// Purpose
// - Describe what the use cases need from persistence as a trait.
//
// Responsibilities
// - Keep handlers independent of any concrete database by coding against
//   the trait; the store assigns ids and timestamps on insert.
//
// Boundaries
// - No SQL or file input/output here. Adapters live in the submodules.
//
// Testing guidance
// - Use the in-memory adapter for tests and local development.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::entries::core::category::Category;
use crate::modules::entries::core::entry::Entry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Insert shape. The adapter assigns id and both timestamps, which are equal
/// at creation.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: String,
    pub name: String,
    pub notes: String,
    pub category: Category,
}

/// Full-replacement update shape; partial field updates are not supported.
#[derive(Debug, Clone)]
pub struct EntryChanges {
    pub id: Uuid,
    pub name: String,
    pub notes: String,
    pub category: Category,
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries owned by `user_id`, newest first by creation time.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Entry>, StoreError>;

    async fn insert(&self, new: NewEntry) -> Result<Entry, StoreError>;

    /// Applies `changes` to the row matching both id and `user_id`, refreshing
    /// `updated_at`. `None` when no row matched; never an error for a missing
    /// or foreign id.
    async fn update(
        &self,
        user_id: &str,
        changes: EntryChanges,
    ) -> Result<Option<Entry>, StoreError>;

    /// Removes the row matching both id and `user_id`. Returns the number of
    /// rows deleted; zero is not an error.
    async fn delete(&self, user_id: &str, id: Uuid) -> Result<u64, StoreError>;
}

pub mod in_memory;
pub mod sqlite;
