// In memory entry store.
//
// Purpose
// - Exercise the use cases without a database.
//
// Responsibilities
// - Keep rows in a map keyed by entry id.
// - Assign ids and timestamps the way the durable adapter does.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::store::{EntryChanges, EntryStore, NewEntry, StoreError};

#[derive(Default)]
pub struct InMemoryEntryStore {
    rows: RwLock<HashMap<Uuid, Entry>>,
    is_offline: bool,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entry store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Entry>, StoreError> {
        self.check_online()?;

        let guard = self.rows.read().await;
        let mut items: Vec<Entry> = guard
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();

        // Uuid v7 is time-ordered, so the id breaks created_at ties.
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items)
    }

    async fn insert(&self, new: NewEntry) -> Result<Entry, StoreError> {
        self.check_online()?;

        let now = Utc::now();
        let entry = Entry {
            id: Uuid::now_v7(),
            user_id: new.user_id,
            name: new.name,
            notes: new.notes,
            category: new.category,
            created_at: now,
            updated_at: now,
        };

        let mut guard = self.rows.write().await;
        guard.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn update(
        &self,
        user_id: &str,
        changes: EntryChanges,
    ) -> Result<Option<Entry>, StoreError> {
        self.check_online()?;

        let mut guard = self.rows.write().await;
        match guard.get_mut(&changes.id) {
            Some(entry) if entry.user_id == user_id => {
                entry.name = changes.name;
                entry.notes = changes.notes;
                entry.category = changes.category;
                entry.updated_at = Utc::now();
                Ok(Some(entry.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<u64, StoreError> {
        self.check_online()?;

        let mut guard = self.rows.write().await;
        match guard.get(&id) {
            Some(entry) if entry.user_id == user_id => {
                guard.remove(&id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}
