// Offline notebook view model.
//
// Purpose
// - Locally persisted mirror of the entry list: the same four mutations as
//   the API, performed against local storage instead of the network, plus
//   the derived views the entry screen renders from.
//
// Every mutation is a synchronous read-modify-write that rewrites the whole
// list; derived views are recomputed on demand and never persisted.

use chrono::Utc;
use uuid::Uuid;

use crate::client::csv;
use crate::client::storage::CacheStorage;
use crate::modules::entries::core::category::Category;
use crate::modules::entries::core::entry::Entry;

pub struct Notebook {
    owner: String,
    entries: Vec<Entry>,
    storage: Box<dyn CacheStorage>,
}

impl Notebook {
    /// Reads the persisted list. A missing, unreadable, or unparsable slot
    /// degrades to an empty notebook; load never fails.
    pub fn load(owner: impl Into<String>, storage: Box<dyn CacheStorage>) -> Self {
        let entries = match storage.load() {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "notebook load failed, starting empty");
                Vec::new()
            }
        };
        Self {
            owner: owner.into(),
            entries,
            storage,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends a new entry (newest first by insertion, no re-sort).
    /// A name that trims to empty is rejected as a no-op.
    pub fn create(&mut self, name: &str, notes: &str, category: Category) -> Option<&Entry> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let now = Utc::now();
        let entry = Entry {
            id: Uuid::now_v7(),
            user_id: self.owner.clone(),
            name: name.to_string(),
            notes: notes.trim().to_string(),
            category,
            created_at: now,
            updated_at: now,
        };
        self.entries.insert(0, entry);
        self.persist();
        self.entries.first()
    }

    /// Replaces name, notes, and category in place; `created_at` and list
    /// order are untouched. Returns false for an absent id or a blank name.
    pub fn update(&mut self, id: Uuid, name: &str, notes: &str, category: Category) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        entry.name = name.to_string();
        entry.notes = notes.trim().to_string();
        entry.category = category;
        entry.updated_at = Utc::now();
        self.persist();
        true
    }

    /// Removes by id; a no-op when absent.
    pub fn delete(&mut self, id: Uuid) {
        self.entries.retain(|entry| entry.id != id);
        self.persist();
    }

    /// The visible subset: entries matching the selected category (or all)
    /// AND a case-insensitive substring match over name or notes.
    pub fn visible(&self, filter: Option<Category>, search: &str) -> Vec<&Entry> {
        let needle = search.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                let matches_filter = filter.is_none_or(|category| entry.category == category);
                let matches_search = needle.is_empty()
                    || entry.name.to_lowercase().contains(&needle)
                    || entry.notes.to_lowercase().contains(&needle);
                matches_filter && matches_search
            })
            .collect()
    }

    /// Per-category counts for the filter controls, in declaration order;
    /// zero-count categories are omitted.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let count = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == category)
                    .count();
                (count > 0).then_some((category, count))
            })
            .collect()
    }

    /// CSV of the currently filtered view, not the full list.
    pub fn export_csv(&self, filter: Option<Category>, search: &str) -> String {
        csv::to_csv(self.visible(filter, search))
    }

    fn persist(&self) {
        // Storage failures degrade to an unsynced session, never a crash.
        match serde_json::to_string(&self.entries) {
            Ok(raw) => {
                if let Err(err) = self.storage.save(&raw) {
                    tracing::warn!(error = %err, "notebook persist failed");
                }
            }
            Err(err) => tracing::warn!(error = %err, "notebook serialize failed"),
        }
    }
}
