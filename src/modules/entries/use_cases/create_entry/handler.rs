use std::sync::Arc;

use crate::modules::entries::core::category::{Category, UnknownCategory};
use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::store::{EntryStore, NewEntry};
use crate::modules::entries::use_cases::create_entry::command::CreateEntry;
use crate::modules::entries::use_cases::errors::ApplicationError;
use crate::shared::auth::CallerIdentity;

pub const NAME_AND_CATEGORY_REQUIRED: &str = "Name and category are required";

pub struct CreateEntryHandler {
    store: Arc<dyn EntryStore>,
}

impl CreateEntryHandler {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        caller: &CallerIdentity,
        command: CreateEntry,
    ) -> Result<Entry, ApplicationError> {
        let name = command.name.unwrap_or_default();
        let category = command.category.unwrap_or_default();
        if name.trim().is_empty() || category.trim().is_empty() {
            return Err(ApplicationError::Validation(
                NAME_AND_CATEGORY_REQUIRED.to_string(),
            ));
        }

        // The category set is closed; unknown labels fail validation here
        // rather than landing in the store as free text.
        let category: Category = category
            .parse()
            .map_err(|err: UnknownCategory| ApplicationError::Validation(err.to_string()))?;

        let created = self
            .store
            .insert(NewEntry {
                user_id: caller.user_id.clone(),
                name,
                notes: command.notes.unwrap_or_default(),
                category,
            })
            .await?;
        Ok(created)
    }
}
