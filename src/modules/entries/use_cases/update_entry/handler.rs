use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entries::core::category::{Category, UnknownCategory};
use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::store::{EntryChanges, EntryStore};
use crate::modules::entries::use_cases::errors::ApplicationError;
use crate::modules::entries::use_cases::update_entry::command::UpdateEntry;
use crate::shared::auth::CallerIdentity;

pub const ID_NAME_AND_CATEGORY_REQUIRED: &str = "ID, name, and category are required";

pub struct UpdateEntryHandler {
    store: Arc<dyn EntryStore>,
}

impl UpdateEntryHandler {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// `Ok(None)` covers both a missing row and a row owned by someone else;
    /// neither is surfaced as an error.
    pub async fn handle(
        &self,
        caller: &CallerIdentity,
        command: UpdateEntry,
    ) -> Result<Option<Entry>, ApplicationError> {
        let id = command.id.unwrap_or_default();
        let name = command.name.unwrap_or_default();
        let category = command.category.unwrap_or_default();
        if id.trim().is_empty() || name.trim().is_empty() || category.trim().is_empty() {
            return Err(ApplicationError::Validation(
                ID_NAME_AND_CATEGORY_REQUIRED.to_string(),
            ));
        }

        let category: Category = category
            .parse()
            .map_err(|err: UnknownCategory| ApplicationError::Validation(err.to_string()))?;

        // An id that is not a uuid matches no row by construction.
        let Ok(id) = Uuid::parse_str(id.trim()) else {
            return Ok(None);
        };

        let updated = self
            .store
            .update(
                &caller.user_id,
                EntryChanges {
                    id,
                    name,
                    notes: command.notes.unwrap_or_default(),
                    category,
                },
            )
            .await?;
        Ok(updated)
    }
}
