use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entries::store::EntryStore;
use crate::modules::entries::use_cases::errors::ApplicationError;
use crate::shared::auth::CallerIdentity;

pub const ID_REQUIRED: &str = "ID is required";

pub struct DeleteEntryHandler {
    store: Arc<dyn EntryStore>,
}

impl DeleteEntryHandler {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Delete is idempotent by contract: success whether or not a row
    /// matched, including malformed ids that cannot match anything.
    pub async fn handle(
        &self,
        caller: &CallerIdentity,
        id: Option<String>,
    ) -> Result<(), ApplicationError> {
        let id = id.unwrap_or_default();
        if id.trim().is_empty() {
            return Err(ApplicationError::Validation(ID_REQUIRED.to_string()));
        }

        let Ok(id) = Uuid::parse_str(id.trim()) else {
            return Ok(());
        };

        self.store.delete(&caller.user_id, id).await?;
        Ok(())
    }
}
