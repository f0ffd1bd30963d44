use std::sync::Arc;

use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::store::EntryStore;
use crate::modules::entries::use_cases::errors::ApplicationError;
use crate::shared::auth::CallerIdentity;

pub struct ListEntriesHandler {
    store: Arc<dyn EntryStore>,
}

impl ListEntriesHandler {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, caller: &CallerIdentity) -> Result<Vec<Entry>, ApplicationError> {
        Ok(self.store.list_for_user(&caller.user_id).await?)
    }
}
