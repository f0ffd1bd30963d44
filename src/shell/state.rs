use std::sync::Arc;

use crate::modules::entries::store::EntryStore;
use crate::modules::entries::use_cases::create_entry::handler::CreateEntryHandler;
use crate::modules::entries::use_cases::delete_entry::handler::DeleteEntryHandler;
use crate::modules::entries::use_cases::list_entries::handler::ListEntriesHandler;
use crate::modules::entries::use_cases::update_entry::handler::UpdateEntryHandler;
use crate::shared::auth::IdentityProvider;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub list_entries: Arc<ListEntriesHandler>,
    pub create_entry: Arc<CreateEntryHandler>,
    pub update_entry: Arc<UpdateEntryHandler>,
    pub delete_entry: Arc<DeleteEntryHandler>,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn EntryStore>) -> Self {
        Self {
            identity,
            list_entries: Arc::new(ListEntriesHandler::new(store.clone())),
            create_entry: Arc::new(CreateEntryHandler::new(store.clone())),
            update_entry: Arc::new(UpdateEntryHandler::new(store.clone())),
            delete_entry: Arc::new(DeleteEntryHandler::new(store)),
        }
    }
}
