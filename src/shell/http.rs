use axum::{Router, routing::get};

use crate::modules::entries::use_cases::create_entry::inbound::http as create_http;
use crate::modules::entries::use_cases::delete_entry::inbound::http as delete_http;
use crate::modules::entries::use_cases::list_entries::inbound::http as list_http;
use crate::modules::entries::use_cases::update_entry::inbound::http as update_http;
use crate::shell::state::AppState;

/// All four operations live under the one resource path.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/entries",
            get(list_http::handle)
                .post(create_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}
