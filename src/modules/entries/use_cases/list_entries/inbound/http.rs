use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::auth::Caller;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Caller(caller): Caller) -> impl IntoResponse {
    match state.list_entries.handle(&caller).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => err.into_response(),
    }
}
