use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::entries::use_cases::create_entry::command::CreateEntry;
use crate::shared::auth::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEntryBody {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<CreateEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateEntry {
        name: body.name,
        notes: body.notes,
        category: body.category,
    };

    match state.create_entry.handle(&caller, command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(err) => err.into_response(),
    }
}
