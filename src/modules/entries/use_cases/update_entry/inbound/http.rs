use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::entries::use_cases::update_entry::command::UpdateEntry;
use crate::shared::auth::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEntryBody {
    pub id: Option<String>,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<UpdateEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateEntry {
        id: body.id,
        name: body.name,
        notes: body.notes,
        category: body.category,
    };

    // No match serializes as a 200 with a JSON null body, not a 404.
    match state.update_entry.handle(&caller, command).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => err.into_response(),
    }
}
