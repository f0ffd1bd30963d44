use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shared::auth::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteEntryParams {
    pub id: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteEntryResponse {
    pub success: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Query(params): Query<DeleteEntryParams>,
) -> impl IntoResponse {
    match state.delete_entry.handle(&caller, params.id).await {
        Ok(()) => Json(DeleteEntryResponse { success: true }).into_response(),
        Err(err) => err.into_response(),
    }
}
