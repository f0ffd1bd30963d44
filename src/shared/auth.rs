// Caller identity resolution.
//
// Purpose
// - Treat authentication as an opaque provider issuing a stable user id.
//
// Responsibilities
// - Resolve the caller from request headers before any store access; every
//   operation goes through the `Caller` extractor, so an unresolvable
//   identity short-circuits to 401 without touching a handler.
//
// Boundaries
// - No session or token verification here. The default adapter trusts the
//   `x-user-id` header; a real deployment swaps in a provider-backed
//   implementation of `IdentityProvider`.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};

use crate::shell::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The resolved owning identity for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
}

pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> Option<CallerIdentity>;
}

/// Stand-in for the hosted auth provider: the stable identifier arrives in
/// the `x-user-id` header.
pub struct HeaderIdentity;

impl IdentityProvider for HeaderIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Option<CallerIdentity> {
        headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|user_id| !user_id.is_empty())
            .map(|user_id| CallerIdentity {
                user_id: user_id.to_string(),
            })
    }
}

pub struct Caller(pub CallerIdentity);

pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Unauthorized" })),
        )
            .into_response()
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Unauthorized;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .identity
            .resolve(&parts.headers)
            .map(Caller)
            .ok_or(Unauthorized)
    }
}
