// GET /me - resolve the bearer token to its user
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::auth;
use crate::error::ApiError;
use crate::store::Repository;

use super::utils::bearer_token;

/// Look the access token up in the `sessions` collection and project the
/// owning user. Lookups match on the token value only; the session's
/// `expiresAt` is recorded at login but never consulted here.
pub async fn whoami(
    State(repo): State<Repository>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;

    let session = repo
        .find_where("sessions", |s| {
            s.get("access_token").and_then(Value::as_str) == Some(token.as_str())
        })
        .ok_or_else(|| ApiError::unauthorized("Token invalide"))?;

    let user_id = session.get("userId").cloned().unwrap_or(Value::Null);
    let user = repo
        .find_where("users", |u| u.get("id") == Some(&user_id))
        .ok_or_else(|| ApiError::not_found("Utilisateur introuvable"))?;

    Ok(Json(json!({
        "user": auth::user_projection(&user),
        "role": auth::first_role(&user),
    })))
}
