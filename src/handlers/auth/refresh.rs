// POST /refresh - rotate a session's token pair
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth;
use crate::error::ApiError;
use crate::store::Repository;

#[derive(Debug, Default, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Rotate both tokens of the session matching `refresh_token`. The session
/// record is overwritten in place, so the previous access token stops
/// resolving immediately: at most one valid pair per session.
pub async fn refresh(
    State(repo): State<Repository>,
    body: Option<Json<RefreshRequest>>,
) -> Result<Json<Value>, ApiError> {
    let token = body
        .map(|Json(b)| b)
        .unwrap_or_default()
        .refresh_token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Jeton de rafraîchissement requis"))?;

    let access_token = auth::issue_token();
    let refresh_token = auth::issue_token();

    let rotated = repo.update_where(
        "sessions",
        |session| session.get("refresh_token").and_then(Value::as_str) == Some(token.as_str()),
        |fields| {
            fields.insert("access_token".to_string(), Value::from(access_token.clone()));
            fields.insert(
                "refresh_token".to_string(),
                Value::from(refresh_token.clone()),
            );
            fields.insert(
                "updatedAt".to_string(),
                Value::from(Utc::now().to_rfc3339()),
            );
        },
    )?;

    if rotated.is_none() {
        return Err(ApiError::unauthorized("Jeton de rafraîchissement invalide"));
    }

    Ok(Json(json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
    })))
}
