// POST /login - exchange credentials for a session token pair
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Session};
use crate::error::ApiError;
use crate::store::Repository;

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Authenticate by exact match on `email` and `password` against the `users`
/// collection. Credentials are stored and compared in plaintext; a fresh
/// session record is appended on success.
pub async fn login(
    State(repo): State<Repository>,
    body: Option<Json<LoginRequest>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let (email, password) = match (non_empty(body.email), non_empty(body.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::bad_request("Email et mot de passe requis")),
    };

    let user = repo
        .find_where("users", |u| {
            u.get("email").and_then(Value::as_str) == Some(email.as_str())
                && u.get("password").and_then(Value::as_str) == Some(password.as_str())
        })
        .ok_or_else(|| ApiError::unauthorized("Identifiants invalides"))?;

    let session = Session::issue(user.get("id").cloned().unwrap_or(Value::Null));
    let record = serde_json::to_value(&session)?
        .as_object()
        .cloned()
        .unwrap_or_default();
    repo.insert("sessions", record)?;

    tracing::info!(email = %email, "login");

    Ok(Json(json!({
        "access_token": session.access_token,
        "refresh_token": session.refresh_token,
        "user": auth::user_projection(&user),
        "role": auth::default_role(),
        "full_name": user.get("full_name").cloned().unwrap_or(Value::Null),
    })))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
