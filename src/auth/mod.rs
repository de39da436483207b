use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How long a session nominally lives. The expiry is stored on the session
/// for clients; token lookups match on the token value only and never check
/// it.
pub const SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Opaque bearer token: a random base-36 fragment concatenated with the
/// current time in base-36. NOT cryptographically secure and collisions are
/// possible; acceptable only for a development mock.
pub fn issue_token() -> String {
    let fragment = to_base36(rand::random::<u64>());
    let stamp = to_base36(Utc::now().timestamp_millis() as u64);
    format!("{}{}", fragment, stamp)
}

/// A server-held session binding a user to its current token pair. Stored as
/// a plain record in the `sessions` collection; the field names below are
/// the wire names the front-end expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(rename = "userId")]
    pub user_id: Value,
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl Session {
    /// Open a fresh session for `user_id` with a newly issued token pair.
    pub fn issue(user_id: Value) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            access_token: issue_token(),
            refresh_token: issue_token(),
            user_id,
            expires_at: now.timestamp_millis() + SESSION_TTL_MS,
            updated_at: now.to_rfc3339(),
        }
    }
}

/// The hard-coded role returned on login and used as fallback when a user
/// record carries no roles of its own.
pub fn default_role() -> Value {
    json!({"code": "ADMIN", "libelle": "Administrateur"})
}

/// First entry of the user's `roles` array, falling back to [`default_role`].
pub fn first_role(user: &Value) -> Value {
    user.get("roles")
        .and_then(Value::as_array)
        .and_then(|roles| roles.first())
        .cloned()
        .unwrap_or_else(default_role)
}

/// Public projection of a user record: everything except the password.
pub fn user_projection(user: &Value) -> Value {
    json!({
        "id": user.get("id").cloned().unwrap_or(Value::Null),
        "email": user.get("email").cloned().unwrap_or(Value::Null),
        "name": user.get("name").cloned().unwrap_or(Value::Null),
        "full_name": user.get("full_name").cloned().unwrap_or(Value::Null),
    })
}
