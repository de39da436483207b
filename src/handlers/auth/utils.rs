use axum::http::HeaderMap;

use crate::error::ApiError;

/// Pull the bearer token out of the `Authorization` header. A literal
/// `"Bearer "` prefix is stripped; a header without it is used verbatim.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| ApiError::unauthorized("Token manquant"))?;

    let raw = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Token manquant"))?;

    Ok(raw.strip_prefix("Bearer ").unwrap_or(raw).to_string())
}
