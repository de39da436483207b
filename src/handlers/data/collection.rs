use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::envelope;
use crate::error::ApiError;
use crate::store::Repository;

/// GET /:collection - all records, in insertion order.
pub async fn list(
    State(repo): State<Repository>,
    Path(collection): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let records = repo
        .records(&collection)
        .ok_or_else(|| ApiError::not_found("Collection inconnue"))?;
    Ok(envelope::success(
        "Liste des enregistrements",
        Value::Array(records),
    ))
}

/// POST /:collection - append a record, assigning an id when none is given.
pub async fn create(
    State(repo): State<Repository>,
    Path(collection): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if !repo.has_collection(&collection) {
        return Err(ApiError::not_found("Collection inconnue"));
    }
    let record = body
        .and_then(|Json(value)| value.as_object().cloned())
        .ok_or_else(|| ApiError::bad_request("Corps de requête invalide"))?;

    let created = repo.insert(&collection, record)?;
    Ok((
        StatusCode::CREATED,
        envelope::success("Enregistrement créé", created),
    ))
}
