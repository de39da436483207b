use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::api::envelope;
use crate::error::ApiError;
use crate::store::Repository;

/// GET /:collection/:id
pub async fn show(
    State(repo): State<Repository>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    ensure_collection(&repo, &collection)?;
    let record = repo
        .find(&collection, &id)
        .ok_or_else(|| ApiError::not_found("Enregistrement introuvable"))?;
    Ok(envelope::success("Enregistrement trouvé", record))
}

/// PUT and PATCH /:collection/:id - both shallow-merge the body into the
/// existing record; there is no full-replace semantic.
pub async fn update(
    State(repo): State<Repository>,
    Path((collection, id)): Path<(String, String)>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    ensure_collection(&repo, &collection)?;
    let patch = body
        .and_then(|Json(value)| value.as_object().cloned())
        .ok_or_else(|| ApiError::bad_request("Corps de requête invalide"))?;

    let updated = repo
        .merge(&collection, &id, patch)?
        .ok_or_else(|| ApiError::not_found("Enregistrement introuvable"))?;
    Ok(envelope::success("Enregistrement mis à jour", updated))
}

/// DELETE /:collection/:id - remove and return the record.
pub async fn remove(
    State(repo): State<Repository>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    ensure_collection(&repo, &collection)?;
    let removed = repo
        .remove(&collection, &id)?
        .ok_or_else(|| ApiError::not_found("Enregistrement introuvable"))?;
    Ok(envelope::success("Enregistrement supprimé", removed))
}

fn ensure_collection(repo: &Repository, collection: &str) -> Result<(), ApiError> {
    if repo.has_collection(collection) {
        Ok(())
    } else {
        Err(ApiError::not_found("Collection inconnue"))
    }
}
