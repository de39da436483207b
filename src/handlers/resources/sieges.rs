//! Siege (headquarters) handlers. Reads are enriched with the group tree:
//! each siege carries its `groupes`, each groupe its `membres`, each membre
//! an `employe` projection. The joins are recomputed on every request by
//! linear scans over the referenced collections; nothing is materialized.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::api::envelope;
use crate::error::ApiError;
use crate::query::{self, ListQuery};
use crate::store::Repository;

use super::crud;
use super::spec::SIEGES;

/// GET /settings/sieges - paginated list, each row enriched with its groups.
pub async fn list(
    State(repo): State<Repository>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let records = repo.records(SIEGES.collection).unwrap_or_default();
    let mut page = query::evaluate(records, &ListQuery::from_map(&params));
    for siege in &mut page.records {
        enrich(&repo, siege);
    }
    Ok(envelope::page(&SIEGES.list_message(), &page))
}

/// GET /settings/sieges/:id - one siege with its full group tree.
pub async fn show(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut siege = repo
        .find(SIEGES.collection, &id)
        .ok_or_else(|| ApiError::not_found(SIEGES.not_found_message()))?;
    enrich(&repo, &mut siege);
    Ok(envelope::success(&SIEGES.found_message(), siege))
}

// Writes go through the shared engine, without enrichment.

pub async fn create(
    State(repo): State<Repository>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    crud::create(&SIEGES, &repo, body.map(|Json(v)| v))
}

pub async fn update(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    crud::update(&SIEGES, &repo, &id, body.map(|Json(v)| v))
}

pub async fn remove(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    crud::remove(&SIEGES, &repo, &id)
}

fn enrich(repo: &Repository, siege: &mut Value) {
    let siege_id = siege.get("id").cloned().unwrap_or(Value::Null);
    let groupes = groupes_of(repo, &siege_id);
    if let Some(fields) = siege.as_object_mut() {
        fields.insert("groupes".to_string(), Value::Array(groupes));
    }
}

fn groupes_of(repo: &Repository, siege_id: &Value) -> Vec<Value> {
    let groupes = repo.records("groupes").unwrap_or_default();
    groupes
        .into_iter()
        .filter(|groupe| groupe.get("siege_id") == Some(siege_id))
        .map(|mut groupe| {
            let groupe_id = groupe.get("id").cloned().unwrap_or(Value::Null);
            let membres = membres_of(repo, &groupe_id);
            if let Some(fields) = groupe.as_object_mut() {
                fields.insert("membres".to_string(), Value::Array(membres));
            }
            groupe
        })
        .collect()
}

fn membres_of(repo: &Repository, groupe_id: &Value) -> Vec<Value> {
    let membres = repo.records("membres").unwrap_or_default();
    membres
        .into_iter()
        .filter(|membre| membre.get("groupe_id") == Some(groupe_id))
        .map(|mut membre| {
            let employe = membre
                .get("employe_id")
                .and_then(|employe_id| {
                    repo.find_where("employees", |e| e.get("id") == Some(employe_id))
                })
                .map(|employe| employe_projection(&employe))
                .unwrap_or(Value::Null);
            if let Some(fields) = membre.as_object_mut() {
                fields.insert("employe".to_string(), employe);
            }
            membre
        })
        .collect()
}

/// Display projection of an employee attached to a group member.
fn employe_projection(employe: &Value) -> Value {
    json!({
        "id": employe.get("id").cloned().unwrap_or(Value::Null),
        "nom": employe.get("nom").cloned().unwrap_or(Value::Null),
        "prenom": employe.get("prenom").cloned().unwrap_or(Value::Null),
        "email": employe.get("email").cloned().unwrap_or(Value::Null),
    })
}
