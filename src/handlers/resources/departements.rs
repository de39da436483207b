//! Departement handlers: regular CRUD through the shared engine plus the
//! lifecycle sub-routes, a two-state toggle on `is_active`
//! (`Active ⇄ Inactive`, no other transitions).

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{Map, Value};

use crate::api::envelope;
use crate::error::ApiError;
use crate::store::Repository;

use super::crud;
use super::spec::DEPARTEMENTS;

pub async fn list(
    State(repo): State<Repository>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    crud::list(&DEPARTEMENTS, &repo, &params)
}

pub async fn show(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    crud::show(&DEPARTEMENTS, &repo, &id)
}

pub async fn create(
    State(repo): State<Repository>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    crud::create(&DEPARTEMENTS, &repo, body.map(|Json(v)| v))
}

pub async fn update(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    crud::update(&DEPARTEMENTS, &repo, &id, body.map(|Json(v)| v))
}

pub async fn remove(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    crud::remove(&DEPARTEMENTS, &repo, &id)
}

/// PATCH /settings/departements/:id/activate
pub async fn activate(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    toggle(&repo, &id, true)
}

/// PATCH /settings/departements/:id/deactivate
pub async fn deactivate(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    toggle(&repo, &id, false)
}

fn toggle(repo: &Repository, id: &str, active: bool) -> Result<Json<Value>, ApiError> {
    let mut patch = Map::new();
    patch.insert("is_active".to_string(), Value::Bool(active));
    patch.insert(
        "updated_at".to_string(),
        Value::from(Utc::now().to_rfc3339()),
    );

    let updated = repo
        .merge(DEPARTEMENTS.collection, id, patch)?
        .ok_or_else(|| ApiError::not_found(DEPARTEMENTS.not_found_message()))?;

    let message = if active {
        "Département activé"
    } else {
        "Département désactivé"
    };
    Ok(envelope::success(message, updated))
}
