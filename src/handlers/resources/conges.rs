use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::store::Repository;

use super::crud;
use super::spec::COMPTEURS_CONGES;

pub async fn list(
    State(repo): State<Repository>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    crud::list(&COMPTEURS_CONGES, &repo, &params)
}

pub async fn show(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    crud::show(&COMPTEURS_CONGES, &repo, &id)
}

pub async fn create(
    State(repo): State<Repository>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    crud::create(&COMPTEURS_CONGES, &repo, body.map(|Json(v)| v))
}

pub async fn update(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    crud::update(&COMPTEURS_CONGES, &repo, &id, body.map(|Json(v)| v))
}

pub async fn remove(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    crud::remove(&COMPTEURS_CONGES, &repo, &id)
}
