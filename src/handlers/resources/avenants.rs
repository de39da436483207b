use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::store::Repository;

use super::crud;
use super::spec::AVENANTS;

pub async fn list(
    State(repo): State<Repository>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    crud::list(&AVENANTS, &repo, &params)
}

pub async fn show(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    crud::show(&AVENANTS, &repo, &id)
}

pub async fn create(
    State(repo): State<Repository>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    crud::create(&AVENANTS, &repo, body.map(|Json(v)| v))
}

pub async fn update(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    crud::update(&AVENANTS, &repo, &id, body.map(|Json(v)| v))
}

pub async fn remove(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    crud::remove(&AVENANTS, &repo, &id)
}
