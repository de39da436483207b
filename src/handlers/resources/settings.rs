//! `/settings/:resource` dispatch: resolves the path segment against the
//! settings registry, then delegates to the shared engine. Unknown segments
//! are a 404 even when a same-named collection happens to exist.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::store::Repository;

use super::crud;
use super::spec::{settings_resource, ResourceSpec};

fn resolve(route: &str) -> Result<&'static ResourceSpec, ApiError> {
    settings_resource(route).ok_or_else(|| ApiError::not_found("Ressource inconnue"))
}

pub async fn list(
    State(repo): State<Repository>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    crud::list(resolve(&resource)?, &repo, &params)
}

pub async fn show(
    State(repo): State<Repository>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    crud::show(resolve(&resource)?, &repo, &id)
}

pub async fn create(
    State(repo): State<Repository>,
    Path(resource): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    crud::create(resolve(&resource)?, &repo, body.map(|Json(v)| v))
}

pub async fn update(
    State(repo): State<Repository>,
    Path((resource, id)): Path<(String, String)>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    crud::update(resolve(&resource)?, &repo, &id, body.map(|Json(v)| v))
}

pub async fn remove(
    State(repo): State<Repository>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    crud::remove(resolve(&resource)?, &repo, &id)
}
