//! Shared CRUD engine behind every descriptor-configured resource. The
//! handlers in the sibling modules are thin: they pick a [`ResourceSpec`]
//! and delegate here.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{Map, Number, Value};

use crate::api::envelope;
use crate::error::ApiError;
use crate::query::{self, ListQuery};
use crate::store::{path_id_value, Repository};

use super::spec::ResourceSpec;

const REQUIRED_FLAG_LOCKED: &str =
    "Ce paramètre est requis et ne peut pas être modifié ou supprimé";

/// GET list with filtering, sorting and pagination. An absent collection is
/// served as empty so a fresh data file works without pre-seeded keys.
pub fn list(
    spec: &ResourceSpec,
    repo: &Repository,
    params: &HashMap<String, String>,
) -> Result<Json<Value>, ApiError> {
    let records = repo.records(spec.collection).unwrap_or_default();
    let page = query::evaluate(records, &ListQuery::from_map(params));
    Ok(envelope::page(&spec.list_message(), &page))
}

pub fn show(spec: &ResourceSpec, repo: &Repository, id: &str) -> Result<Json<Value>, ApiError> {
    let record = repo
        .find(spec.collection, id)
        .ok_or_else(|| ApiError::not_found(spec.not_found_message()))?;
    Ok(envelope::success(&spec.found_message(), record))
}

pub fn create(
    spec: &ResourceSpec,
    repo: &Repository,
    body: Option<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut record = body
        .and_then(|value| value.as_object().cloned())
        .ok_or_else(|| ApiError::bad_request("Corps de requête invalide"))?;

    normalize(spec, &mut record)?;
    check_required(spec, &record, true)?;
    check_unique(spec, repo, &record, None)?;

    let now = Utc::now().to_rfc3339();
    record
        .entry("created_at".to_string())
        .or_insert_with(|| Value::from(now.clone()));
    record
        .entry("updated_at".to_string())
        .or_insert_with(|| Value::from(now));

    let created = repo.insert(spec.collection, record)?;
    Ok((
        StatusCode::CREATED,
        envelope::success(&spec.created_message(), created),
    ))
}

pub fn update(
    spec: &ResourceSpec,
    repo: &Repository,
    id: &str,
    body: Option<Value>,
) -> Result<Json<Value>, ApiError> {
    let existing = repo
        .find(spec.collection, id)
        .ok_or_else(|| ApiError::not_found(spec.not_found_message()))?;
    guard_required_flag(spec, &existing)?;

    let mut patch = body
        .and_then(|value| value.as_object().cloned())
        .ok_or_else(|| ApiError::bad_request("Corps de requête invalide"))?;

    normalize(spec, &mut patch)?;
    check_required(spec, &patch, false)?;
    check_unique(spec, repo, &patch, Some(id))?;

    patch.insert(
        "updated_at".to_string(),
        Value::from(Utc::now().to_rfc3339()),
    );

    let updated = repo
        .merge(spec.collection, id, patch)?
        .ok_or_else(|| ApiError::not_found(spec.not_found_message()))?;
    Ok(envelope::success(&spec.updated_message(), updated))
}

pub fn remove(spec: &ResourceSpec, repo: &Repository, id: &str) -> Result<Json<Value>, ApiError> {
    let existing = repo
        .find(spec.collection, id)
        .ok_or_else(|| ApiError::not_found(spec.not_found_message()))?;
    guard_required_flag(spec, &existing)?;

    let removed = repo
        .remove(spec.collection, id)?
        .ok_or_else(|| ApiError::not_found(spec.not_found_message()))?;
    Ok(envelope::success(&spec.deleted_message(), removed))
}

/// Trim every top-level string and coerce the descriptor's numeric fields.
fn normalize(spec: &ResourceSpec, record: &mut Map<String, Value>) -> Result<(), ApiError> {
    for value in record.values_mut() {
        if let Value::String(text) = value {
            *value = Value::from(text.trim().to_string());
        }
    }

    for field in spec.numeric {
        let Some(value) = record.get(*field) else {
            continue;
        };
        if value.is_null() || value.is_number() {
            continue;
        }
        let coerced = value
            .as_str()
            .and_then(parse_number)
            .ok_or_else(|| {
                ApiError::bad_request(format!("Valeur numérique invalide pour le champ {}", field))
            })?;
        record.insert((*field).to_string(), Value::Number(coerced));
    }
    Ok(())
}

fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(integer) = raw.trim().parse::<i64>() {
        return Some(Number::from(integer));
    }
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .and_then(Number::from_f64)
}

/// On create every required field must be present and non-empty; on update
/// only the fields the patch actually carries are held to that bar, so a
/// merge cannot blank out a required field.
fn check_required(
    spec: &ResourceSpec,
    record: &Map<String, Value>,
    require_presence: bool,
) -> Result<(), ApiError> {
    for field in spec.required {
        let value = record.get(*field);
        let missing = match value {
            None => require_presence,
            Some(Value::Null) => true,
            Some(Value::String(text)) => text.is_empty(),
            Some(_) => false,
        };
        if missing {
            return Err(ApiError::bad_request(format!(
                "Le champ {} est requis",
                field
            )));
        }
    }
    Ok(())
}

fn check_unique(
    spec: &ResourceSpec,
    repo: &Repository,
    record: &Map<String, Value>,
    exclude_id: Option<&str>,
) -> Result<(), ApiError> {
    let Some(unique) = &spec.unique else {
        return Ok(());
    };
    let Some(candidate) = record.get(unique.field).and_then(Value::as_str) else {
        return Ok(());
    };

    let excluded = exclude_id.map(path_id_value);
    let duplicate = repo.find_where(spec.collection, |other| {
        if excluded.as_ref().is_some_and(|id| other.get("id") == Some(id)) {
            return false;
        }
        other
            .get(unique.field)
            .and_then(Value::as_str)
            .is_some_and(|existing| existing.eq_ignore_ascii_case(candidate))
    });

    if duplicate.is_some() {
        return Err(ApiError::conflict(unique.conflict));
    }
    Ok(())
}

fn guard_required_flag(spec: &ResourceSpec, record: &Value) -> Result<(), ApiError> {
    if spec.protect_required_flag && record.get("is_required") == Some(&Value::Bool(true)) {
        return Err(ApiError::forbidden(REQUIRED_FLAG_LOCKED));
    }
    Ok(())
}
