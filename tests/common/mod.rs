#![allow(dead_code)]

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use sirh_api::store::{Document, Repository};

/// Router plus the repository behind it, so tests can both drive the HTTP
/// surface and inspect or seed the document directly.
pub fn test_context() -> (Router, Repository) {
    let repo = Repository::in_memory(seed_document());
    (sirh_api::app(repo.clone()), repo)
}

pub fn test_app() -> Router {
    test_context().0
}

/// A small but representative document. `users` is deliberately absent so
/// the bootstrap admin (admin@example.com / password) is the only account.
pub fn seed_document() -> Document {
    Document::from_value(json!({
        "employees": [
            {"id": 1, "nom": "Durand", "prenom": "Anne", "email": "a.durand@example.com", "departement_id": 10},
            {"id": 2, "nom": "Dupont", "prenom": "Benoît", "email": "b.dupont@example.com", "departement_id": 20},
            {"id": 3, "nom": "Bernard", "prenom": "Chloé", "email": "c.bernard@example.com", "departement_id": 10},
            {"id": 4, "nom": "Martin", "prenom": "David", "departement_id": 20},
            {"id": 5, "nom": "Dubois", "prenom": "Emma", "email": "e.dubois@example.com", "departement_id": 10}
        ],
        "contrats": [
            {"id": 1, "employe_id": 1, "type": "CDI"},
            {"id": 2, "employe_id": 2, "type": "CDD"}
        ],
        "avenants": [],
        "compteurs_conges": [
            {"id": 1, "employe_id": 1, "solde": 25},
            {"id": 2, "employe_id": 2, "solde": 12}
        ],
        "departements": [
            {"id": 10, "code": "COMPTA", "libelle": "Comptabilité", "is_active": true},
            {"id": 20, "code": "IT", "libelle": "Informatique", "is_active": false}
        ],
        "parametres_generaux": [
            {"id": 1, "type": "DEVISE", "valeur": "EUR", "is_required": true},
            {"id": 2, "type": "LANGUE", "valeur": "fr", "is_required": false}
        ],
        "canaux": [],
        "sieges": [
            {"id": 1, "code": "PAR", "libelle": "Paris"},
            {"id": 2, "code": "LYO", "libelle": "Lyon"}
        ],
        "groupes": [
            {"id": 10, "siege_id": 1, "libelle": "Paie"},
            {"id": 11, "siege_id": 1, "libelle": "Recrutement"},
            {"id": 12, "siege_id": 2, "libelle": "Paie"}
        ],
        "membres": [
            {"id": 100, "groupe_id": 10, "employe_id": 1},
            {"id": 101, "groupe_id": 10, "employe_id": 2},
            {"id": 102, "groupe_id": 12, "employe_id": 3}
        ]
    }))
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    send_with_token(app, method, uri, body, None).await
}

pub async fn send_with_token(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

/// Login as the bootstrap admin and return (access_token, refresh_token).
pub async fn login_admin(app: &Router) -> Result<(String, String)> {
    let (status, body) = send(
        app,
        Method::POST,
        "/login",
        Some(json!({"email": "admin@example.com", "password": "password"})),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {}", body);
    Ok((
        body["access_token"].as_str().unwrap_or_default().to_string(),
        body["refresh_token"].as_str().unwrap_or_default().to_string(),
    ))
}
