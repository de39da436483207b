pub mod auth;
pub mod data;
pub mod resources;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::envelope;
use crate::store::Repository;

/// GET / - service directory.
pub async fn root() -> Json<Value> {
    envelope::success(
        "API SIRH",
        json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "auth": "/login, /refresh, /me",
                "settings": "/settings/:resource[/:id], /settings/departements/:id/activate|deactivate",
                "resources": "/employees, /avenants, /compteurs-conges",
                "data": "/:collection[/:id]",
            },
        }),
    )
}

/// GET /health
pub async fn health(State(repo): State<Repository>) -> Json<Value> {
    envelope::success(
        "OK",
        json!({
            "status": "ok",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "collections": repo.collection_names().len(),
        }),
    )
}
