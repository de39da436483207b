use axum::Json;
use serde_json::{json, Value};

use crate::query::Page;

/// Uniform success envelope: `{status: "success", message, data}`.
pub fn success(message: &str, data: Value) -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": message,
        "data": data,
    }))
}

/// Success envelope for a paginated list, extended with the DataTables
/// counters (`recordsTotal` before filters, `recordsFiltered` after).
pub fn page(message: &str, page: &Page) -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": message,
        "data": page.records,
        "recordsTotal": page.records_total,
        "recordsFiltered": page.records_filtered,
    }))
}
