pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod store;

use axum::routing::get;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Repository;

/// Assemble the full router around an injected repository. Specific routes
/// are registered alongside the generic collection fallback; the router
/// prefers static segments over captures, so `/login` or `/settings/...`
/// never fall through to `/:collection`.
pub fn app(repo: Repository) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(handlers::auth::routes())
        .merge(handlers::resources::routes())
        .merge(handlers::data::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}
