pub mod avenants;
pub mod conges;
pub mod crud;
pub mod departements;
pub mod employees;
pub mod settings;
pub mod sieges;
pub mod spec;

use axum::routing::{get, patch};
use axum::Router;

use crate::store::Repository;

pub fn routes() -> Router<Repository> {
    Router::new()
        // Domain resources at the root
        .route(
            "/employees",
            get(employees::list).post(employees::create),
        )
        .route(
            "/employees/:id",
            get(employees::show)
                .put(employees::update)
                .delete(employees::remove),
        )
        .route("/avenants", get(avenants::list).post(avenants::create))
        .route(
            "/avenants/:id",
            get(avenants::show)
                .put(avenants::update)
                .delete(avenants::remove),
        )
        .route(
            "/compteurs-conges",
            get(conges::list).post(conges::create),
        )
        .route(
            "/compteurs-conges/:id",
            get(conges::show).put(conges::update).delete(conges::remove),
        )
        // Sieges override the settings dispatch for join-enriched reads
        .route("/settings/sieges", get(sieges::list).post(sieges::create))
        .route(
            "/settings/sieges/:id",
            get(sieges::show).put(sieges::update).delete(sieges::remove),
        )
        // Departements are registered statically: their lifecycle sub-routes
        // would otherwise shadow the `:resource` captures below
        .route(
            "/settings/departements",
            get(departements::list).post(departements::create),
        )
        .route(
            "/settings/departements/:id",
            get(departements::show)
                .put(departements::update)
                .delete(departements::remove),
        )
        .route(
            "/settings/departements/:id/activate",
            patch(departements::activate),
        )
        .route(
            "/settings/departements/:id/deactivate",
            patch(departements::deactivate),
        )
        // Everything else under /settings goes through the registry dispatch
        .route(
            "/settings/:resource",
            get(settings::list).post(settings::create),
        )
        .route(
            "/settings/:resource/:id",
            get(settings::show)
                .put(settings::update)
                .delete(settings::remove),
        )
}
