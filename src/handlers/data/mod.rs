//! Generic resource router: serves every array-valued top-level key of the
//! loaded document with uniform CRUD semantics. Registered after all
//! specific routes; static segments win over the captures used here.

pub mod collection;
pub mod record;

use axum::routing::get;
use axum::Router;

use crate::store::Repository;

pub fn routes() -> Router<Repository> {
    Router::new()
        .route(
            "/:collection",
            get(collection::list).post(collection::create),
        )
        .route(
            "/:collection/:id",
            get(record::show)
                .put(record::update)
                .patch(record::update)
                .delete(record::remove),
        )
}
