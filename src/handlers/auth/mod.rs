pub mod login;
pub mod refresh;
pub mod utils;
pub mod whoami;

use axum::routing::{get, post};
use axum::Router;

use crate::store::Repository;

pub fn routes() -> Router<Repository> {
    Router::new()
        .route("/login", post(login::login))
        .route("/refresh", post(refresh::refresh))
        .route("/me", get(whoami::whoami))
}
