pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todo                 list, create
/// /todo/initialize      generate seed list (GET); PUT/DELETE act on id `initialize`
/// /todo/{id}            get, upsert, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todo", todo::router())
}
