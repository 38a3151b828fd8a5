//! Route definitions for to-do records, mounted at `/todo`.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// To-do routes.
///
/// ```text
/// GET    /              -> list_todos
/// POST   /              -> create_todo
/// GET    /initialize    -> initialize_todos
/// PUT    /initialize    -> update_initialize_todo
/// DELETE /initialize    -> delete_initialize_todo
/// GET    /{id}          -> get_todo
/// PUT    /{id}          -> update_todo
/// DELETE /{id}          -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list_todos).post(todo::create_todo))
        .route(
            "/initialize",
            get(todo::initialize_todos)
                .put(todo::update_initialize_todo)
                .delete(todo::delete_initialize_todo),
        )
        .route(
            "/{id}",
            get(todo::get_todo)
                .put(todo::update_todo)
                .delete(todo::delete_todo),
        )
}
