use std::sync::Arc;

use crate::services::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todo_db::DbPool,
    /// To-do service variant selected at startup.
    pub todo_service: Arc<dyn TodoService>,
}
