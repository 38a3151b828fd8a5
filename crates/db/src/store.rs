//! Keyed record store used by the service layer.
//!
//! [`TodoStore`] is the full contract the services rely on: upsert by key,
//! fetch by key, fetch all, delete by key. [`PgTodoStore`] backs it with the
//! `todos` table; [`MemoryTodoStore`] keeps records in process and is used by
//! tests and by callers that do not need durability.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::todo::Todo;
use crate::repositories::TodoRepo;
use crate::DbPool;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every record, in store order.
    async fn find_all(&self) -> Result<Vec<Todo>, sqlx::Error>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, sqlx::Error>;

    /// Insert or replace by `todo.id`; returns the stored value.
    async fn upsert(&self, todo: &Todo) -> Result<Todo, sqlx::Error>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn find_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        TodoRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, sqlx::Error> {
        TodoRepo::find_by_id(&self.pool, id).await
    }

    async fn upsert(&self, todo: &Todo) -> Result<Todo, sqlx::Error> {
        TodoRepo::upsert(&self.pool, todo).await
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        TodoRepo::delete(&self.pool, id).await
    }
}

/// In-process store. Records keep their first-insertion position across
/// replacements, matching the ordering of [`PgTodoStore`].
#[derive(Default)]
pub struct MemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn find_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        Ok(self.todos.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, sqlx::Error> {
        Ok(self.todos.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn upsert(&self, todo: &Todo) -> Result<Todo, sqlx::Error> {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|t| t.id == todo.id) {
            Some(existing) => *existing = todo.clone(),
            None => todos.push(todo.clone()),
        }
        Ok(todo.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() < before)
    }
}
