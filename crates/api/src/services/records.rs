//! CRUD orchestration over the record store.
//!
//! Assigns keys on add, turns a missing key into `NotFound` on lookup, and
//! treats update as an upsert keyed by the caller-supplied id.

use std::sync::Arc;

use todo_core::error::CoreError;
use todo_core::ids::IdGenerator;
use todo_core::todo::TodoStatus;
use todo_db::models::todo::{Todo, TodoInput};
use todo_db::store::TodoStore;

use crate::error::AppResult;

const ENTITY: &str = "Todo";

/// Record service shared by both [`crate::services::TodoService`] variants.
#[derive(Clone)]
pub struct TodoRecords {
    store: Arc<dyn TodoStore>,
    ids: Arc<dyn IdGenerator>,
}

impl TodoRecords {
    pub fn new(store: Arc<dyn TodoStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Todo>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Todo> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Persist a new record under a freshly generated key.
    pub async fn add(&self, input: TodoInput) -> AppResult<Todo> {
        let id = self.ids.next_id();
        let saved = self.store.upsert(&input.into_todo(id)).await?;

        tracing::info!(todo_id = %saved.id, status = %saved.status, "Todo created");
        Ok(saved)
    }

    /// Shorthand for [`Self::add`] with separate fields.
    pub async fn add_new(&self, description: &str, status: TodoStatus) -> AppResult<Todo> {
        self.add(TodoInput::new(description, status)).await
    }

    /// Store `input` under `id`, creating the record if it does not exist.
    pub async fn update(&self, id: &str, input: TodoInput) -> AppResult<Todo> {
        if id.is_empty() {
            return Err(CoreError::Validation("Todo id must not be empty".into()).into());
        }

        let saved = self.store.upsert(&input.into_todo(id)).await?;

        tracing::info!(todo_id = %saved.id, status = %saved.status, "Todo updated");
        Ok(saved)
    }

    /// Remove the record if present. Removing an unknown key succeeds.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.store.delete(id).await?;

        if deleted {
            tracing::info!(todo_id = %id, "Todo deleted");
        } else {
            tracing::debug!(todo_id = %id, "Delete of unknown todo ignored");
        }
        Ok(())
    }
}
