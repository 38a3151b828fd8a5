//! To-do record model and input DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::todo::TodoStatus;
use todo_core::types::TodoId;

/// A row from the `todos` table, and the record's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: TodoStatus,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, description: impl Into<String>, status: TodoStatus) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status,
        }
    }
}

/// DTO for creating or replacing a record. The key always comes from the
/// caller (generated or taken from the path), so an `id` in the body is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoInput {
    pub description: String,
    pub status: TodoStatus,
}

impl TodoInput {
    pub fn new(description: impl Into<String>, status: TodoStatus) -> Self {
        Self {
            description: description.into(),
            status,
        }
    }

    pub fn into_todo(self, id: impl Into<TodoId>) -> Todo {
        Todo::new(id, self.description, self.status)
    }
}
