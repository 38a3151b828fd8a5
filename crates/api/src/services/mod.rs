//! Service layer behind the to-do handlers.
//!
//! Handlers talk to an `Arc<dyn TodoService>`. Two variants exist and one is
//! chosen at startup:
//!
//! - [`StoreTodoService`]: record CRUD only; seed generation does nothing.
//! - [`GeneratingTodoService`]: record CRUD plus seed generation through the
//!   chat-completion endpoint.

pub mod records;
pub mod seed_list;

use async_trait::async_trait;
use todo_db::models::todo::{Todo, TodoInput};

use crate::error::AppResult;
use records::TodoRecords;
use seed_list::SeedListGenerator;

#[async_trait]
pub trait TodoService: Send + Sync {
    /// The record service the CRUD operations delegate to.
    fn records(&self) -> &TodoRecords;

    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        self.records().find_all().await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Todo> {
        self.records().find_by_id(id).await
    }

    async fn add(&self, input: TodoInput) -> AppResult<Todo> {
        self.records().add(input).await
    }

    async fn update(&self, id: &str, input: TodoInput) -> AppResult<Todo> {
        self.records().update(id, input).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.records().delete(id).await
    }

    /// Whether [`Self::generate_seed_list`] reaches an external generator.
    fn generates_seed_lists(&self) -> bool {
        false
    }

    /// Create a batch of starter records. Returns what was created.
    async fn generate_seed_list(&self) -> AppResult<Vec<Todo>>;
}

/// Store-only variant.
pub struct StoreTodoService {
    records: TodoRecords,
}

impl StoreTodoService {
    pub fn new(records: TodoRecords) -> Self {
        Self { records }
    }
}

#[async_trait]
impl TodoService for StoreTodoService {
    fn records(&self) -> &TodoRecords {
        &self.records
    }

    async fn generate_seed_list(&self) -> AppResult<Vec<Todo>> {
        tracing::debug!("No list generator configured, skipping seed generation");
        Ok(Vec::new())
    }
}

/// Store plus chat-completion variant.
pub struct GeneratingTodoService {
    records: TodoRecords,
    generator: SeedListGenerator,
}

impl GeneratingTodoService {
    pub fn new(records: TodoRecords, generator: SeedListGenerator) -> Self {
        Self { records, generator }
    }
}

#[async_trait]
impl TodoService for GeneratingTodoService {
    fn records(&self) -> &TodoRecords {
        &self.records
    }

    fn generates_seed_lists(&self) -> bool {
        true
    }

    async fn generate_seed_list(&self) -> AppResult<Vec<Todo>> {
        self.generator.generate(&self.records).await
    }
}
