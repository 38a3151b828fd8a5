//! Seed list generation through the chat-completion endpoint.

use todo_core::seed_list::{self, SeedPrompt};
use todo_core::todo::TodoStatus;
use todo_db::models::todo::Todo;
use todo_openai::ChatCompletionApi;

use crate::error::AppResult;
use crate::services::records::TodoRecords;

/// Asks the completion endpoint for a numbered list and stores one `OPEN`
/// record per answer line.
pub struct SeedListGenerator {
    api: ChatCompletionApi,
    prompt: SeedPrompt,
}

impl SeedListGenerator {
    pub fn new(api: ChatCompletionApi, prompt: SeedPrompt) -> Self {
        Self { api, prompt }
    }

    /// Fetch one answer and persist its lines in order.
    ///
    /// Each line is an independent write. A line without a space aborts the
    /// run with a parse error; records from earlier lines stay stored.
    pub async fn generate(&self, records: &TodoRecords) -> AppResult<Vec<Todo>> {
        let answer = self.api.ask(&self.prompt.text()).await?;

        tracing::info!(
            topic = %self.prompt.topic,
            lines = answer.split('\n').count(),
            "Received seed list answer",
        );

        let mut created = Vec::new();
        for description in seed_list::descriptions(&answer) {
            let todo = records.add_new(description?, TodoStatus::Open).await?;
            created.push(todo);
        }

        tracing::info!(created = created.len(), "Seed list stored");
        Ok(created)
    }
}
