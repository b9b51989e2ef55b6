use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTask, Task};
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod tasks;

/// Persistence operations the task lifecycle needs.
///
/// Each method is a single statement against the store; no method spans
/// more than one, so callers get no isolation between a read and a later
/// write.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the id assigned to it.
    async fn add_task(&self, data: NewTask) -> Result<i64, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    /// Replaces every field except the id. `NotFound` when no row matched.
    async fn update_task(&self, task: &Task) -> Result<(), CoreError>;
    /// Moves a task to `date` without touching anything else.
    async fn update_task_date(&self, id: i64, date: NaiveDate) -> Result<(), CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    /// Earliest tasks first, at most `limit` of them.
    async fn list_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError>;
}

/// SQLite implementation of the repository pattern
#[derive(Clone)]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Closes every pooled connection. Pending queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
