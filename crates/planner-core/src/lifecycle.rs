//! Task lifecycle: creation, edits and completion.
//!
//! A task is *pending* while it sits in the store. Completing it either
//! removes it (one-shot) or *reschedules* it to the next occurrence of its
//! repeat rule, keeping the id and every other field.
//!
//! # Concurrency
//!
//! [`TaskService::complete_or_advance`] reads the task and then writes the
//! new date as two separate statements. Sequential calls advance the task
//! exactly once each. Two concurrent completions of the same recurring task
//! may both read the old date and collapse into one advance (a lost
//! update). Callers that need one advance per request must serialize
//! completions per task id themselves.

use chrono::NaiveDate;

use crate::date::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTask, Task, TaskInput};
use crate::recurrence::{is_valid_rule, next_occurrence};
use crate::repository::TaskRepository;

/// Default number of tasks returned by [`TaskService::list`].
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Applies lifecycle rules on top of a [`TaskRepository`].
#[derive(Debug, Clone)]
pub struct TaskService<R> {
    repo: R,
    list_limit: u32,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Overrides the page size used by [`TaskService::list`].
    pub fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates `input`, resolves its effective date against `now` and
    /// stores it. Returns the new task id.
    pub async fn create(&self, input: TaskInput, now: NaiveDate) -> Result<i64, CoreError> {
        let data = resolve_input(input, now)?;
        let id = self.repo.add_task(data).await?;
        tracing::debug!(id, "task created");
        Ok(id)
    }

    /// Replaces a task's fields using the same rules as [`TaskService::create`].
    pub async fn update(&self, id: i64, input: TaskInput, now: NaiveDate) -> Result<Task, CoreError> {
        let data = resolve_input(input, now)?;
        let task = Task {
            id,
            date: data.date,
            title: data.title,
            comment: data.comment,
            repeat: data.repeat,
        };
        self.repo.update_task(&task).await?;
        tracing::debug!(id, "task updated");
        Ok(task)
    }

    pub async fn get(&self, id: i64) -> Result<Task, CoreError> {
        self.repo
            .find_task_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete_task(id).await?;
        tracing::debug!(id, "task deleted");
        Ok(())
    }

    /// Earliest tasks first, capped at the configured page size.
    pub async fn list(&self) -> Result<Vec<Task>, CoreError> {
        self.repo.list_tasks(self.list_limit).await
    }

    /// Marks a task done as of `now`.
    ///
    /// One-shot tasks are deleted. Recurring tasks keep their id and fields
    /// and move to the first occurrence after `now`. Every call counts as a
    /// separate completion; see the module docs for concurrent calls.
    pub async fn complete_or_advance(&self, id: i64, now: NaiveDate) -> Result<CompletionResult, CoreError> {
        let task = self.get(id).await?;

        if task.is_one_shot() {
            self.repo.delete_task(id).await?;
            tracing::info!(id, "one-shot task completed and removed");
            return Ok(CompletionResult::Removed(id));
        }

        let next = next_occurrence(now, task.date, &task.repeat)
            .ok_or_else(|| CoreError::InvalidRule(task.repeat.clone()))?;
        self.repo.update_task_date(id, next).await?;
        tracing::info!(id, next = %format_date(next), "recurring task rescheduled");

        Ok(CompletionResult::Rescheduled(Task { date: next, ..task }))
    }
}

/// Validates client input and computes the date that will be stored.
fn resolve_input(input: TaskInput, now: NaiveDate) -> Result<NewTask, CoreError> {
    if input.title.is_empty() {
        return Err(CoreError::InvalidInput("task title is required".to_string()));
    }
    if !is_valid_rule(&input.repeat) {
        return Err(CoreError::InvalidInput(format!(
            "invalid repeat rule '{}'",
            input.repeat
        )));
    }

    let date = resolve_date(input.date.as_deref(), &input.repeat, now)?;

    Ok(NewTask {
        date,
        title: input.title,
        comment: input.comment.unwrap_or_default(),
        repeat: input.repeat,
    })
}

/// Picks the effective date for a task.
///
/// Missing dates mean today. Past dates move to today for one-shot tasks
/// and to the next occurrence after today for recurring ones.
fn resolve_date(raw: Option<&str>, repeat: &str, now: NaiveDate) -> Result<NaiveDate, CoreError> {
    let date = match raw {
        None | Some("") => return Ok(now),
        Some(raw) if raw == format_date(now) => return Ok(now),
        Some(raw) => parse_date(raw)
            .ok_or_else(|| CoreError::InvalidInput(format!("invalid date '{}'", raw)))?,
    };

    if date >= now {
        return Ok(date);
    }
    if repeat.is_empty() {
        return Ok(now);
    }

    next_occurrence(now, date, repeat).ok_or_else(|| {
        CoreError::InvalidInput(format!("invalid repeat rule '{}'", repeat))
    })
}
