use chrono::NaiveDate;
use sqlx::FromRow;

use crate::date::{format_date, parse_date};
use crate::error::CoreError;

/// A scheduled task as held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    /// Next (or current) scheduled occurrence.
    pub date: NaiveDate,
    pub title: String,
    pub comment: String,
    /// Recurrence rule; empty for one-shot tasks.
    pub repeat: String,
}

impl Task {
    /// A task without a repeat rule is removed when completed.
    pub fn is_one_shot(&self) -> bool {
        self.repeat.is_empty()
    }
}

/// A `scheduler` row exactly as stored, date still in its text form.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl TryFrom<TaskRow> for Task {
    type Error = CoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let date = parse_date(&row.date).ok_or_else(|| CoreError::CorruptDate {
            id: row.id,
            raw: row.date.clone(),
        })?;

        Ok(Task {
            id: row.id,
            date,
            title: row.title,
            comment: row.comment,
            repeat: row.repeat,
        })
    }
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        TaskRow {
            id: task.id,
            date: format_date(task.date),
            title: task.title.clone(),
            comment: task.comment.clone(),
            repeat: task.repeat.clone(),
        }
    }
}

/// Validated data for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub date: NaiveDate,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Raw, unvalidated task fields as a client submits them.
///
/// `date` is the 8-digit text form; `None` or an empty string means "today".
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    pub date: Option<String>,
    pub title: String,
    pub comment: Option<String>,
    pub repeat: String,
}

/// What happened to a task when it was marked done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// One-shot task; it no longer exists.
    Removed(i64),
    /// Recurring task moved to its next date.
    Rescheduled(Task),
}
