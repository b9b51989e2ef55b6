use planner_core::date::format_date;
use planner_core::models::{Task, TaskInput};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Task fields as clients send them. Ids travel as strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskRequest {
    pub id: Option<String>,
    pub date: Option<String>,
    pub title: String,
    pub comment: Option<String>,
    pub repeat: String,
}

impl TaskRequest {
    pub fn into_input(self) -> TaskInput {
        TaskInput {
            date: self.date,
            title: self.title,
            comment: self.comment,
            repeat: self.repeat,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskResponse {
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            date: format_date(task.date),
            title: task.title.clone(),
            comment: task.comment.clone(),
            repeat: task.repeat.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// `?id=` query used by the single-task endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextDateQuery {
    #[serde(default)]
    pub now: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub repeat: String,
}

/// Parses a client-supplied task id.
pub fn parse_id(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("task id is required".to_string()))?;

    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid task id '{}'", raw)))
}
