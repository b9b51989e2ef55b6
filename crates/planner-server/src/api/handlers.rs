use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use planner_core::date::{format_date, parse_date};
use planner_core::models::CompletionResult;
use planner_core::recurrence::next_occurrence;
use planner_core::repository::TaskRepository;
use serde_json::{json, Value};

use super::dto::{
    parse_id, CreatedResponse, IdQuery, NextDateQuery, TaskListResponse, TaskRequest, TaskResponse,
};
use super::error::ApiError;
use super::AppState;

/// `GET /api/nextdate`: plain-text next date, empty when no rule applies.
pub async fn next_date(Query(query): Query<NextDateQuery>) -> impl IntoResponse {
    let Some(now) = parse_date(&query.now) else {
        return (StatusCode::BAD_REQUEST, "invalid 'now' date".to_string());
    };
    let Some(date) = parse_date(&query.date) else {
        return (StatusCode::BAD_REQUEST, "invalid 'date' date".to_string());
    };

    let body = next_occurrence(now, date, &query.repeat)
        .map(format_date)
        .unwrap_or_default();
    (StatusCode::OK, body)
}

/// `POST /api/task`
pub async fn create_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    body: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(request) = body.map_err(json_error)?;
    let id = state
        .service
        .create(request.into_input(), (state.today)())
        .await?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// `GET /api/task?id=N`
pub async fn get_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let id = parse_id(query.id.as_deref())?;
    let task = state.service.get(id).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PUT /api/task`
pub async fn update_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    body: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(mut request) = body.map_err(json_error)?;
    let id = parse_id(request.id.take().as_deref())?;
    state
        .service
        .update(id, request.into_input(), (state.today)())
        .await?;

    Ok(Json(json!({})))
}

/// `DELETE /api/task?id=N`
pub async fn delete_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let id = parse_id(query.id.as_deref())?;
    state.service.delete(id).await?;
    Ok(Json(json!({})))
}

/// `GET /api/tasks`
pub async fn list_tasks<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<TaskListResponse>, ApiError> {
    let tasks = state.service.list().await?;
    Ok(Json(TaskListResponse {
        tasks: tasks.iter().map(TaskResponse::from).collect(),
    }))
}

/// `POST /api/task/done?id=N`
pub async fn complete_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let id = parse_id(query.id.as_deref())?;
    match state.service.complete_or_advance(id, (state.today)()).await? {
        CompletionResult::Removed(_) => {}
        CompletionResult::Rescheduled(task) => {
            tracing::debug!(id, date = %format_date(task.date), "task advanced via api");
        }
    }
    Ok(Json(json!({})))
}

/// Any known route hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn query_error(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(format!("invalid query string: {}", rejection.body_text()))
}

fn json_error(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("invalid JSON body: {}", rejection.body_text()))
}
