//! HTTP API over the task lifecycle.
//!
//! ## Endpoints
//!
//! - `GET /api/nextdate?now=&date=&repeat=`: next occurrence as plain text
//! - `POST /api/task`: create, returns `{"id": "N"}`
//! - `GET /api/task?id=N`: fetch one task
//! - `PUT /api/task`: replace a task's fields
//! - `DELETE /api/task?id=N`: remove a task
//! - `GET /api/tasks`: earliest tasks first, `{"tasks": [...]}`
//! - `POST /api/task/done?id=N`: complete (remove or reschedule)
//!
//! Every date on the wire is 8 digits, `YYYYMMDD`. Errors are JSON objects
//! with a single `error` field, including unsupported methods (405).

use axum::routing::{get, post};
use axum::Router;
use chrono::NaiveDate;
use planner_core::date;
use planner_core::lifecycle::TaskService;
use planner_core::repository::TaskRepository;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod dto;
pub mod error;
pub mod handlers;

/// Shared handler dependencies.
pub struct AppState<R> {
    pub service: Arc<TaskService<R>>,
    /// Source of "today" for date normalization.
    pub today: fn() -> NaiveDate,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            today: self.today,
        }
    }
}

/// Builds the API router using the local calendar for "today".
pub fn router<R: TaskRepository + 'static>(service: Arc<TaskService<R>>) -> Router {
    router_with_clock(service, date::today)
}

/// Builds the API router with an explicit source of "today".
pub fn router_with_clock<R: TaskRepository + 'static>(
    service: Arc<TaskService<R>>,
    today: fn() -> NaiveDate,
) -> Router {
    let state = AppState { service, today };

    Router::new()
        .route("/api/nextdate", get(handlers::next_date))
        .route(
            "/api/task",
            post(handlers::create_task::<R>)
                .get(handlers::get_task::<R>)
                .put(handlers::update_task::<R>)
                .delete(handlers::delete_task::<R>),
        )
        .route("/api/tasks", get(handlers::list_tasks::<R>))
        .route("/api/task/done", post(handlers::complete_task::<R>))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("planner listening on http://{addr}");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
