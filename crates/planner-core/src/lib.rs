//! # Planner Core Library
//!
//! Recurrence rules and the task lifecycle behind the planner scheduler.
//!
//! ## Core Modules
//!
//! - [`recurrence`]: repeat-rule grammar and next-occurrence calculation
//! - [`lifecycle`]: creation, edits and completion of tasks
//! - [`repository`]: storage trait and its SQLite implementation
//! - [`db`]: database connection and migration management
//! - [`models`]: core data structures
//! - [`date`]: the 8-digit date form used at every boundary
//! - [`error`]: error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use planner_core::{
//!     date, db, lifecycle::TaskService, models::TaskInput,
//!     repository::SqliteRepository,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), planner_core::error::CoreError> {
//!     let pool = db::establish_connection("scheduler.db").await?;
//!     let service = TaskService::new(SqliteRepository::new(pool));
//!
//!     let id = service
//!         .create(
//!             TaskInput {
//!                 title: "Pay rent".to_string(),
//!                 repeat: "d 30".to_string(),
//!                 ..Default::default()
//!             },
//!             date::today(),
//!         )
//!         .await?;
//!     println!("Created task {}", id);
//!
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod recurrence;
pub mod repository;
