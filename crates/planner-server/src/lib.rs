//! HTTP front end of the planner scheduler.

pub mod api;
pub mod cli;
pub mod config;
