//! Use-case services over repository contracts.
//!
//! Each service owns the business rules for one area and depends on
//! repository traits, never on SQLite directly.

pub mod dashboard_service;
pub mod milestone_service;
pub mod pitch_service;
pub mod startup_service;
pub mod task_service;
pub mod team_service;
