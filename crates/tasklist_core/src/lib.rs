//! Core domain logic for the task list.
//! This crate is the single source of truth for task-state invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    format_due_date, normalize_description, FilterMode, Task, TaskId, TaskValidationError,
    Urgency, NO_DUE_DATE_LABEL,
};
pub use repo::task_repo::{
    JsonFileRepository, MemoryRepository, RepoError, RepoResult, TaskRepository,
};
pub use service::task_store::{StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
