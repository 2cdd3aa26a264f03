//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its derived view classifications.
//! - Keep the persisted wire layout compatible with the legacy storage blob.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Task descriptions are trimmed and never empty.

pub mod task;
