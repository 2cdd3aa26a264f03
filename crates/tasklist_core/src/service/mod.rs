//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the task-store API.
//! - Keep presentation layers decoupled from storage details.

pub mod task_store;
