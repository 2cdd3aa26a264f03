//! Persistence abstractions and backends.
//!
//! # Responsibility
//! - Define the pluggable load/save contract the store depends on.
//! - Isolate serialization and filesystem details from the store.
//!
//! # Invariants
//! - Missing or malformed persisted content loads as an empty list, never
//!   as an error.

pub mod task_repo;
