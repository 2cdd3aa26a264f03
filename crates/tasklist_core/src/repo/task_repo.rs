//! Task repository contract and backends.
//!
//! # Responsibility
//! - Provide the load/save persistence seam for the task store.
//! - Keep the durable layout as one JSON document: an ordered array of task
//!   records under a single well-known path.
//!
//! # Invariants
//! - `load` is lenient: a missing file or unparseable content yields an
//!   empty list so the system stays usable after external tampering.
//! - `save` writes the full sequence synchronously.

use crate::model::task::Task;
use log::warn;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for task load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "task storage i/o failure: {err}"),
            Self::Serialize(err) => write!(f, "task serialization failure: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for RepoError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Pluggable persistence interface for the full task sequence.
pub trait TaskRepository {
    fn load(&self) -> RepoResult<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> RepoResult<()>;
}

impl<R: TaskRepository + ?Sized> TaskRepository for &R {
    fn load(&self) -> RepoResult<Vec<Task>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        (**self).save(tasks)
    }
}

/// File-backed repository storing the sequence as one JSON document.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for JsonFileRepository {
    fn load(&self) -> RepoResult<Vec<Task>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "event=tasks_load module=repo status=recovered path={} error={err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory repository for tests and backend-free embedding.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tasks: RefCell<Vec<Task>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the backend with pre-existing tasks.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
        }
    }

    /// Returns a copy of the last saved sequence.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }
}

impl TaskRepository for MemoryRepository {
    fn load(&self) -> RepoResult<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
