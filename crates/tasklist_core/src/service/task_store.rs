//! Task store: the single owner of the in-memory task sequence.
//!
//! # Responsibility
//! - Expose the mutation and derived-view operations consumed by the
//!   presentation layer.
//! - Persist the full sequence through the repository after every mutation.
//!
//! # Invariants
//! - Insertion order is display order; mutations never reorder tasks.
//! - Any failure leaves the in-memory sequence unchanged: mutations are
//!   staged on a copy and committed only after a successful save.
//! - The filter mode is session-local and never persisted.

use crate::model::task::{FilterMode, Task, TaskId, TaskValidationError, Urgency};
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for task operations.
///
/// Both variants besides `Repo` are expected, recoverable conditions the
/// caller reports back to the user.
#[derive(Debug)]
pub enum StoreError {
    /// Description was empty or whitespace-only after trimming.
    EmptyDescription,
    /// No task has the given id.
    NotFound(TaskId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be empty"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        match value {
            TaskValidationError::EmptyDescription => Self::EmptyDescription,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Ordered task collection plus the active filter, backed by a repository.
pub struct TaskStore<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
    filter: FilterMode,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Opens the store, performing the single startup load.
    pub fn open(repo: R) -> RepoResult<Self> {
        let tasks = repo.load()?;
        info!(
            "event=store_open module=service status=ok tasks={}",
            tasks.len()
        );
        Ok(Self {
            repo,
            tasks,
            filter: FilterMode::default(),
        })
    }

    /// Adds a new incomplete task at the end of the sequence.
    ///
    /// # Errors
    /// - `EmptyDescription` when `text` trims to nothing; the sequence is
    ///   not mutated in that case.
    pub fn add(&mut self, text: &str, due_date: Option<NaiveDate>) -> StoreResult<Task> {
        let task = Task::new(text, due_date)?;
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        info!("event=task_add module=service status=ok id={}", task.id);
        Ok(task)
    }

    /// Flips the completion flag of the task with the given id.
    pub fn toggle_completed(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.position(id)?;
        let mut next = self.tasks.clone();
        next[index].toggle_completed();
        self.commit(next)
    }

    /// Replaces the description of the task with the given id.
    ///
    /// # Errors
    /// - `NotFound` when no task has the id.
    /// - `EmptyDescription` when `new_text` trims to nothing; the existing
    ///   description is left unchanged.
    pub fn edit_text(&mut self, id: TaskId, new_text: &str) -> StoreResult<()> {
        let index = self.position(id)?;
        let mut next = self.tasks.clone();
        next[index].rename(new_text)?;
        self.commit(next)
    }

    /// Removes the task with the given id.
    ///
    /// Unconditional once called; destructive-action confirmation is the
    /// caller's responsibility.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.position(id)?;
        let mut next = self.tasks.clone();
        next.remove(index);
        self.commit(next)?;
        info!("event=task_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Clears the entire sequence and persists it empty.
    pub fn delete_all(&mut self) -> StoreResult<()> {
        self.commit(Vec::new())?;
        info!("event=tasks_clear module=service status=ok");
        Ok(())
    }

    /// Updates the active filter. Session-local; triggers no persistence.
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// Returns the tasks passing the active filter, each annotated with its
    /// urgency against `reference_date`, in insertion order.
    ///
    /// Pure derived view; an empty result is a normal value, not an error.
    pub fn visible_tasks(&self, reference_date: NaiveDate) -> Vec<(&Task, Urgency)> {
        self.tasks
            .iter()
            .filter(|task| task.matches(self.filter, reference_date))
            .map(|task| (task, task.urgency(reference_date)))
            .collect()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Full underlying sequence in insertion order, ignoring the filter.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Persists the staged sequence, committing it in memory only on success.
    fn commit(&mut self, next: Vec<Task>) -> StoreResult<()> {
        self.repo.save(&next)?;
        self.tasks = next;
        Ok(())
    }
}
