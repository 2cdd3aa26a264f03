//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store and persistence.
//! - Derive filter membership and urgency against a caller-supplied date.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and non-empty after every successful mutation.
//! - `due_date` is a calendar date with no time component.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Label rendered for tasks without a due date.
pub const NO_DUE_DATE_LABEL: &str = "No Due Date";

/// Validation error raised at task mutation boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Description is empty or whitespace-only after trimming.
    EmptyDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// View criterion selecting which tasks are visible.
///
/// Ephemeral session state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
    DueToday,
    Overdue,
}

/// Display classification derived per task, independent of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Incomplete and due before the reference date.
    Overdue,
    /// Incomplete and due on the reference date.
    DueToday,
    /// Completed, undated, or due later than the reference date.
    Normal,
}

/// Canonical record for one to-do item.
///
/// The serde layout mirrors the legacy storage blob: `dueDate` is written as
/// `YYYY-MM-DD` and an absent date as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique ID assigned at creation.
    pub id: TaskId,
    /// Human-readable description; trimmed, never empty.
    pub text: String,
    /// Optional due date, serialized as `dueDate` for wire compatibility.
    #[serde(rename = "dueDate", default, with = "due_date_codec")]
    pub due_date: Option<NaiveDate>,
    /// Completion flag; starts `false`.
    pub completed: bool,
}

impl Task {
    /// Creates a new incomplete task with a generated stable ID.
    ///
    /// # Errors
    /// - `EmptyDescription` when `text` trims to nothing.
    pub fn new(
        text: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text, due_date)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by persistence paths where identity already exists externally.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TaskValidationError> {
        let text = normalize_description(&text.into())?;
        Ok(Self {
            id,
            text,
            due_date,
            completed: false,
        })
    }

    /// Replaces the description with the trimmed value.
    ///
    /// # Errors
    /// - `EmptyDescription` when `text` trims to nothing; the existing
    ///   description is left unchanged in that case.
    pub fn rename(&mut self, text: &str) -> Result<(), TaskValidationError> {
        self.text = normalize_description(text)?;
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Derives the urgency of this task against the caller-supplied "today".
    ///
    /// Completed and undated tasks are always `Normal`.
    pub fn urgency(&self, reference_date: NaiveDate) -> Urgency {
        if self.completed {
            return Urgency::Normal;
        }
        match self.due_date {
            Some(due) if due < reference_date => Urgency::Overdue,
            Some(due) if due == reference_date => Urgency::DueToday,
            _ => Urgency::Normal,
        }
    }

    /// Returns whether this task passes the given filter mode.
    pub fn matches(&self, mode: FilterMode, reference_date: NaiveDate) -> bool {
        match mode {
            FilterMode::All => true,
            FilterMode::Pending => !self.completed,
            FilterMode::Completed => self.completed,
            FilterMode::DueToday => !self.completed && self.due_date == Some(reference_date),
            FilterMode::Overdue => {
                !self.completed && self.due_date.is_some_and(|due| due < reference_date)
            }
        }
    }
}

/// Trims a description, rejecting empty or whitespace-only input.
pub fn normalize_description(text: &str) -> Result<String, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

/// Formats a due date for display as `DD/MM/YYYY`.
///
/// Boundary helper for presentation layers; not part of the stored record.
pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    match due_date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => NO_DUE_DATE_LABEL.to_string(),
    }
}

/// Serde codec for the legacy `dueDate` field: `YYYY-MM-DD` or `""`.
mod due_date_codec {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            // The legacy blob writes "" for date-less tasks.
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(|err| D::Error::custom(format!("invalid due date `{text}`: {err}"))),
        }
    }
}
