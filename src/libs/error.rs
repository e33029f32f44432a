//! Error types for task creation and the task store.

use super::messages::Message;
use thiserror::Error;

/// Reasons a task could not be created or the store could not be used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    /// The title is missing or contains only whitespace.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The due date does not follow `YYYY-MM-DD` or is not a calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// The priority is not one of the recognized labels.
    #[error("invalid priority '{0}', expected one of Low, Medium, High")]
    InvalidPriority(String),

    /// A task with the same title (ignoring case) and due date already exists.
    #[error("task '{title}' already exists with due date {due_date}")]
    DuplicateTask { title: String, due_date: String },

    /// The store file exists but could not be read or parsed.
    #[error("failed to read task store {path}: {reason}")]
    StorageReadError { path: String, reason: String },

    /// The store file could not be written.
    #[error("failed to write task store {path}: {reason}")]
    StorageWriteError { path: String, reason: String },
}

impl TaskError {
    /// User-facing message describing the failure.
    pub fn message(&self) -> Message {
        match self {
            TaskError::EmptyTitle => Message::TaskTitleEmpty,
            TaskError::InvalidDateFormat(value) => Message::TaskDueDateInvalid(value.clone()),
            TaskError::InvalidPriority(value) => Message::TaskPriorityInvalid(value.clone()),
            TaskError::DuplicateTask { title, due_date } => Message::TaskDuplicate(title.clone(), due_date.clone()),
            TaskError::StorageReadError { path, reason } => Message::StoreReadFailed(path.clone(), reason.clone()),
            TaskError::StorageWriteError { path, reason } => Message::StoreWriteFailed(path.clone(), reason.clone()),
        }
    }
}
