//! Task record and its enumerations.
//!
//! The serialized shape of [`Task`] is the on-disk format of the store: an
//! object with the keys `id`, `title`, `description`, `due_date`, `priority`,
//! `status`, `created_at` and `last_updated_at`.

use super::error::TaskError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for due dates, both when parsing input and when storing.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Recognized labels, in ascending order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }

    /// Exact, case-sensitive match against the recognized labels.
    pub fn parse(value: &str) -> Result<Self, TaskError> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .ok_or_else(|| TaskError::InvalidPriority(value.to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Incomplete,
    /// Never produced here, but accepted when loading a store.
    Completed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Incomplete => f.write_str("Incomplete"),
            Status::Completed => f.write_str("Completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Status,
    pub created_at: NaiveDateTime,
    pub last_updated_at: NaiveDateTime,
}

impl Task {
    /// Builds a fresh task stamped with the current local time.
    pub fn new(id: u64, title: &str, description: &str, due_date: NaiveDate, priority: Priority) -> Self {
        Self::new_at(id, title, description, due_date, priority, Local::now().naive_local())
    }

    /// Builds a fresh task stamped with `now`.
    pub fn new_at(id: u64, title: &str, description: &str, due_date: NaiveDate, priority: Priority, now: NaiveDateTime) -> Self {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
            status: Status::Incomplete,
            created_at: now,
            last_updated_at: now,
        }
    }

    /// Due date in its stored `YYYY-MM-DD` form.
    pub fn due_date_label(&self) -> String {
        self.due_date.format(DUE_DATE_FORMAT).to_string()
    }
}

/// Next free identifier: one past the highest id in the collection.
///
/// For a store built only through task creation this is `tasks.len() + 1`.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
}
