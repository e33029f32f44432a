//! Display implementation for taskr application messages.
//!
//! Every user-facing text lives here, so a message variant is formatted the
//! same way whether it goes to the console or to the tracing subscriber.
//!
//! ```rust
//! use taskr::libs::messages::Message;
//!
//! let message = Message::TaskDuplicate("Buy milk".to_string(), "2025-07-20".to_string());
//! assert_eq!(message.to_string(), "Task 'Buy milk' already exists with due date 2025-07-20.");
//! ```

use super::types::Message;
use crate::libs::task::Priority;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' created successfully", id, title),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskTitleEmpty => "Task title must not be empty.".to_string(),
            Message::TaskDueDateInvalid(value) => {
                format!("Invalid due date '{}'. Please use the YYYY-MM-DD format.", value)
            }
            Message::TaskPriorityInvalid(value) => format!(
                "Invalid priority '{}'. Please choose one of: {}.",
                value,
                Priority::labels().join(", ")
            ),
            Message::TaskDuplicate(title, due_date) => {
                format!("Task '{}' already exists with due date {}.", title, due_date)
            }
            Message::TaskCreatedHeader => "New task:".to_string(),

            // === STORE MESSAGES ===
            Message::StoreReadFailed(path, reason) => format!("Failed to read task store {}: {}", path, reason),
            Message::StoreWriteFailed(path, reason) => format!("Failed to write task store {}: {}", path, reason),
            Message::StoreTreatedAsEmpty(path) => format!("Task store {} could not be used, starting from an empty list", path),
            Message::StoreLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::StoreSaved(count, path) => format!("Saved {} task(s) to {}", count, path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigModuleStore => "Task store".to_string(),

            // === DEMO MESSAGES ===
            Message::DemoAddValid => "Adding a valid task:".to_string(),
            Message::DemoAddSecond => "Adding another valid task:".to_string(),
            Message::DemoAddEmptyTitle => "Adding a task with an empty title:".to_string(),
            Message::DemoAddDuplicate => "Adding the first task again:".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptStoreFile => "Task store file".to_string(),
            Message::PromptStoreFailOnCorrupt => "Refuse to work with a corrupt task store?".to_string(),
            Message::PromptStorePretty => "Pretty-print the task store?".to_string(),
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
        };

        write!(f, "{}", text)
    }
}
