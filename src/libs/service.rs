//! Task creation pipeline.
//!
//! [`TaskService::add_task`] validates the input, then under the store's
//! writer lock loads the collection, rejects duplicates, builds the task with
//! the next id and saves the collection back. Validation failures return
//! before the store is opened.

use super::duplicate::is_duplicate;
use super::error::TaskError;
use super::messages::Message;
use super::task::{next_id, Priority, Task};
use super::validator::{is_valid_title, parse_due_date};
use crate::db::tasks::Tasks;
use crate::{msg_debug, msg_error, msg_success};
use chrono::{Local, NaiveDateTime};

pub struct TaskService {
    store: Tasks,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl TaskService {
    pub fn new(store: Tasks) -> Self {
        TaskService { store, clock: local_now }
    }

    /// Uses `clock` instead of the local wall clock to stamp new tasks.
    pub fn with_clock(store: Tasks, clock: fn() -> NaiveDateTime) -> Self {
        TaskService { store, clock }
    }

    /// Creates and persists a task.
    ///
    /// Every failure is reported on the error channel and returned; the
    /// returned task is always the one that was written to the store.
    pub fn add_task(&self, title: &str, description: &str, due_date: &str, priority: &str) -> Result<Task, TaskError> {
        match self.try_add(title, description, due_date, priority) {
            Ok(task) => {
                msg_success!(Message::TaskCreated(task.id, task.title.clone()));
                Ok(task)
            }
            Err(error) => {
                msg_error!(error.message());
                Err(error)
            }
        }
    }

    fn try_add(&self, title: &str, description: &str, due_date: &str, priority: &str) -> Result<Task, TaskError> {
        if !is_valid_title(title) {
            return Err(TaskError::EmptyTitle);
        }
        let due = parse_due_date(due_date)?;
        let priority = Priority::parse(priority)?;

        let _guard = self.store.lock();
        let mut tasks = self.store.load()?;

        if is_duplicate(&tasks, title, due) {
            return Err(TaskError::DuplicateTask {
                title: title.to_string(),
                due_date: due_date.to_string(),
            });
        }

        let task = Task::new_at(next_id(&tasks), title, description, due, priority, (self.clock)());
        msg_debug!(format!("Assigned id {} to '{}'", task.id, task.title));
        tasks.push(task.clone());
        self.store.save(&tasks)?;

        Ok(task)
    }
}
