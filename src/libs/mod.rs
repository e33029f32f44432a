//! Core library modules for taskr.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskr::db::tasks::Tasks;
//! use taskr::libs::service::TaskService;
//!
//! let service = TaskService::new(Tasks::open("tasks_database.json"));
//! let task = service.add_task("Buy milk", "2 litres", "2025-07-20", "High")?;
//! assert_eq!(task.id, 1);
//! # Ok::<(), taskr::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod duplicate;
pub mod error;
pub mod messages;
pub mod service;
pub mod task;
pub mod validator;
pub mod view;
