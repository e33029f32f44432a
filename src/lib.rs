//! # Taskr - Task Keeper
//!
//! A command-line utility that validates tasks and records them in a local
//! JSON store.
//!
//! ## Features
//!
//! - **Validation**: Non-empty titles, strict `YYYY-MM-DD` due dates, fixed priorities
//! - **Duplicate Detection**: Same title (any case) on the same due date is rejected
//! - **Crash-Safe Store**: The task file is replaced atomically on every write
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskr::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
