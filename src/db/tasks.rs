//! JSON file store holding the whole task collection.
//!
//! The store is always read and rewritten wholesale. Writes go to a
//! temporary file next to the store and are renamed over it, so a crash
//! mid-write leaves the previous contents in place. Callers doing a
//! read-modify-write hold [`Tasks::lock`] for the whole sequence. The lock
//! is shared by every `Tasks` handle in the process that points at the same
//! file.

use crate::libs::config::{Config, StoreConfig};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_debug, msg_error, msg_warning};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tempfile::NamedTempFile;

/// Writer locks by resolved store path.
static WRITERS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

fn writer_for(path: &Path) -> Arc<Mutex<()>> {
    let mut writers = WRITERS.get_or_init(Default::default).lock();
    writers.entry(resolve(path)).or_default().clone()
}

/// Absolute form of `path` with its directory canonicalized when it exists,
/// so `./a/tasks.json` and `a/../a/tasks.json` resolve to the same key.
fn resolve(path: &Path) -> PathBuf {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let dir = fs::canonicalize(dir).unwrap_or_else(|_| match env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir.to_path_buf(),
    });
    match path.file_name() {
        Some(name) => dir.join(name),
        None => dir,
    }
}

pub struct Tasks {
    path: PathBuf,
    fail_on_corrupt: bool,
    pretty: bool,
    writer: Arc<Mutex<()>>,
}

impl Tasks {
    /// Opens the store described by the user configuration.
    pub fn new() -> anyhow::Result<Tasks> {
        let config = Config::read()?;
        Ok(Self::with_config(&config.store_config()))
    }

    pub fn with_config(config: &StoreConfig) -> Tasks {
        Tasks {
            path: config.path(),
            fail_on_corrupt: config.fail_on_corrupt,
            pretty: config.pretty,
            writer: writer_for(&config.path()),
        }
    }

    /// Opens a store at `path` with default settings.
    pub fn open(path: impl Into<PathBuf>) -> Tasks {
        Self::with_config(&StoreConfig {
            file: path.into().to_string_lossy().into_owned(),
            ..StoreConfig::default()
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Single-writer guard for load → modify → save sequences.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.writer.lock()
    }

    /// Reads every task in the store.
    ///
    /// A missing or blank file is an empty store. A file that cannot be read
    /// or parsed is reported and, unless `fail_on_corrupt` is set, also
    /// treated as empty.
    pub fn load(&self) -> Result<Vec<Task>, TaskError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                msg_debug!(Message::StoreLoaded(0, self.display_path()));
                return Ok(Vec::new());
            }
            Err(e) => return self.read_failed(e.to_string()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => {
                msg_debug!(Message::StoreLoaded(tasks.len(), self.display_path()));
                Ok(tasks)
            }
            Err(e) => self.read_failed(e.to_string()),
        }
    }

    /// Replaces the store contents with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        self.write_atomically(tasks).map_err(|e| TaskError::StorageWriteError {
            path: self.display_path(),
            reason: e.to_string(),
        })?;
        msg_debug!(Message::StoreSaved(tasks.len(), self.display_path()));
        Ok(())
    }

    fn write_atomically(&self, tasks: &[Task]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = if self.pretty {
            serde_json::to_string_pretty(tasks)?
        } else {
            serde_json::to_string(tasks)?
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn read_failed(&self, reason: String) -> Result<Vec<Task>, TaskError> {
        let error = TaskError::StorageReadError {
            path: self.display_path(),
            reason,
        };
        if self.fail_on_corrupt {
            return Err(error);
        }

        msg_error!(error.message());
        msg_warning!(Message::StoreTreatedAsEmpty(self.display_path()));
        Ok(Vec::new())
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
