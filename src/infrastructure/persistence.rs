use crate::domain::Todo;
use log::debug;
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Default location of the persisted todo document.
pub const DEFAULT_STORE_PATH: &str = "todos.json";

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Io(String),
    Serde(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "storage I/O error: {}", msg),
            StorageError::Serde(msg) => write!(f, "invalid todo data: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage collaborator for the todo collection.
///
/// `load` is called once at startup; `save` rewrites the full serialized
/// sequence after every committed mutation, unconditionally overwriting
/// prior content. Implementations are synchronous; the application is
/// single-threaded and no external writer is assumed.
pub trait TodoStore {
    fn load(&self) -> StorageResult<Vec<Todo>>;
    fn save(&self, todos: &[Todo]) -> StorageResult<()>;
}

/// File-backed store holding one JSON array of todos.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoStore for JsonFileStore {
    /// Reads the stored collection.
    ///
    /// A missing file is a normal first run and yields an empty collection.
    /// An unreadable or unparseable file is an error; the caller decides how
    /// to degrade (the application starts empty rather than halting).
    fn load(&self) -> StorageResult<Vec<Todo>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no todo file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };
        serde_json::from_str(&content).map_err(|err| StorageError::Serde(err.to_string()))
    }

    fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(todos)
            .map_err(|err| StorageError::Serde(err.to_string()))?;
        fs::write(&self.path, json).map_err(|err| StorageError::Io(err.to_string()))?;
        debug!("saved {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }
}

/// Store backed by a single in-memory string slot.
///
/// Keeps the same serialized-document semantics as [`JsonFileStore`] so the
/// application layer can be exercised without touching the filesystem.
/// Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw serialized document, if any has been written.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Replaces the raw document, bypassing serialization.
    pub fn set_raw(&self, value: impl Into<String>) {
        *self.slot.borrow_mut() = Some(value.into());
    }
}

impl TodoStore for InMemoryStore {
    fn load(&self) -> StorageResult<Vec<Todo>> {
        match self.slot.borrow().as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(raw).map_err(|err| StorageError::Serde(err.to_string()))
            }
        }
    }

    fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(todos)
            .map_err(|err| StorageError::Serde(err.to_string()))?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}
