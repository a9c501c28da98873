use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::FootprintResult;

/// Well-known key the latest result is stored under.
pub const RESULTS_KEY: &str = "carbonResults";

/// Persisted form of a [`FootprintResult`]: every value as a 2-decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub total: String,
    pub food: String,
    pub transport: String,
    pub home: String,
}

impl StoredRecord {
    /// Parse the stored strings back into typed values.
    pub fn parse(&self) -> Result<FootprintResult, StorageError> {
        Ok(FootprintResult {
            food: parse_field("food", &self.food)?,
            transport: parse_field("transport", &self.transport)?,
            home: parse_field("home", &self.home)?,
            total: parse_field("total", &self.total)?,
        })
    }
}

impl From<&FootprintResult> for StoredRecord {
    fn from(result: &FootprintResult) -> Self {
        Self {
            total: format!("{:.2}", result.total),
            food: format!("{:.2}", result.food),
            transport: format!("{:.2}", result.transport),
            home: format!("{:.2}", result.home),
        }
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, StorageError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| StorageError::Corrupt {
            field,
            value: raw.to_string(),
        })
}

/// Single-slot storage shared by the submit and dashboard paths.
///
/// `save` replaces whatever was stored before. Nothing in this crate clears
/// the slot.
pub trait ResultStore: Send + Sync {
    fn save(&self, record: StoredRecord) -> Result<(), StorageError>;
    fn load(&self) -> Result<Option<StoredRecord>, StorageError>;
}

/// Error enumeration for result store failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unable to access result store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("result store document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("stored {field} value '{value}' is not a number")]
    Corrupt { field: &'static str, value: String },
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}

/// Process-local slot, used by tests and the `memory` store backend.
#[derive(Debug, Default, Clone)]
pub struct InMemoryResultStore {
    slot: Arc<Mutex<Option<StoredRecord>>>,
}

impl InMemoryResultStore {
    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Option<StoredRecord>>, StorageError> {
        self.slot
            .lock()
            .map_err(|_| StorageError::Unavailable("result slot mutex poisoned".to_string()))
    }
}

impl ResultStore for InMemoryResultStore {
    fn save(&self, record: StoredRecord) -> Result<(), StorageError> {
        *self.guard()? = Some(record);
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredRecord>, StorageError> {
        Ok(self.guard()?.clone())
    }
}

/// Key/value JSON document on disk holding the record under [`RESULTS_KEY`].
///
/// Other keys in the document are left untouched on save.
#[derive(Debug, Clone)]
pub struct JsonFileResultStore {
    path: PathBuf,
}

impl JsonFileResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_document(&self) -> Result<Map<String, Value>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }
}

impl ResultStore for JsonFileResultStore {
    fn save(&self, record: StoredRecord) -> Result<(), StorageError> {
        let mut document = self.read_document()?;
        document.insert(RESULTS_KEY.to_string(), serde_json::to_value(record)?);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let payload = serde_json::to_string_pretty(&Value::Object(document))?;
        fs::write(&self.path, payload).map_err(|err| self.io_error(err))
    }

    fn load(&self) -> Result<Option<StoredRecord>, StorageError> {
        let mut document = self.read_document()?;
        match document.remove(RESULTS_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}
