//! File-backed state: one JSON document holding the rate at `config.value`.
//!
//! Writes patch the parsed document in place so any other fields survive, and
//! replace the file through a temporary sibling so a crash never leaves a
//! truncated document behind.

use crate::core::config::STATE_FILE_NAME;
use crate::core::error::RateError;
use crate::core::state::{PersistedState, StateStore};
use serde_json::{Map, Value, json};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

const SECTION_KEY: &str = "config";
const VALUE_KEY: &str = "value";

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the state file inside `dir`, creating the directory if needed.
    pub fn in_dir(dir: &Path) -> Result<Self, RateError> {
        Ok(Self::new(resolve_state_path(dir)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<String>, RateError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RateError::StorageUnavailable(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn parse_document(&self, content: &str) -> Result<Map<String, Value>, RateError> {
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(root)) => Ok(root),
            Ok(_) => Err(RateError::CorruptState(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(RateError::CorruptState(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// Keeps the mode of an existing file; new files are world-readable.
    fn target_permissions(&self) -> Option<fs::Permissions> {
        match fs::metadata(&self.path) {
            Ok(metadata) if metadata.is_file() => Some(metadata.permissions()),
            _ => default_permissions(),
        }
    }

    fn write_atomically(&self, bytes: &[u8]) -> Result<(), RateError> {
        let storage_err = |e: std::io::Error| {
            RateError::StorageUnavailable(format!("failed to write {}: {e}", self.path.display()))
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(storage_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(storage_err)?;
        if let Some(permissions) = self.target_permissions() {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(storage_err)?;
        }
        tmp.write_all(bytes).map_err(storage_err)?;
        tmp.as_file().sync_all().map_err(storage_err)?;
        tmp.persist(&self.path).map_err(|e| storage_err(e.error))?;
        Ok(())
    }
}

// Temp files are created 0600
#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Computes `<dir>/data.json`, creating `dir` when it is missing.
pub fn resolve_state_path(dir: &Path) -> Result<PathBuf, RateError> {
    fs::create_dir_all(dir).map_err(|e| {
        RateError::StorageUnavailable(format!(
            "failed to create app config directory {}: {e}",
            dir.display()
        ))
    })?;
    Ok(dir.join(STATE_FILE_NAME))
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<PersistedState, RateError> {
        let Some(content) = self.read_document()? else {
            debug!("No state at {}, starting from zero", self.path.display());
            return Ok(PersistedState::default());
        };

        let root = self.parse_document(&content)?;
        let value = root
            .get(SECTION_KEY)
            .and_then(|section| section.get(VALUE_KEY))
            .ok_or_else(|| {
                RateError::CorruptState(format!(
                    "key '{SECTION_KEY}.{VALUE_KEY}' not found in {}",
                    self.path.display()
                ))
            })?;

        let value = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            RateError::CorruptState(format!(
                "key '{SECTION_KEY}.{VALUE_KEY}' is not a number: {value}"
            ))
        })?;

        debug!(value, "Loaded state from {}", self.path.display());
        Ok(PersistedState { value })
    }

    fn save(&self, state: &PersistedState) -> Result<(), RateError> {
        let content = match self.read_document() {
            Ok(content) => content.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Existing state unreadable, starting from an empty document");
                String::new()
            }
        };
        let mut root = self.parse_document(&content)?;

        let section = root
            .entry(SECTION_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            *section = Value::Object(Map::new());
        }
        section[VALUE_KEY] = json!(state.value);

        let bytes = serde_json::to_vec_pretty(&Value::Object(root))
            .map_err(|e| RateError::StorageUnavailable(e.to_string()))?;
        self.write_atomically(&bytes)?;

        debug!(value = state.value, "Saved state to {}", self.path.display());
        Ok(())
    }
}
