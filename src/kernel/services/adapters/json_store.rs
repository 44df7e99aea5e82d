//! JSON file document database.
//!
//! The file holds one top-level object whose keys are document paths. Only the
//! value under `key` is read or replaced; sibling documents are preserved.

use crate::kernel::services::ports::{DocumentStore, StoreError};
use crate::models::AboutUs;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct JsonDocumentStore {
    path: PathBuf,
    key: String,
    max_depth: usize,
    // Serializes read-modify-write cycles on the database file.
    write_lock: Mutex<()>,
}

impl JsonDocumentStore {
    /// `max_depth` below 1 is raised to 1 so a single root level always fits.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>, max_depth: usize) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            max_depth: max_depth.max(1),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn read_root(&self) -> Result<Map<String, Value>, StoreError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };
        if data.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&data)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            _ => Err(StoreError::Unavailable(format!(
                "{} does not contain a json object",
                self.path.display()
            ))),
        }
    }

    fn write_root(&self, root: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(root)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl DocumentStore for JsonDocumentStore {
    fn fetch(&self) -> Result<Option<AboutUs>, StoreError> {
        let mut root = self.read_root()?;
        let value = match root.remove(&self.key) {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => value,
        };
        let doc: AboutUs = serde_json::from_value(value)?;
        doc.organization_structure.validate(self.max_depth)?;
        tracing::info!(
            path = %self.path.display(),
            key = %self.key,
            nodes = doc.organization_structure.len(),
            levels = doc.organization_structure.depth(),
            "document fetched"
        );
        Ok(Some(doc))
    }

    fn replace(&self, doc: &AboutUs) -> Result<AboutUs, StoreError> {
        doc.organization_structure.validate(self.max_depth)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("write lock poisoned".to_string()))?;
        let mut root = self.read_root()?;
        root.insert(self.key.clone(), serde_json::to_value(doc)?);
        self.write_root(&root)?;
        tracing::info!(path = %self.path.display(), key = %self.key, "document replaced");
        Ok(doc.clone())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/json_store.rs"]
mod tests;
