//! # JSON File Store
//!
//! The whole collection lives in one file as a pretty-printed JSON array
//! (4-space indent, non-ASCII left unescaped). Saves go to a sibling temp
//! file which is fsynced and then renamed over the data file.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::client::ClientRecord;

use super::backend::ClientStore;
use super::errors::{StoreError, StoreResult};

/// File-backed client store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    temp_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);
        Self { path, temp_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(records: &[ClientRecord]) -> StoreResult<Vec<u8>> {
        let mut buffer = Vec::with_capacity(256 * records.len().max(1));
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
        Ok(buffer)
    }
}

impl ClientStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<ClientRecord>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&content).map_err(|e| {
            StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, records: &[ClientRecord]) -> StoreResult<()> {
        let data = Self::encode(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Io(format!("failed to create {}: {}", parent.display(), e)))?;
        }

        let mut file = File::create(&self.temp_path).map_err(|e| {
            StoreError::Io(format!("failed to create {}: {}", self.temp_path.display(), e))
        })?;
        file.write_all(&data)
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::Io(format!("failed to write {}: {}", self.temp_path.display(), e)))?;

        fs::rename(&self.temp_path, &self.path).map_err(|e| {
            StoreError::Io(format!("failed to replace {}: {}", self.path.display(), e))
        })
    }
}
