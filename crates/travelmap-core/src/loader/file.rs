// crates/travelmap-core/src/loader/file.rs
use super::common_io;
use crate::error::{Result, TravelError};
use crate::traits::StateStorage;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Stores the export document as a JSON file.
///
/// Paths ending in `.gz` are gzip-compressed when the `compact` feature is
/// on. Writes go to a sibling temp file first and are renamed into place,
/// so a failed save never truncates the previous state.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Write compact JSON instead of indented JSON.
    pub fn compact_json(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "state".to_owned());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

impl StateStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no state file yet");
            return Ok(None);
        }
        let mut reader = common_io::open_stream(&self.path)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&text).map_err(|e| {
            TravelError::MalformedImport(format!("{}: {e}", self.path.display()))
        })?;
        Ok(Some(value))
    }

    fn save(&self, payload: &Value) -> Result<()> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(payload)?
        } else {
            serde_json::to_vec(payload)?
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.temp_path();
        common_io::write_bytes(&tmp, &bytes, common_io::is_compressed(&self.path))?;
        fs::rename(&tmp, &self.path)?;
        tracing::trace!(path = %self.path.display(), bytes = bytes.len(), "wrote state file");
        Ok(())
    }
}
