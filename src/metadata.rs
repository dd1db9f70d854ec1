//! Project metadata (`package.json`) — holder of the in-progress version marker.
//!
//! Only the `version` field is interpreted; every other field is carried through
//! untouched and in its original order.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::consts::METADATA_VERSION_KEY;
use crate::error::{LifecycleError, Result};
use crate::fsio::{read_json_opt, write_json_atomic};

#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl ProjectMetadata {
    /// Прочитать metadata. Отсутствующий файл или не-объект — фатальная ошибка.
    pub fn load(path: &Path) -> Result<Self> {
        match Self::load_opt(path)? {
            Some(m) => Ok(m),
            None => Err(LifecycleError::Metadata {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            }),
        }
    }

    /// Прочитать metadata; `Ok(None)` если файла нет.
    pub fn load_opt(path: &Path) -> Result<Option<Self>> {
        let Some(value) = read_json_opt::<Value>(path)? else {
            return Ok(None);
        };
        match value {
            Value::Object(fields) => Ok(Some(Self {
                path: path.to_path_buf(),
                fields,
            })),
            _ => Err(LifecycleError::Metadata {
                path: path.to_path_buf(),
                reason: "top-level value is not an object".to_string(),
            }),
        }
    }

    /// Пустая metadata (только для reset поверх пустого дерева).
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            fields: Map::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current working version, if the field is present and a string.
    pub fn version(&self) -> Option<&str> {
        self.fields.get(METADATA_VERSION_KEY).and_then(Value::as_str)
    }

    pub fn set_version(&mut self, version: &str) {
        self.fields.insert(
            METADATA_VERSION_KEY.to_string(),
            Value::String(version.to_string()),
        );
    }

    pub fn save(&self) -> Result<()> {
        write_json_atomic(&self.path, &self.fields)
    }
}
