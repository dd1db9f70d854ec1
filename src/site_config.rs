//! Versions block of the site configuration, kept as structured data.
//!
//! Файл `versions.config.json` импортируется конфигом сайта
//! (`versions: require('./versions.config.json')`) и имеет вид:
//! {
//!   "current": { "label": "0.5.x", "path": "", "banner": "none" },
//!   "0.4.x":   { "label": "0.4.x", "path": "0.4.x", "banner": "none" }
//! }
//!
//! Порядок ключей сохраняется (serde_json preserve_order). Неизвестные поля
//! записей переносятся без изменений, типизированный вид (`VersionEntry`) —
//! только для чтения и для новых записей.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::CURRENT_VERSION_NAME;
use crate::error::{ArtifactKind, LifecycleError, Result, Warning};
use crate::fsio::write_json_atomic;
use crate::label::VersionLabel;

/// Banner shown above the docs of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Banner {
    #[default]
    None,
    Unreleased,
    Unmaintained,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Display label. For `current` it tracks the project version (freeze/reset
    /// keep it in sync); when absent the runtime falls back to the project version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Path segment under the docs route base ("" = route base itself).
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub banner: Banner,
}

impl VersionEntry {
    /// Entry for a freshly frozen version: label and path equal the version name.
    pub fn frozen(label: &VersionLabel) -> Self {
        Self {
            label: Some(label.to_string()),
            path: label.to_string(),
            banner: Banner::None,
        }
    }

    /// Entry for the live working tree served at the route base.
    pub fn current_at_root(label: &VersionLabel) -> Self {
        Self {
            label: Some(label.to_string()),
            path: String::new(),
            banner: Banner::None,
        }
    }
}

/// Result of reading the versions config file.
#[derive(Debug)]
pub enum ConfigLoad {
    Loaded(VersionsConfig),
    /// File does not exist.
    Missing(PathBuf),
    /// File exists but is not a JSON object of entries.
    Unusable { path: PathBuf, reason: String },
}

impl ConfigLoad {
    /// Convert a non-loaded state into the warning the operation should report.
    pub fn into_warning(self) -> std::result::Result<VersionsConfig, Warning> {
        match self {
            ConfigLoad::Loaded(cfg) => Ok(cfg),
            ConfigLoad::Missing(path) => Err(Warning::MissingArtifact {
                artifact: ArtifactKind::VersionsConfig,
                path,
            }),
            ConfigLoad::Unusable { path, reason } => {
                Err(Warning::ConfigPatternNotFound { path, reason })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    Inserted,
    AlreadyPresent,
    NoCurrentEntry,
}

#[derive(Debug, Clone)]
pub struct VersionsConfig {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl VersionsConfig {
    /// Прочитать конфиг. IO-ошибки фатальны, формат — нет (`ConfigLoad::Unusable`).
    pub fn load(path: &Path) -> Result<ConfigLoad> {
        if !path.exists() {
            return Ok(ConfigLoad::Missing(path.to_path_buf()));
        }
        let bytes =
            std::fs::read(path).map_err(|e| LifecycleError::io(path, e))?;
        let value: Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => {
                return Ok(ConfigLoad::Unusable {
                    path: path.to_path_buf(),
                    reason: format!("not valid JSON: {e}"),
                })
            }
        };
        match value {
            Value::Object(entries) if entries.values().all(Value::is_object) => {
                Ok(ConfigLoad::Loaded(Self {
                    path: path.to_path_buf(),
                    entries,
                }))
            }
            Value::Object(_) => Ok(ConfigLoad::Unusable {
                path: path.to_path_buf(),
                reason: "every version entry must be an object".to_string(),
            }),
            _ => Ok(ConfigLoad::Unusable {
                path: path.to_path_buf(),
                reason: "top-level value is not an object".to_string(),
            }),
        }
    }

    /// Config with the single `current` entry pointing at the working tree.
    pub fn single_current(path: &Path, label: &VersionLabel) -> Self {
        let mut entries = Map::new();
        entries.insert(
            CURRENT_VERSION_NAME.to_string(),
            entry_value(&VersionEntry::current_at_root(label)),
        );
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Typed view of one entry; `None` if absent or malformed.
    pub fn entry(&self, name: &str) -> Option<VersionEntry> {
        self.entries
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Вставить запись для замороженной версии сразу после `current`.
    pub fn insert_after_current(&mut self, label: &VersionLabel) -> InsertOutcome {
        if self.contains(label.as_str()) {
            return InsertOutcome::AlreadyPresent;
        }
        if !self.contains(CURRENT_VERSION_NAME) {
            return InsertOutcome::NoCurrentEntry;
        }
        let old = std::mem::take(&mut self.entries);
        for (k, v) in old {
            let is_current = k == CURRENT_VERSION_NAME;
            self.entries.insert(k, v);
            if is_current {
                self.entries.insert(
                    label.to_string(),
                    entry_value(&VersionEntry::frozen(label)),
                );
            }
        }
        InsertOutcome::Inserted
    }

    /// Переписать `label` записи `current`, если он там задан. Записи без
    /// label не трогаем: их подпись и так берётся из версии проекта.
    /// Returns true if the entry changed.
    pub fn set_current_label(&mut self, label: &VersionLabel) -> bool {
        let Some(Value::Object(current)) = self.entries.get_mut(CURRENT_VERSION_NAME) else {
            return false;
        };
        match current.get_mut("label") {
            Some(slot) if slot.as_str() != Some(label.as_str()) => {
                *slot = Value::String(label.to_string());
                true
            }
            _ => false,
        }
    }

    /// Drop an entry; returns true if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    pub fn save(&self) -> Result<()> {
        write_json_atomic(&self.path, &self.entries)
    }
}

fn entry_value(e: &VersionEntry) -> Value {
    // VersionEntry содержит только строки/enum — сериализация не падает.
    serde_json::to_value(e).unwrap_or_else(|_| Value::Object(Map::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(json: &str) -> VersionsConfig {
        VersionsConfig {
            path: PathBuf::from("versions.config.json"),
            entries: serde_json::from_str(json).unwrap(),
        }
    }

    #[test]
    fn inserts_directly_after_current() {
        let mut c = cfg(r#"{"current":{"path":"","banner":"none"},"0.3.x":{"label":"0.3.x","path":"0.3.x","banner":"none"}}"#);
        let l = VersionLabel::parse("0.4.x").unwrap();
        assert_eq!(c.insert_after_current(&l), InsertOutcome::Inserted);
        assert_eq!(c.names().collect::<Vec<_>>(), ["current", "0.4.x", "0.3.x"]);
        assert_eq!(c.entry("0.4.x"), Some(VersionEntry::frozen(&l)));
        assert_eq!(c.insert_after_current(&l), InsertOutcome::AlreadyPresent);
    }

    #[test]
    fn no_current_entry_is_reported() {
        let mut c = cfg(r#"{"0.3.x":{"path":"0.3.x"}}"#);
        let l = VersionLabel::parse("0.4.x").unwrap();
        assert_eq!(c.insert_after_current(&l), InsertOutcome::NoCurrentEntry);
        assert!(!c.contains("0.4.x"));
    }

    #[test]
    fn current_label_is_rewritten_only_when_present() {
        let l = VersionLabel::parse("0.6.x").unwrap();
        let mut c = cfg(r#"{"current":{"label":"0.5.x","path":""}}"#);
        assert!(c.set_current_label(&l));
        assert_eq!(c.entry("current").and_then(|e| e.label), Some("0.6.x".to_string()));
        assert!(!c.set_current_label(&l));

        let mut c = cfg(r#"{"current":{"path":""}}"#);
        assert!(!c.set_current_label(&l));
        assert_eq!(c.entry("current").and_then(|e| e.label), None);
    }

    #[test]
    fn single_current_carries_the_label() {
        let l = VersionLabel::parse("0.9.x").unwrap();
        let c = VersionsConfig::single_current(Path::new("versions.config.json"), &l);
        assert_eq!(c.names().collect::<Vec<_>>(), ["current"]);
        assert_eq!(
            serde_json::to_value(&c.entries).unwrap(),
            serde_json::json!({"current": {"label": "0.9.x", "path": "", "banner": "none"}})
        );
    }

    #[test]
    fn remove_keeps_unknown_fields_of_other_entries() {
        let mut c = cfg(r#"{"current":{"path":"","noIndex":true},"0.3.x":{"path":"0.3.x"}}"#);
        assert!(c.remove("0.3.x"));
        let v = serde_json::to_value(&c.entries).unwrap();
        assert_eq!(v["current"]["noIndex"], Value::Bool(true));
    }
}
