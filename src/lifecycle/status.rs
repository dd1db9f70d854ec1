//! lifecycle/status — read-only consistency report.
//!
//! Не берёт lock и ничего не пишет.

use std::path::PathBuf;

use serde::Serialize;

use super::core::Lifecycle;
use crate::consts::CURRENT_VERSION_NAME;
use crate::error::{LifecycleError, Result};
use crate::metadata::ProjectMetadata;
use crate::registry::VersionRegistry;
use crate::site_config::{ConfigLoad, VersionsConfig};

/// Presence of the artifacts of one registered version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionStatus {
    pub label: String,
    pub snapshot: bool,
    pub sidebar: bool,
    /// `None` when the versions config could not be read.
    pub config_entry: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub root: PathBuf,
    pub project_version: Option<String>,
    /// `None` when versions.json does not exist.
    pub registry: Option<Vec<String>>,
    pub versions: Vec<VersionStatus>,
    /// Snapshot directories on disk that the registry does not list.
    pub orphan_snapshots: Vec<String>,
    /// Config entries (besides `current`) naming versions the registry does not list.
    pub unknown_config_entries: Vec<String>,
    /// "loaded" | "missing" | "unusable: <reason>"
    pub config_state: String,
}

impl StatusReport {
    /// Human-readable inconsistencies; empty when everything lines up.
    pub fn issues(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.project_version.is_none() {
            out.push("project metadata has no version".to_string());
        }
        for v in &self.versions {
            if !v.snapshot {
                out.push(format!("version {}: versioned docs missing", v.label));
            }
            if !v.sidebar {
                out.push(format!("version {}: versioned sidebar missing", v.label));
            }
            if v.config_entry == Some(false) {
                out.push(format!("version {}: no versions config entry", v.label));
            }
        }
        for o in &self.orphan_snapshots {
            out.push(format!("snapshot {o} is not listed in the registry"));
        }
        for u in &self.unknown_config_entries {
            out.push(format!("versions config entry {u} has no registered version"));
        }
        out
    }

    pub fn is_consistent(&self) -> bool {
        self.issues().is_empty()
    }
}

impl Lifecycle {
    pub fn status(&self) -> Result<StatusReport> {
        let layout = self.layout();

        let project_version = ProjectMetadata::load_opt(&layout.metadata_path())?
            .and_then(|m| m.version().map(str::to_string));

        let registry = VersionRegistry::load(&layout.registry_path())?
            .map(|r| r.versions().to_vec());
        let listed: &[String] = registry.as_deref().unwrap_or(&[]);

        let (config, config_state) = match VersionsConfig::load(&layout.versions_config_path())? {
            ConfigLoad::Loaded(cfg) => (Some(cfg), "loaded".to_string()),
            ConfigLoad::Missing(_) => (None, "missing".to_string()),
            ConfigLoad::Unusable { reason, .. } => (None, format!("unusable: {reason}")),
        };

        let versions = listed
            .iter()
            .map(|label| VersionStatus {
                label: label.clone(),
                snapshot: layout.snapshot_dir(label).is_dir(),
                sidebar: layout.sidebar_path(label).is_file(),
                config_entry: config.as_ref().map(|c| c.contains(label)),
            })
            .collect();

        let docs_dir = layout.versioned_docs_dir();
        let orphan_snapshots = layout
            .snapshot_dirs_on_disk()
            .map_err(|e| LifecycleError::io(&docs_dir, e))?
            .into_iter()
            .filter(|d| !listed.contains(d))
            .collect();

        let unknown_config_entries = config
            .as_ref()
            .map(|c| {
                c.names()
                    .filter(|n| *n != CURRENT_VERSION_NAME && !listed.iter().any(|l| l == n))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(StatusReport {
            root: layout.root().to_path_buf(),
            project_version,
            registry,
            versions,
            orphan_snapshots,
            unknown_config_entries,
            config_state,
        })
    }
}
