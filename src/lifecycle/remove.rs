//! lifecycle/remove — удаление одной замороженной версии.
//!
//! Три независимых шага (registry, versioned_docs, versioned_sidebars), каждый
//! не фатален при отсутствии цели — повторный вызов даёт то же состояние.
//! Дополнительно убирается запись версии из versions.config.json, если она есть.

use log::{debug, info};
use serde::Serialize;

use super::core::{note, required_label, ConfigUpdate, Lifecycle};
use crate::error::{ArtifactKind, Result, Warning};
use crate::fsio::{remove_file_if_exists, remove_tree_if_exists};
use crate::label::VersionLabel;
use crate::registry::VersionRegistry;
use crate::site_config::{ConfigLoad, VersionsConfig};

#[derive(Debug, Clone, Serialize)]
pub struct RemoveReport {
    pub version: VersionLabel,
    /// Registry rewritten (false if it was missing).
    pub registry_updated: bool,
    pub snapshot_removed: bool,
    pub sidebar_removed: bool,
    pub config: ConfigUpdate,
    pub warnings: Vec<Warning>,
}

impl Lifecycle {
    /// Remove a frozen version. Never fails because something is already gone.
    pub fn remove(&self, version: &str) -> Result<RemoveReport> {
        let version = required_label("version", version)?;

        let _lock = self.lock()?;
        let layout = self.layout();
        let mut warnings = Vec::new();

        info!("removing version {}", version);

        // 1) versions.json
        let reg_path = layout.registry_path();
        let registry_updated = match VersionRegistry::load(&reg_path)? {
            Some(mut reg) => {
                reg.remove(&version);
                reg.save(&reg_path)?;
                info!("updated {}", reg_path.display());
                true
            }
            None => {
                note(
                    &mut warnings,
                    Warning::MissingArtifact {
                        artifact: ArtifactKind::Registry,
                        path: reg_path,
                    },
                );
                false
            }
        };

        // 2) versioned_docs/version-<v>
        let snap = layout.snapshot_dir(version.as_str());
        let snapshot_removed = remove_tree_if_exists(&snap)?;
        if snapshot_removed {
            info!("removed {}", snap.display());
        } else {
            note(
                &mut warnings,
                Warning::MissingArtifact {
                    artifact: ArtifactKind::Snapshot,
                    path: snap,
                },
            );
        }

        // 3) versioned_sidebars/version-<v>-sidebars.json
        let sidebar = layout.sidebar_path(version.as_str());
        let sidebar_removed = remove_file_if_exists(&sidebar)?;
        if sidebar_removed {
            info!("removed {}", sidebar.display());
        } else {
            note(
                &mut warnings,
                Warning::MissingArtifact {
                    artifact: ArtifactKind::Sidebar,
                    path: sidebar,
                },
            );
        }

        // 4) versions.config.json (молча, если файла нет)
        let config = match VersionsConfig::load(&layout.versions_config_path())? {
            ConfigLoad::Loaded(mut cfg) => {
                if cfg.remove(version.as_str()) {
                    cfg.save()?;
                    info!("updated {}: dropped entry '{}'", cfg.path().display(), version);
                    ConfigUpdate::Updated
                } else {
                    ConfigUpdate::Unchanged
                }
            }
            ConfigLoad::Missing(path) => {
                debug!("{} not present, nothing to update", path.display());
                ConfigUpdate::Unchanged
            }
            ConfigLoad::Unusable { path, reason } => {
                note(
                    &mut warnings,
                    Warning::ConfigPatternNotFound { path, reason },
                );
                ConfigUpdate::Skipped
            }
        };

        Ok(RemoveReport {
            version,
            registry_updated,
            snapshot_removed,
            sidebar_removed,
            config,
            warnings,
        })
    }
}
