//! lifecycle/reset — сброс всей истории версий к одной рабочей версии.
//!
//! Деструктивно и необратимо: удаляются versioned_docs/, versioned_sidebars/,
//! versions.json; package.json получает целевую версию; versions.config.json
//! (best-effort) сводится к одной записи `current` с label = целевая версия.

use log::{info, warn};
use serde::Serialize;

use super::core::{note, required_label, ConfigUpdate, Lifecycle};
use crate::error::{LifecycleError, Result, Warning};
use crate::fsio::remove_tree_if_exists;
use crate::label::VersionLabel;
use crate::metadata::ProjectMetadata;
use crate::registry::VersionRegistry;
use crate::site_config::VersionsConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ResetReport {
    pub target: VersionLabel,
    /// Labels of snapshot directories that were on disk before the reset.
    pub removed_snapshots: Vec<String>,
    pub registry_removed: bool,
    pub config: ConfigUpdate,
    pub warnings: Vec<Warning>,
}

impl Lifecycle {
    /// Collapse the site to the single working version `target_version`.
    pub fn reset(&self, target_version: &str) -> Result<ResetReport> {
        let target = required_label("target version", target_version)?;

        warn!(
            "this will delete ALL historical versions and reset the project to single version '{}'",
            target
        );

        let _lock = self.lock()?;
        let layout = self.layout();
        let mut warnings = Vec::new();

        // 1) снапшоты и sidebars целиком
        let docs_dir = layout.versioned_docs_dir();
        let removed_snapshots = layout
            .snapshot_dirs_on_disk()
            .map_err(|e| LifecycleError::io(&docs_dir, e))?;
        if remove_tree_if_exists(&docs_dir)? {
            info!("removed {}", docs_dir.display());
        }
        let sidebars_dir = layout.versioned_sidebars_dir();
        if remove_tree_if_exists(&sidebars_dir)? {
            info!("removed {}", sidebars_dir.display());
        }

        // 2) versions.json
        let reg_path = layout.registry_path();
        let registry_removed = VersionRegistry::delete(&reg_path)?;
        if registry_removed {
            info!("removed {}", reg_path.display());
        }

        // 3) package.json (создаётся, если его не было)
        let meta_path = layout.metadata_path();
        let mut meta = ProjectMetadata::load_opt(&meta_path)?
            .unwrap_or_else(|| ProjectMetadata::empty(&meta_path));
        meta.set_version(target.as_str());
        meta.save()?;
        info!("updated {} version to {}", meta_path.display(), target);

        // 4) versions config -> single `current`
        let cfg_path = layout.versions_config_path();
        let config = match VersionsConfig::load(&cfg_path)?.into_warning() {
            Ok(_) => {
                VersionsConfig::single_current(&cfg_path, &target).save()?;
                info!("updated {}: reset versions configuration", cfg_path.display());
                ConfigUpdate::Updated
            }
            Err(w) => {
                note(&mut warnings, w);
                ConfigUpdate::Skipped
            }
        };

        Ok(ResetReport {
            target,
            removed_snapshots,
            registry_removed,
            config,
            warnings,
        })
    }
}
