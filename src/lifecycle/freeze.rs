//! lifecycle/freeze — заморозка рабочей версии (release).
//!
//! Порядок:
//! 1) Валидация аргументов и сверка с версией в package.json (до любых изменений).
//! 2) Генерация снапшота (внешняя команда или builtin). Ошибка — стоп, без отката.
//! 3) package.json: version = next.
//! 4) Best-effort: запись для замороженной версии в versions.config.json сразу после `current`,
//!    label записи `current` (если задан) -> next.

use log::info;
use serde::Serialize;

use super::core::{note, required_label, ConfigUpdate, Lifecycle};
use crate::consts::MISSING_PROJECT_VERSION;
use crate::error::{LifecycleError, Result, Warning};
use crate::label::VersionLabel;
use crate::metadata::ProjectMetadata;
use crate::site_config::{InsertOutcome, VersionsConfig};
use crate::snapshot::SnapshotGenerator;

#[derive(Debug, Clone, Serialize)]
pub struct FreezeReport {
    pub frozen: VersionLabel,
    pub next: VersionLabel,
    pub config: ConfigUpdate,
    pub warnings: Vec<Warning>,
}

impl Lifecycle {
    /// Freeze `version_to_freeze` and advance the working tree to `next_dev_version`.
    ///
    /// Fails with `VersionMismatch` (nothing touched) when the recorded project
    /// version differs, and with `SnapshotFailed` when the generator fails; in the
    /// latter case the metadata and config are left as they were.
    pub fn freeze(
        &self,
        version_to_freeze: &str,
        next_dev_version: &str,
        generator: &dyn SnapshotGenerator,
    ) -> Result<FreezeReport> {
        let frozen = required_label("version to freeze", version_to_freeze)?;
        let next = required_label("next dev version", next_dev_version)?;

        let _lock = self.lock()?;
        let layout = self.layout();

        // 1) сверка версии
        let mut meta = ProjectMetadata::load(&layout.metadata_path())?;
        // нет поля version — такое же расхождение, как и другая версия
        let current = meta.version().unwrap_or(MISSING_PROJECT_VERSION);
        if current != frozen.as_str() {
            return Err(LifecycleError::VersionMismatch {
                requested: frozen.to_string(),
                current: current.to_string(),
            });
        }

        // 2) снапшот
        info!("freezing current docs as {} ({})", frozen, generator.describe());
        generator.generate(layout, &frozen)?;

        // 3) следующая dev-версия
        info!("creating next version {} (updating {})", next, meta.path().display());
        meta.set_version(next.as_str());
        meta.save()?;

        // 4) versions config
        let mut warnings = Vec::new();
        let config = match VersionsConfig::load(&layout.versions_config_path())?.into_warning() {
            Ok(mut cfg) => match cfg.insert_after_current(&frozen) {
                InsertOutcome::NoCurrentEntry => {
                    note(
                        &mut warnings,
                        Warning::ConfigPatternNotFound {
                            path: cfg.path().to_path_buf(),
                            reason: "no `current` entry".to_string(),
                        },
                    );
                    ConfigUpdate::Skipped
                }
                outcome => {
                    let inserted = outcome == InsertOutcome::Inserted;
                    let relabeled = cfg.set_current_label(&next);
                    if inserted || relabeled {
                        cfg.save()?;
                        if inserted {
                            info!(
                                "updated {}: added entry for version '{}'",
                                cfg.path().display(),
                                frozen
                            );
                        }
                        if relabeled {
                            info!("updated {}: current label -> '{}'", cfg.path().display(), next);
                        }
                        ConfigUpdate::Updated
                    } else {
                        ConfigUpdate::Unchanged
                    }
                }
            },
            Err(w) => {
                note(&mut warnings, w);
                ConfigUpdate::Skipped
            }
        };

        Ok(FreezeReport {
            frozen,
            next,
            config,
            warnings,
        })
    }
}
