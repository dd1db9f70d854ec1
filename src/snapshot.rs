//! Snapshot generation — the collaborator that turns the working tree into a
//! frozen version on disk.
//!
//! Two implementations:
//! - `CommandSnapshotGenerator`: runs an external command in the site root
//!   (default `npm run docusaurus docs:version {version}`), stdio inherited,
//!   blocks until exit. No timeout, no retry.
//! - `BuiltinSnapshotGenerator`: copies `docs/` and `sidebars.json` itself and
//!   prepends the label to `versions.json` — what `docs:version` does, without node.

use std::fs;
use std::path::Path;
use std::process::Command;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::consts::{BUILTIN_SNAPSHOT_CMD, SNAPSHOT_CMD_PLACEHOLDER};
use crate::error::{LifecycleError, Result};
use crate::fsio::{ensure_parent, write_json_atomic};
use crate::label::VersionLabel;
use crate::layout::SiteLayout;
use crate::registry::VersionRegistry;

/// Creates the frozen snapshot of the working tree for one version.
///
/// On success the snapshot directory, the sidebar descriptor and the registry
/// entry for `version` exist on disk. Any failure must be reported as
/// `LifecycleError::SnapshotFailed`.
pub trait SnapshotGenerator {
    fn generate(&self, layout: &SiteLayout, version: &VersionLabel) -> Result<()>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Pick a generator from a command template (`builtin` selects the in-process one).
pub fn generator_from_command(template: &str) -> Box<dyn SnapshotGenerator> {
    if template.trim() == BUILTIN_SNAPSHOT_CMD {
        Box::new(BuiltinSnapshotGenerator)
    } else {
        Box::new(CommandSnapshotGenerator::new(template))
    }
}

// -------------------- external command --------------------

#[derive(Debug, Clone)]
pub struct CommandSnapshotGenerator {
    template: String,
}

impl CommandSnapshotGenerator {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Program + args with `{version}` substituted; the version is appended
    /// when the template has no placeholder.
    ///
    /// The template is split on whitespace and run without a shell: quotes,
    /// pipes and `&&` are passed through literally. Wrap anything fancier in a
    /// script and point the template at it.
    pub fn argv(&self, version: &VersionLabel) -> Vec<String> {
        let mut argv: Vec<String> = self
            .template
            .split_whitespace()
            .map(|a| a.replace(SNAPSHOT_CMD_PLACEHOLDER, version.as_str()))
            .collect();
        if !self.template.contains(SNAPSHOT_CMD_PLACEHOLDER) {
            argv.push(version.to_string());
        }
        argv
    }
}

impl SnapshotGenerator for CommandSnapshotGenerator {
    fn generate(&self, layout: &SiteLayout, version: &VersionLabel) -> Result<()> {
        let argv = self.argv(version);
        let Some((program, args)) = argv.split_first() else {
            return Err(LifecycleError::SnapshotFailed {
                version: version.to_string(),
                reason: "snapshot command is empty".to_string(),
            });
        };

        info!("snapshot: running `{}` in {}", argv.join(" "), layout.root().display());
        let status = Command::new(program)
            .args(args)
            .current_dir(layout.root())
            .status()
            .map_err(|e| LifecycleError::SnapshotFailed {
                version: version.to_string(),
                reason: format!("failed to spawn `{program}`: {e}"),
            })?;

        if !status.success() {
            return Err(LifecycleError::SnapshotFailed {
                version: version.to_string(),
                reason: format!("`{}` exited with {}", argv.join(" "), status),
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("command `{}`", self.template)
    }
}

// -------------------- builtin copy --------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSnapshotGenerator;

impl BuiltinSnapshotGenerator {
    fn failed(version: &VersionLabel, e: impl std::fmt::Display) -> LifecycleError {
        LifecycleError::SnapshotFailed {
            version: version.to_string(),
            reason: e.to_string(),
        }
    }

    fn copy_tree(src: &Path, dst: &Path, version: &VersionLabel) -> Result<u64> {
        let mut files = 0u64;
        for entry in WalkDir::new(src) {
            let entry = entry.map_err(|e| Self::failed(version, e))?;
            let rel = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| Self::failed(version, e))?;
            let target = dst.join(rel);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| LifecycleError::io(&target, e))?;
            } else {
                fs::copy(entry.path(), &target).map_err(|e| LifecycleError::io(&target, e))?;
                files += 1;
            }
        }
        Ok(files)
    }
}

impl SnapshotGenerator for BuiltinSnapshotGenerator {
    fn generate(&self, layout: &SiteLayout, version: &VersionLabel) -> Result<()> {
        // любая ошибка копирования/записи — это провал снапшота
        Self::snapshot(layout, version).map_err(|e| match e {
            LifecycleError::SnapshotFailed { .. } => e,
            other => Self::failed(version, other),
        })
    }

    fn describe(&self) -> String {
        "builtin copy".to_string()
    }
}

impl BuiltinSnapshotGenerator {
    fn snapshot(layout: &SiteLayout, version: &VersionLabel) -> Result<()> {
        let docs = layout.docs_dir();
        if !docs.is_dir() {
            return Err(Self::failed(
                version,
                format!("working tree {} not found", docs.display()),
            ));
        }
        let snap = layout.snapshot_dir(version.as_str());
        if snap.exists() {
            return Err(Self::failed(
                version,
                format!("{} already exists", snap.display()),
            ));
        }

        // 1) docs/ -> versioned_docs/version-<v>/
        let files = Self::copy_tree(&docs, &snap, version)?;
        debug!("snapshot: copied {} file(s) into {}", files, snap.display());

        // 2) sidebars.json -> versioned_sidebars/version-<v>-sidebars.json
        let sidebar = layout.sidebar_path(version.as_str());
        ensure_parent(&sidebar)?;
        let src_sidebars = layout.sidebars_path();
        if src_sidebars.exists() {
            fs::copy(&src_sidebars, &sidebar).map_err(|e| LifecycleError::io(&sidebar, e))?;
        } else {
            warn!(
                "snapshot: {} not found, writing an empty sidebar descriptor",
                src_sidebars.display()
            );
            write_json_atomic(&sidebar, &serde_json::json!({}))?;
        }

        // 3) versions.json: новая версия — первой
        let reg_path = layout.registry_path();
        let mut reg = VersionRegistry::load(&reg_path)?.unwrap_or_default();
        reg.prepend(version);
        reg.save(&reg_path)?;

        info!("snapshot: {} frozen into {}", version, snap.display());
        Ok(())
    }
}
