//! SiteLayout — пути всех известных артефактов относительно корня сайта.
//!
//! <root>/versions.json
//! <root>/versioned_docs/version-<label>/
//! <root>/versioned_sidebars/version-<label>-sidebars.json
//! <root>/package.json
//! <root>/versions.config.json
//! <root>/docs/, <root>/sidebars.json (working tree)

use std::path::{Path, PathBuf};

use crate::consts::{
    DOCS_DIR, LOCK_FILE, METADATA_FILE, SIDEBARS_FILE, SIDEBAR_FILE_SUFFIX, SNAPSHOT_DIR_PREFIX,
    VERSIONED_DOCS_DIR, VERSIONED_SIDEBARS_DIR, VERSIONS_CONFIG_FILE, VERSIONS_FILE,
};

#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.join(VERSIONS_FILE)
    }

    pub fn versioned_docs_dir(&self) -> PathBuf {
        self.root.join(VERSIONED_DOCS_DIR)
    }

    pub fn versioned_sidebars_dir(&self) -> PathBuf {
        self.root.join(VERSIONED_SIDEBARS_DIR)
    }

    /// versioned_docs/version-<label>
    pub fn snapshot_dir(&self, label: &str) -> PathBuf {
        self.versioned_docs_dir()
            .join(format!("{SNAPSHOT_DIR_PREFIX}{label}"))
    }

    /// versioned_sidebars/version-<label>-sidebars.json
    pub fn sidebar_path(&self, label: &str) -> PathBuf {
        self.versioned_sidebars_dir()
            .join(format!("{SNAPSHOT_DIR_PREFIX}{label}{SIDEBAR_FILE_SUFFIX}"))
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(METADATA_FILE)
    }

    pub fn versions_config_path(&self) -> PathBuf {
        self.root.join(VERSIONS_CONFIG_FILE)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(DOCS_DIR)
    }

    pub fn sidebars_path(&self) -> PathBuf {
        self.root.join(SIDEBARS_FILE)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILE)
    }

    /// Labels of snapshot directories present on disk (sorted), regardless of the registry.
    pub fn snapshot_dirs_on_disk(&self) -> std::io::Result<Vec<String>> {
        let dir = self.versioned_docs_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for e in std::fs::read_dir(&dir)? {
            let e = e?;
            if !e.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = e.file_name().to_str() {
                if let Some(label) = name.strip_prefix(SNAPSHOT_DIR_PREFIX) {
                    out.push(label.to_string());
                }
            }
        }
        out.sort();
        Ok(out)
    }
}
