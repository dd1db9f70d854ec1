//! Centralized configuration for docver.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - `DocverConfig::from_env()` reads the env vars below; CLI flags override them
//!   through the fluent `with_*` setters.
//!
//! Env:
//! - DOCVER_ROOT         — site root (default ".")
//! - DOCVER_SNAPSHOT_CMD — snapshot command template, `{version}` placeholder,
//!   or `builtin` (default `npm run docusaurus docs:version {version}`).
//!   Split on whitespace, no shell: quoted arguments are not supported.
//! - DOCVER_ROUTE_BASE   — docs route base used by the version switcher (default "/docs")
//! - DOCVER_LOCK         — 0|1|true|false, take the exclusive lock (default true)

use std::fmt;
use std::path::PathBuf;

use crate::consts::{DEFAULT_ROUTE_BASE, DEFAULT_SNAPSHOT_CMD};
use crate::layout::SiteLayout;
use crate::snapshot::{generator_from_command, SnapshotGenerator};

#[derive(Clone, Debug)]
pub struct DocverConfig {
    /// Site root containing package.json, docs/, versions.json.
    /// Env: DOCVER_ROOT
    pub root: PathBuf,

    /// Snapshot command template.
    /// Env: DOCVER_SNAPSHOT_CMD
    pub snapshot_cmd: String,

    /// Route base of the docs plugin (`routeBasePath`).
    /// Env: DOCVER_ROUTE_BASE
    pub route_base: String,

    /// Take <root>/.docver.lock for mutating operations.
    /// Env: DOCVER_LOCK
    pub use_lock: bool,
}

impl Default for DocverConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            snapshot_cmd: DEFAULT_SNAPSHOT_CMD.to_string(),
            route_base: DEFAULT_ROUTE_BASE.to_string(),
            use_lock: true,
        }
    }
}

fn env_flag(v: &str) -> bool {
    let s = v.trim().to_ascii_lowercase();
    s == "1" || s == "true" || s == "yes" || s == "on"
}

impl DocverConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("DOCVER_ROOT") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.root = PathBuf::from(s);
            }
        }

        if let Ok(v) = std::env::var("DOCVER_SNAPSHOT_CMD") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.snapshot_cmd = s.to_string();
            }
        }

        if let Ok(v) = std::env::var("DOCVER_ROUTE_BASE") {
            cfg.route_base = v.trim().to_string();
        }

        if let Ok(v) = std::env::var("DOCVER_LOCK") {
            cfg.use_lock = env_flag(&v);
        }

        cfg
    }

    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_snapshot_cmd<S: Into<String>>(mut self, cmd: S) -> Self {
        self.snapshot_cmd = cmd.into();
        self
    }

    pub fn with_route_base<S: Into<String>>(mut self, base: S) -> Self {
        self.route_base = base.into();
        self
    }

    pub fn with_lock(mut self, on: bool) -> Self {
        self.use_lock = on;
        self
    }

    pub fn layout(&self) -> SiteLayout {
        SiteLayout::new(&self.root)
    }

    pub fn snapshot_generator(&self) -> Box<dyn SnapshotGenerator> {
        generator_from_command(&self.snapshot_cmd)
    }
}

impl fmt::Display for DocverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DocverConfig {{ root: {}, snapshot_cmd: {}, route_base: {}, use_lock: {} }}",
            self.root.display(),
            self.snapshot_cmd,
            if self.route_base.is_empty() {
                "(empty)"
            } else {
                self.route_base.as_str()
            },
            self.use_lock,
        )
    }
}
