//! lifecycle/core — Lifecycle handle shared by all operations.

use log::warn;
use serde::Serialize;

use crate::config::DocverConfig;
use crate::error::{LifecycleError, Result, Warning};
use crate::label::VersionLabel;
use crate::layout::SiteLayout;
use crate::lock::{try_acquire_exclusive_lock, LockGuard};

/// What happened to the versions config during an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigUpdate {
    /// File rewritten.
    Updated,
    /// Nothing to change (entry already present / absent).
    Unchanged,
    /// File left untouched because it was missing or unusable; see warnings.
    Skipped,
}

/// Entry point for lifecycle operations on one site root.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    layout: SiteLayout,
    use_lock: bool,
}

impl Lifecycle {
    pub fn new(layout: SiteLayout) -> Self {
        Self {
            layout,
            use_lock: true,
        }
    }

    pub fn from_config(cfg: &DocverConfig) -> Self {
        Self {
            layout: cfg.layout(),
            use_lock: cfg.use_lock,
        }
    }

    pub fn with_lock(mut self, on: bool) -> Self {
        self.use_lock = on;
        self
    }

    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Эксклюзивный lock на время мутирующей операции (если включён).
    pub(crate) fn lock(&self) -> Result<Option<LockGuard>> {
        if !self.use_lock {
            return Ok(None);
        }
        try_acquire_exclusive_lock(&self.layout.lock_path()).map(Some)
    }
}

/// Validate a required positional argument as a version label.
pub(crate) fn required_label(what: &str, value: &str) -> Result<VersionLabel> {
    if value.trim().is_empty() {
        return Err(LifecycleError::Usage(format!("missing {what}")));
    }
    VersionLabel::parse(value)
}

/// Log a warning and keep it for the report.
pub(crate) fn note(warnings: &mut Vec<Warning>, w: Warning) {
    warn!("{w}");
    warnings.push(w);
}
