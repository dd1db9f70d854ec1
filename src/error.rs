//! Error and warning types for lifecycle operations.
//!
//! Fatal failures are `LifecycleError`; missing artifacts and unmatched config
//! blocks are `Warning`s collected into the operation reports.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Fatal lifecycle failure. Any of these maps to exit code 1 in the CLI.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Missing or empty required argument.
    #[error("{0}")]
    Usage(String),

    /// Label that cannot be used as a directory suffix.
    #[error("invalid version label {label:?}: {reason}")]
    InvalidLabel { label: String, reason: &'static str },

    /// Recorded project version differs from the version being frozen.
    #[error(
        "version mismatch: trying to freeze {requested:?}, but the current project version is {current:?}"
    )]
    VersionMismatch { requested: String, current: String },

    /// External (or builtin) snapshot generation failed.
    #[error("snapshot for {version:?} failed: {reason}")]
    SnapshotFailed { version: String, reason: String },

    /// Project metadata is missing or is not a JSON object.
    #[error("project metadata {}: {reason}", path.display())]
    Metadata { path: PathBuf, reason: String },

    /// Another lifecycle operation holds the lock.
    #[error("site root is locked by another operation ({})", path.display())]
    Locked { path: PathBuf },

    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;

impl LifecycleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Kind of artifact a lifecycle step expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Registry,
    Snapshot,
    Sidebar,
    VersionsConfig,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArtifactKind::Registry => "version registry",
            ArtifactKind::Snapshot => "versioned docs",
            ArtifactKind::Sidebar => "versioned sidebar",
            ArtifactKind::VersionsConfig => "versions config",
        };
        f.write_str(s)
    }
}

/// Non-fatal condition: the operation continued, the operator may need to follow up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    MissingArtifact { artifact: ArtifactKind, path: PathBuf },
    ConfigPatternNotFound { path: PathBuf, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingArtifact { artifact, path } => {
                write!(f, "{} not found at {}", artifact, path.display())
            }
            Warning::ConfigPatternNotFound { path, reason } => write!(
                f,
                "could not update {} ({}); please check the versions config manually",
                path.display(),
                reason
            ),
        }
    }
}
