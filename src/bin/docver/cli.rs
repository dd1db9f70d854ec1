use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI управления версиями документации (freeze / remove / reset)
#[derive(Parser, Debug)]
#[command(
    name = "docver",
    version,
    about = "Documentation version lifecycle: freeze, remove and reset versioned docs",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Site root (package.json, docs/, versions.json). Env: DOCVER_ROOT
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Snapshot command template (`{version}` placeholder) or `builtin`.
    /// Split on whitespace and run without a shell. Env: DOCVER_SNAPSHOT_CMD
    #[arg(long, global = true)]
    pub snapshot_cmd: Option<String>,

    /// Do not take <root>/.docver.lock. Env: DOCVER_LOCK=0
    #[arg(long, global = true, default_value_t = false)]
    pub no_lock: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Freeze the current docs as <version_to_freeze> and move on to <next_dev_version>
    ///
    /// Пример:
    ///   docver freeze 0.5.x 0.6.x
    ///
    /// package.json "version" must equal <version_to_freeze>.
    #[command(alias = "release")]
    Freeze {
        version_to_freeze: Option<String>,
        next_dev_version: Option<String>,
    },
    /// Remove a frozen version (registry entry, versioned docs, versioned sidebar)
    ///
    /// Повторный вызов безопасен: отсутствующие артефакты дают только предупреждения.
    Remove { version: Option<String> },
    /// Delete ALL frozen versions and reset the project to a single version
    ///
    /// Пример:
    ///   docver reset 0.5.x
    Reset { target_version: Option<String> },
    /// List the versions offered by the docs version dropdown
    Versions {
        /// Docs route base (routeBasePath). Env: DOCVER_ROUTE_BASE
        #[arg(long)]
        route_base: Option<String>,
        /// JSON output (array)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute the path the version dropdown navigates to
    ///
    /// Пример:
    ///   docver switch-path /docs/0.4.x/learn /docs/0.4.x /docs
    SwitchPath {
        current_path: String,
        #[arg(allow_hyphen_values = true)]
        active_prefix: String,
        #[arg(allow_hyphen_values = true)]
        target_prefix: String,
    },
    /// Report registry / snapshots / sidebars / versions config consistency
    Status {
        /// JSON output (single object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
