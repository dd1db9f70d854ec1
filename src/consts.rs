//! Общие константы раскладки сайта (registry, snapshots, metadata, config).

// -------- Registry --------
pub const VERSIONS_FILE: &str = "versions.json";

// -------- Frozen snapshots --------
pub const VERSIONED_DOCS_DIR: &str = "versioned_docs";
pub const VERSIONED_SIDEBARS_DIR: &str = "versioned_sidebars";
pub const SNAPSHOT_DIR_PREFIX: &str = "version-";
pub const SIDEBAR_FILE_SUFFIX: &str = "-sidebars.json";

// -------- Working tree --------
pub const DOCS_DIR: &str = "docs";
// Sidebar descriptor of the working tree, copied by the builtin snapshot generator.
pub const SIDEBARS_FILE: &str = "sidebars.json";

// -------- Project metadata --------
pub const METADATA_FILE: &str = "package.json";
pub const METADATA_VERSION_KEY: &str = "version";
// Reported as the current version when package.json has no `version` field.
pub const MISSING_PROJECT_VERSION: &str = "(none)";

// -------- Versions config (structured block) --------
pub const VERSIONS_CONFIG_FILE: &str = "versions.config.json";
pub const CURRENT_VERSION_NAME: &str = "current";

// -------- Lock --------
pub const LOCK_FILE: &str = ".docver.lock";

// -------- Snapshot command --------
pub const DEFAULT_SNAPSHOT_CMD: &str = "npm run docusaurus docs:version {version}";
pub const SNAPSHOT_CMD_PLACEHOLDER: &str = "{version}";
pub const BUILTIN_SNAPSHOT_CMD: &str = "builtin";

// -------- Version switcher --------
pub const DEFAULT_ROUTE_BASE: &str = "/docs";
pub const FALLBACK_CURRENT_LABEL: &str = "Next";
// Индекс версии без страницы отдаёт 404 — редиректим на landing-страницу.
pub const EMPTY_VERSION_INDEX: &[&str] = &["/docs/next", "/docs/next/"];
pub const EMPTY_VERSION_FALLBACK: &str = "/docs/next/learn";
