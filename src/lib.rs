// Базовые модули
pub mod config;
pub mod consts;
pub mod error;
pub mod label;
pub mod layout;
pub mod lock;

// Артефакты сайта: versions.json, package.json, versions.config.json
pub mod metadata;
pub mod registry;
pub mod site_config;

// Генерация снапшотов (внешняя команда / builtin)
pub mod snapshot;

// Операции freeze/remove/reset/status
pub mod lifecycle; // src/lifecycle/{mod,core,freeze,remove,reset,status}.rs

// Dropdown версий: меню + подстановка префикса пути
pub mod switcher;

mod fsio;

// Удобные реэкспорты
pub use config::DocverConfig;
pub use error::{ArtifactKind, LifecycleError, Warning};
pub use label::VersionLabel;
pub use layout::SiteLayout;
pub use lifecycle::{
    ConfigUpdate, FreezeReport, Lifecycle, RemoveReport, ResetReport, StatusReport,
};
pub use registry::VersionRegistry;
pub use snapshot::{BuiltinSnapshotGenerator, CommandSnapshotGenerator, SnapshotGenerator};
pub use switcher::{switch_path, VersionMenu, VersionOption};
