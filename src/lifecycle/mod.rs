//! lifecycle — операции над версиями документации.
//!
//! Разделение по подмодулям:
//! - core.rs   — тип Lifecycle, lock-хэндлинг, валидация аргументов, общие отчёты
//! - freeze.rs — freeze/release: снапшот рабочего дерева + переход на следующую dev-версию
//! - remove.rs — удаление одной замороженной версии (идемпотентно)
//! - reset.rs  — сброс всей истории к одной рабочей версии (деструктивно)
//! - status.rs — read-only отчёт о согласованности registry/snapshots/sidebars/config

pub mod core;
pub mod freeze;
pub mod remove;
pub mod reset;
pub mod status;

pub use self::core::{ConfigUpdate, Lifecycle};
pub use freeze::FreezeReport;
pub use remove::RemoveReport;
pub use reset::ResetReport;
pub use status::{StatusReport, VersionStatus};
