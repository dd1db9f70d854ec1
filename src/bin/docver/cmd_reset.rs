use anyhow::{Context, Result};

use docver::{DocverConfig, Lifecycle};

use crate::util::{describe_config, print_warnings, require};

/// Деструктивный сброс к одной версии. Подтверждения нет — только предупреждение в логе.
pub fn exec(cfg: &DocverConfig, target_version: Option<String>) -> Result<()> {
    let target = require(
        target_version,
        "Usage: docver reset <target_single_version>",
        "docver reset 0.5.x",
    )?;

    let report = Lifecycle::from_config(cfg)
        .reset(&target)
        .with_context(|| format!("reset to '{}' at {}", target, cfg.root.display()))?;

    println!("---------------------------------------------------");
    println!("Reset Complete. The project is now single-version: {}", report.target);
    if !report.removed_snapshots.is_empty() {
        println!("- Removed snapshots: {}", report.removed_snapshots.join(", "));
    }
    println!("- Configuration: {}", describe_config(report.config));
    print_warnings(&report.warnings);
    Ok(())
}
