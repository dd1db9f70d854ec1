use anyhow::{Context, Result};

use docver::{DocverConfig, Lifecycle};

use crate::util::{describe_config, print_warnings, require};

pub fn exec(cfg: &DocverConfig, version: Option<String>) -> Result<()> {
    let version = require(
        version,
        "Usage: docver remove <version>",
        "docver remove 0.4.x",
    )?;

    let report = Lifecycle::from_config(cfg)
        .remove(&version)
        .with_context(|| format!("remove version '{}' at {}", version, cfg.root.display()))?;

    println!("Removed version {}", report.version);
    println!("  registry       = {}", if report.registry_updated { "updated" } else { "(not found)" });
    println!("  versioned docs = {}", if report.snapshot_removed { "removed" } else { "(not found)" });
    println!("  sidebar        = {}", if report.sidebar_removed { "removed" } else { "(not found)" });
    println!("  config         = {}", describe_config(report.config));
    print_warnings(&report.warnings);
    Ok(())
}
