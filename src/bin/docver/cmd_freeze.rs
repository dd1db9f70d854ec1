use anyhow::{Context, Result};

use docver::{DocverConfig, Lifecycle};

use crate::util::{describe_config, print_warnings, require};

const USAGE: &str = "Usage: docver freeze <version_to_freeze> <next_dev_version>";
const EXAMPLE: &str = "docver freeze 0.5.x 0.6.x";

/// Заморозить текущую версию и перейти на следующую dev-версию.
pub fn exec(
    cfg: &DocverConfig,
    version_to_freeze: Option<String>,
    next_dev_version: Option<String>,
) -> Result<()> {
    let frozen = require(version_to_freeze, USAGE, EXAMPLE)?;
    let next = require(next_dev_version, USAGE, EXAMPLE)?;

    let generator = cfg.snapshot_generator();
    let report = Lifecycle::from_config(cfg)
        .freeze(&frozen, &next, generator.as_ref())
        .with_context(|| format!("release {} at {}", frozen, cfg.root.display()))?;

    println!("---------------------------------------------------");
    println!("Release Complete!");
    println!("- Frozen Version: {} (saved in versioned_docs/)", report.frozen);
    println!("- Created Next Version: {} (active in docs/)", report.next);
    println!("- Configuration: {}", describe_config(report.config));
    print_warnings(&report.warnings);
    Ok(())
}
