use anyhow::{Context, Result};

use docver::{DocverConfig, VersionMenu};

use crate::util::print_json;

/// Список версий для dropdown (текущая — первой).
pub fn exec(cfg: &DocverConfig, json: bool) -> Result<()> {
    let menu = VersionMenu::load(&cfg.layout(), &cfg.route_base)
        .with_context(|| format!("load versions at {}", cfg.root.display()))?;
    if json {
        return print_json(&menu.options);
    }
    for o in &menu.options {
        println!("{:<12} {:<12} {}", o.name, o.label, o.path);
    }
    Ok(())
}
