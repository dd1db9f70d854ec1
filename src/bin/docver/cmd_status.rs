use anyhow::{Context, Result};

use docver::{DocverConfig, Lifecycle};

use crate::util::print_json;

/// Print lifecycle state; --json prints one object.
pub fn exec(cfg: &DocverConfig, json: bool) -> Result<()> {
    let st = Lifecycle::from_config(cfg)
        .status()
        .with_context(|| format!("status at {}", cfg.root.display()))?;
    if json {
        return print_json(&st);
    }

    println!("Docs at {}", st.root.display());
    println!(
        "  project_version = {}",
        st.project_version.as_deref().unwrap_or("(none)")
    );
    match &st.registry {
        Some(r) if r.is_empty() => println!("  registry        = (empty)"),
        Some(r) => println!("  registry        = {}", r.join(", ")),
        None => println!("  registry        = (not found)"),
    }
    println!("  versions_config = {}", st.config_state);
    for v in &st.versions {
        println!(
            "  - {:<12} docs={} sidebar={} config={}",
            v.label,
            v.snapshot,
            v.sidebar,
            v.config_entry
                .map(|b| b.to_string())
                .unwrap_or_else(|| "?".to_string())
        );
    }

    let issues = st.issues();
    if issues.is_empty() {
        println!("OK");
    } else {
        println!("Issues: {}", issues.len());
        for i in issues {
            println!("  ! {i}");
        }
    }
    Ok(())
}
