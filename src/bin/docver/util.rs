use anyhow::Result;
use serde::Serialize;

use docver::{ConfigUpdate, LifecycleError, Warning};

/// Обязательный позиционный аргумент: отсутствие — UsageError с примером вызова.
pub fn require(arg: Option<String>, usage: &str, example: &str) -> Result<String> {
    match arg {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(LifecycleError::Usage(format!("{usage}\nExample: {example}")).into()),
    }
}

pub fn print_json<T: Serialize>(v: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(v)?);
    Ok(())
}

pub fn describe_config(update: ConfigUpdate) -> &'static str {
    match update {
        ConfigUpdate::Updated => "auto-updated",
        ConfigUpdate::Unchanged => "unchanged",
        ConfigUpdate::Skipped => "NOT updated, check manually",
    }
}

pub fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    println!("Warnings: {}", warnings.len());
    for w in warnings {
        println!("  - {w}");
    }
}
