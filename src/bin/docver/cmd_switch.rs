use anyhow::Result;

use docver::switch_path;

pub fn exec(current_path: &str, active_prefix: &str, target_prefix: &str) -> Result<()> {
    println!("{}", switch_path(current_path, active_prefix, target_prefix));
    Ok(())
}
