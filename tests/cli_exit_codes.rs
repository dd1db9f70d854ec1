use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("docvertest-cli-{prefix}-{pid}-{t}-{id}"))
}

fn docver(root: &PathBuf, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_docver"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("DOCVER_ROOT")
        .env_remove("DOCVER_SNAPSHOT_CMD")
        .env("RUST_LOG", "warn")
        .output()?)
}

#[test]
fn missing_arguments_exit_1() -> Result<()> {
    let root = unique_root("usage");
    fs::create_dir_all(&root)?;
    let cases: [&[&str]; 4] = [&["freeze"], &["freeze", "0.5.x"], &["remove"], &["reset"]];
    for args in cases {
        let out = docver(&root, args)?;
        assert_eq!(out.status.code(), Some(1), "args {args:?}");
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("Usage: docver"), "stderr: {stderr}");
    }
    // неизвестная подкоманда — тоже 1, не 2
    assert_eq!(docver(&root, &["publish"])?.status.code(), Some(1));
    Ok(())
}

#[test]
fn freeze_mismatch_exit_1_and_builtin_freeze_exit_0() -> Result<()> {
    let root = unique_root("freeze");
    fs::create_dir_all(root.join("docs"))?;
    fs::write(root.join("docs/index.md"), "# Docs\n")?;
    fs::write(root.join("package.json"), r#"{"version":"0.5.x"}"#)?;

    let out = docver(&root, &["--snapshot-cmd", "builtin", "freeze", "0.6.x", "0.7.x"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("version mismatch"));

    let out = docver(&root, &["--snapshot-cmd", "builtin", "release", "0.5.x", "0.6.x"])?;
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(root.join("versioned_docs/version-0.5.x/index.md").exists());
    Ok(())
}

#[test]
fn remove_twice_exit_0() -> Result<()> {
    let root = unique_root("remove");
    fs::create_dir_all(root.join("versioned_docs/version-0.4.x"))?;
    fs::write(root.join("versions.json"), r#"["0.4.x"]"#)?;
    assert_eq!(docver(&root, &["remove", "0.4.x"])?.status.code(), Some(0));
    assert_eq!(docver(&root, &["remove", "0.4.x"])?.status.code(), Some(0));
    assert!(!root.join("versioned_docs/version-0.4.x").exists());
    Ok(())
}

#[test]
fn switch_path_prints_target() -> Result<()> {
    let root = unique_root("switch");
    let out = docver(&root, &["switch-path", "/docs/0.4.x/learn", "/docs/0.4.x", "/docs/0.3.x"])?;
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "/docs/0.3.x/learn");
    Ok(())
}
