use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use docver::config::DocverConfig;
use docver::{switch_path, Lifecycle, SiteLayout, VersionMenu};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

// Global lock to serialize tests that mutate ENV.
static TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("docvertest-status-{prefix}-{pid}-{t}-{id}"))
}

fn site(prefix: &str) -> Result<PathBuf> {
    let root = unique_root(prefix);
    fs::create_dir_all(root.join("versioned_docs/version-0.4.x"))?;
    fs::create_dir_all(root.join("versioned_docs/version-0.2.x"))?;
    fs::create_dir_all(root.join("versioned_sidebars"))?;
    fs::write(
        root.join("versioned_sidebars/version-0.4.x-sidebars.json"),
        "{}",
    )?;
    fs::write(root.join("package.json"), r#"{"version":"0.5.x"}"#)?;
    fs::write(root.join("versions.json"), r#"["0.4.x","0.3.x"]"#)?;
    fs::write(
        root.join("versions.config.json"),
        r#"{"current":{"path":""},"0.4.x":{"label":"v0.4","path":"0.4.x"},"0.1.x":{"path":"0.1.x"}}"#,
    )?;
    Ok(root)
}

#[test]
fn status_reports_inconsistencies() -> Result<()> {
    let root = site("issues")?;
    let st = Lifecycle::new(SiteLayout::new(&root)).status()?;

    assert_eq!(st.project_version.as_deref(), Some("0.5.x"));
    assert_eq!(
        st.registry,
        Some(vec!["0.4.x".to_string(), "0.3.x".to_string()])
    );
    assert_eq!(st.config_state, "loaded");
    assert_eq!(st.orphan_snapshots, ["0.2.x"]);
    assert_eq!(st.unknown_config_entries, ["0.1.x"]);

    let v4 = &st.versions[0];
    assert!(v4.snapshot && v4.sidebar);
    assert_eq!(v4.config_entry, Some(true));
    let v3 = &st.versions[1];
    assert!(!v3.snapshot && !v3.sidebar);
    assert_eq!(v3.config_entry, Some(false));

    let issues = st.issues();
    assert_eq!(issues.len(), 5, "{issues:?}");
    assert!(!st.is_consistent());
    // status ничего не пишет
    assert!(!root.join(".docver.lock").exists());
    Ok(())
}

#[test]
fn status_of_single_version_site_is_consistent() -> Result<()> {
    let root = unique_root("clean");
    fs::create_dir_all(&root)?;
    fs::write(root.join("package.json"), r#"{"version":"0.5.x"}"#)?;
    let st = Lifecycle::new(SiteLayout::new(&root)).status()?;
    assert!(st.registry.is_none());
    assert_eq!(st.config_state, "missing");
    assert!(st.is_consistent(), "{:?}", st.issues());
    Ok(())
}

#[test]
fn menu_uses_config_labels_and_registry_order() -> Result<()> {
    let root = site("menu")?;
    let menu = VersionMenu::load(&SiteLayout::new(&root), "/docs")?;

    let rows: Vec<_> = menu
        .options
        .iter()
        .map(|o| (o.name.as_str(), o.label.as_str(), o.path.as_str()))
        .collect();
    assert_eq!(
        rows,
        [
            ("current", "0.5.x", "/docs"),
            ("0.4.x", "v0.4", "/docs/0.4.x"),
            ("0.3.x", "0.3.x", "/docs/0.3.x"),
        ]
    );

    // переход со страницы 0.4.x на текущую версию
    let active = menu.find("0.4.x").unwrap();
    let target = menu.find("current").unwrap();
    assert_eq!(
        switch_path("/docs/0.4.x/learn/intro", &active.path, &target.path),
        "/docs/learn/intro"
    );
    Ok(())
}

#[test]
fn config_from_env_and_overrides() {
    let _g = TEST_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();

    std::env::set_var("DOCVER_ROOT", "/srv/site");
    std::env::set_var("DOCVER_SNAPSHOT_CMD", "builtin");
    std::env::set_var("DOCVER_LOCK", "off");
    std::env::remove_var("DOCVER_ROUTE_BASE");

    let cfg = DocverConfig::from_env();
    assert_eq!(cfg.root, PathBuf::from("/srv/site"));
    assert_eq!(cfg.snapshot_cmd, "builtin");
    assert!(!cfg.use_lock);
    assert_eq!(cfg.route_base, "/docs");
    assert_eq!(cfg.snapshot_generator().describe(), "builtin copy");

    let cfg = cfg.with_root("/tmp/other").with_lock(true);
    assert_eq!(cfg.layout().root(), PathBuf::from("/tmp/other").as_path());
    assert!(cfg.use_lock);

    std::env::remove_var("DOCVER_ROOT");
    std::env::remove_var("DOCVER_SNAPSHOT_CMD");
    std::env::remove_var("DOCVER_LOCK");

    let cfg = DocverConfig::from_env();
    assert_eq!(
        cfg.snapshot_cmd,
        "npm run docusaurus docs:version {version}"
    );
    assert!(cfg.use_lock);
}
