//! Version switcher — read path behind the docs version dropdown.
//!
//! `VersionMenu` is the list the dropdown renders (working version first, then
//! the registry in order). `switch_path` rewrites the reader's current URL path
//! from the active version's prefix to the target's; it is a string heuristic,
//! not a router.

use serde::Serialize;

use crate::consts::{
    CURRENT_VERSION_NAME, EMPTY_VERSION_FALLBACK, EMPTY_VERSION_INDEX, FALLBACK_CURRENT_LABEL,
};
use crate::error::Result;
use crate::layout::SiteLayout;
use crate::metadata::ProjectMetadata;
use crate::registry::VersionRegistry;
use crate::site_config::{ConfigLoad, VersionsConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOption {
    /// `current` for the working tree, otherwise the frozen label.
    pub name: String,
    pub label: String,
    /// Full route prefix, e.g. "/docs" or "/docs/0.4.x".
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMenu {
    pub options: Vec<VersionOption>,
}

impl VersionMenu {
    /// Build the menu from what is on disk. Missing registry/config/metadata
    /// just shrink the menu to defaults.
    pub fn load(layout: &SiteLayout, route_base: &str) -> Result<Self> {
        let registry = VersionRegistry::load(&layout.registry_path())?.unwrap_or_default();
        let project_version = ProjectMetadata::load_opt(&layout.metadata_path())?
            .and_then(|m| m.version().map(str::to_string));
        let config = match VersionsConfig::load(&layout.versions_config_path())? {
            ConfigLoad::Loaded(cfg) => Some(cfg),
            _ => None,
        };
        Ok(Self::build(
            &registry,
            config.as_ref(),
            project_version.as_deref(),
            route_base,
        ))
    }

    pub fn build(
        registry: &VersionRegistry,
        config: Option<&VersionsConfig>,
        project_version: Option<&str>,
        route_base: &str,
    ) -> Self {
        let entry = |name: &str| config.and_then(|c| c.entry(name));
        let mut options = Vec::with_capacity(registry.len() + 1);

        // подпись рабочей версии — версия проекта; label из конфига только если её нет
        let current = entry(CURRENT_VERSION_NAME);
        let current_label = project_version
            .map(str::to_string)
            .or_else(|| current.as_ref().and_then(|e| e.label.clone()))
            .unwrap_or_else(|| FALLBACK_CURRENT_LABEL.to_string());
        let current_path = current.map(|e| e.path).unwrap_or_default();
        options.push(VersionOption {
            name: CURRENT_VERSION_NAME.to_string(),
            label: current_label,
            path: join_route(route_base, &current_path),
        });

        for v in registry.versions() {
            let e = entry(v);
            let label = e
                .as_ref()
                .and_then(|e| e.label.clone())
                .unwrap_or_else(|| v.clone());
            let path = e.map(|e| e.path).unwrap_or_else(|| v.clone());
            options.push(VersionOption {
                name: v.clone(),
                label,
                path: join_route(route_base, &path),
            });
        }

        Self { options }
    }

    pub fn find(&self, name: &str) -> Option<&VersionOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// "/docs" + "0.4.x" -> "/docs/0.4.x"; empty segment keeps the base.
fn join_route(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_matches('/');
    match (base.is_empty(), segment.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{segment}"),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{segment}"),
    }
}

/// Path to navigate to when switching from `active_prefix` to `target_prefix`
/// while reading `current_path`.
pub fn switch_path(current_path: &str, active_prefix: &str, target_prefix: &str) -> String {
    let mut new_path = if active_prefix.is_empty() {
        // пустой префикс совпадает с началом любого пути
        format!("{target_prefix}{current_path}")
    } else {
        current_path.replacen(active_prefix, target_prefix, 1)
    };

    if new_path.is_empty() {
        new_path = if target_prefix.is_empty() {
            "/".to_string()
        } else {
            target_prefix.to_string()
        };
    }

    if EMPTY_VERSION_INDEX.contains(&new_path.as_str()) {
        new_path = EMPTY_VERSION_FALLBACK.to_string();
    }
    new_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_version_prefix() {
        assert_eq!(
            switch_path("/docs/0.4.x/learn/intro", "/docs/0.4.x", "/docs/0.3.x"),
            "/docs/0.3.x/learn/intro"
        );
        assert_eq!(
            switch_path("/docs/0.4.x/learn", "/docs/0.4.x", "/docs"),
            "/docs/learn"
        );
    }

    #[test]
    fn empty_active_prefix_prepends_target() {
        assert_eq!(switch_path("/learn", "", "/docs/0.4.x"), "/docs/0.4.x/learn");
    }

    #[test]
    fn empty_result_falls_back() {
        assert_eq!(switch_path("/docs/0.4.x", "/docs/0.4.x", ""), "/");
        assert_eq!(switch_path("", "", ""), "/");
    }

    #[test]
    fn unrelated_path_is_kept() {
        assert_eq!(switch_path("/blog/post", "/docs/0.4.x", "/docs"), "/blog/post");
    }

    #[test]
    fn empty_version_index_redirects() {
        assert_eq!(switch_path("/docs/learn", "/docs/learn", "/docs/next"), "/docs/next/learn");
        assert_eq!(switch_path("/docs/0.4.x/", "/docs/0.4.x", "/docs/next"), "/docs/next/learn");
    }

    #[test]
    fn menu_lists_current_then_registry() {
        let reg = VersionRegistry::new(vec!["0.4.x".into(), "0.3.x".into()]);
        let menu = VersionMenu::build(&reg, None, Some("0.5.x"), "/docs");
        let names: Vec<_> = menu.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["current", "0.4.x", "0.3.x"]);
        assert_eq!(menu.options[0].label, "0.5.x");
        assert_eq!(menu.options[0].path, "/docs");
        assert_eq!(menu.find("0.3.x").map(|o| o.path.as_str()), Some("/docs/0.3.x"));
    }

    #[test]
    fn project_version_wins_over_current_label() {
        let cfg_path = std::env::temp_dir().join("docver-switcher-unused.json");
        let mut cfg = VersionsConfig::single_current(
            &cfg_path,
            &crate::label::VersionLabel::parse("0.4.x").unwrap(),
        );
        let reg = VersionRegistry::default();
        let menu = VersionMenu::build(&reg, Some(&cfg), Some("0.5.x"), "/docs");
        assert_eq!(menu.options[0].label, "0.5.x");
        // без версии проекта остаётся label из конфига
        let menu = VersionMenu::build(&reg, Some(&cfg), None, "/docs");
        assert_eq!(menu.options[0].label, "0.4.x");
        cfg.remove(CURRENT_VERSION_NAME);
        let menu = VersionMenu::build(&reg, Some(&cfg), None, "/docs");
        assert_eq!(menu.options[0].label, "Next");
    }

    #[test]
    fn menu_without_project_version_shows_next() {
        let menu = VersionMenu::build(&VersionRegistry::default(), None, None, "/docs/");
        assert_eq!(menu.options.len(), 1);
        assert_eq!(menu.options[0].label, "Next");
        assert_eq!(menu.options[0].path, "/docs");
    }
}
