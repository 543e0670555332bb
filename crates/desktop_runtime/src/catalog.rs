//! Static window catalog compiled from `desktop.catalog.toml` and the registry builder that
//! turns it into window descriptors.

use std::sync::OnceLock;

use leptos::logging;
use serde::Deserialize;

use crate::model::{
    ChromeVisibility, DesktopSettings, LayoutConfig, Point, Size, StackingBand,
    WindowCapabilities, WindowDescriptor, WindowGroup, WindowKey, INITIAL_Z_INDEX,
};

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    id: String,
    title: String,
    icon: String,
    content: String,
    group: WindowGroup,
    #[serde(default)]
    stacking: Option<StackingBand>,
    #[serde(default)]
    settings_toggle: Option<String>,
    #[serde(default)]
    default_size: Option<Size>,
    #[serde(default)]
    default_position: Option<Point>,
    #[serde(default)]
    resizable: Option<bool>,
    #[serde(default)]
    maximizable: Option<bool>,
    #[serde(default)]
    closable: Option<bool>,
    #[serde(default)]
    show_in_start_menu: Option<bool>,
    #[serde(default)]
    show_in_taskbar: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Catalog {
    #[serde(default)]
    layout: LayoutConfig,
    #[serde(default)]
    windows: Vec<CatalogEntry>,
}

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(WINDOW_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("window catalog failed to parse: {err}");
            Catalog::default()
        })
    })
}

impl CatalogEntry {
    fn enabled_by(&self, settings: &DesktopSettings) -> bool {
        self.settings_toggle
            .as_deref()
            .map_or(true, |toggle| settings.toggle_enabled(toggle))
    }

    fn descriptor(&self) -> WindowDescriptor {
        WindowDescriptor {
            id: WindowKey::trusted(self.id.clone()),
            title: self.title.clone(),
            icon_id: self.icon.clone(),
            content: self.content.clone(),
            group: self.group,
            is_open: false,
            is_minimized: false,
            z_index: INITIAL_Z_INDEX,
            default_size: self.default_size,
            default_position: self.default_position,
            capabilities: WindowCapabilities {
                resizable: self.resizable.unwrap_or(true),
                maximizable: self.maximizable.unwrap_or(true),
                closable: self.closable.unwrap_or(true),
            },
            chrome: ChromeVisibility {
                show_in_start_menu: self.show_in_start_menu.unwrap_or(true),
                show_in_taskbar: self.show_in_taskbar.unwrap_or(true),
            },
            stacking: self.stacking.unwrap_or_default(),
        }
    }
}

/// Geometry constants declared by the catalog's `[layout]` table.
pub fn layout_config() -> LayoutConfig {
    catalog().layout
}

/// Builds the session's window registry: catalog order, filtered by settings toggles, all
/// closed at the initial z-index.
pub fn build_registry(settings: &DesktopSettings) -> Vec<WindowDescriptor> {
    catalog()
        .windows
        .iter()
        .filter(|entry| entry.enabled_by(settings))
        .map(CatalogEntry::descriptor)
        .collect()
}

/// Group listed by a folder window's content reference (`folder.games` lists games).
pub fn folder_listing_group(content: &str) -> Option<WindowGroup> {
    match content.strip_prefix("folder.")? {
        "games" => Some(WindowGroup::Game),
        "utilities" => Some(WindowGroup::Utility),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(windows: &[WindowDescriptor]) -> Vec<&str> {
        windows.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn generated_catalog_parses_with_unique_ids() {
        let windows = build_registry(&DesktopSettings::default());
        assert!(!windows.is_empty());
        let mut seen = std::collections::BTreeSet::new();
        for window in &windows {
            assert!(seen.insert(window.id.clone()), "duplicate {}", window.id);
        }
    }

    #[test]
    fn registry_starts_closed_at_initial_z_index() {
        for window in build_registry(&DesktopSettings::default()) {
            assert!(!window.is_open);
            assert!(!window.is_minimized);
            assert_eq!(window.z_index, INITIAL_Z_INDEX);
        }
    }

    #[test]
    fn settings_toggles_filter_membership() {
        let all = build_registry(&DesktopSettings::default());
        assert!(ids(&all).contains(&"calculator"));

        let settings = DesktopSettings {
            show_calculator: false,
            show_battery: false,
            ..DesktopSettings::default()
        };
        let filtered = build_registry(&settings);
        let filtered_ids = ids(&filtered);
        assert!(!filtered_ids.contains(&"calculator"));
        assert!(!filtered_ids.contains(&"battery"));
        assert!(filtered_ids.contains(&"notepad"));
        assert_eq!(filtered.len() + 2, all.len());
    }

    #[test]
    fn folder_windows_use_folder_stacking_band() {
        let windows = build_registry(&DesktopSettings::default());
        let folders: Vec<_> = windows
            .iter()
            .filter(|w| w.group == WindowGroup::Folder)
            .collect();
        assert_eq!(folders.len(), 2);
        for folder in folders {
            assert_eq!(folder.stacking, StackingBand::Folder);
            assert!(folder_listing_group(&folder.content).is_some());
        }
    }

    #[test]
    fn capabilities_default_to_enabled() {
        let windows = build_registry(&DesktopSettings::default());
        let whiteboard = windows
            .iter()
            .find(|w| w.id.as_str() == "whiteboard")
            .expect("whiteboard registered");
        assert_eq!(whiteboard.capabilities, WindowCapabilities::default());
        assert_eq!(whiteboard.default_size, Some(Size::new(800, 600)));
    }

    #[test]
    fn chrome_flags_default_to_shown() {
        let windows = build_registry(&DesktopSettings::default());
        let chrome = |id: &str| {
            windows
                .iter()
                .find(|w| w.id.as_str() == id)
                .map(|w| w.chrome)
                .expect("registered")
        };
        assert_eq!(chrome("about"), ChromeVisibility::default());
        assert!(!chrome("calculator").show_in_taskbar);
        assert!(chrome("calculator").show_in_start_menu);
        assert!(!chrome("games-folder-window").show_in_start_menu);
    }

    #[test]
    fn layout_matches_catalog_table() {
        assert_eq!(layout_config(), LayoutConfig::default());
    }

    #[test]
    fn folder_listing_group_rejects_non_folders() {
        assert_eq!(folder_listing_group("utility.calculator"), None);
        assert_eq!(folder_listing_group("folder.unknown"), None);
        assert_eq!(
            folder_listing_group("folder.games"),
            Some(WindowGroup::Game)
        );
    }
}
