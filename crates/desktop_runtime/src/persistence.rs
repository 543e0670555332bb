//! Desktop runtime persistence for boot hydration and lightweight local preferences.
//!
//! Every read degrades to a default on failure (logged, never surfaced). Writes return the
//! store error so the effect layer can log it.

use leptos::logging;
use platform_host::{
    load_pref_with, load_raw_pref_with, save_pref_with, save_raw_pref_with, PrefsStore,
};

use crate::model::{DesktopSettings, SessionSnapshot, ThemeMode, WindowKey};

/// JSON array of open window ids, bottom of the stack first.
pub const OPEN_WINDOWS_KEY: &str = "win11-open-windows";
/// JSON array of minimized window ids in minimize order.
pub const MINIMIZED_WINDOWS_KEY: &str = "win11-minimized-windows";
/// JSON settings object.
pub const SETTINGS_KEY: &str = "win11-settings";
/// Raw `light` / `dark`.
pub const THEME_KEY: &str = "win11-theme";
/// Raw wallpaper URL.
pub const WALLPAPER_KEY: &str = "win11-wallpaper";
/// Raw `true` while powered off; absent otherwise.
pub const SHUTDOWN_KEY: &str = "win11-is-shutdown";

#[derive(Debug, Clone, PartialEq, Default)]
/// Everything restored from storage before the desktop renders.
pub struct BootState {
    /// User settings (theme flag applied).
    pub settings: DesktopSettings,
    /// Persisted open/minimized ids.
    pub session: SessionSnapshot,
    /// Wallpaper URL, empty for the default background.
    pub wallpaper: String,
    /// Whether the desktop was left shut down.
    pub powered_off: bool,
}

async fn load_id_list<S: PrefsStore + ?Sized>(store: &S, key: &str) -> Vec<WindowKey> {
    match load_pref_with::<_, Vec<WindowKey>>(store, key).await {
        Ok(ids) => ids.unwrap_or_default(),
        Err(err) => {
            logging::warn!("load {key} failed: {err}");
            Vec::new()
        }
    }
}

/// Loads the persisted session; malformed lists load as empty.
pub async fn load_session<S: PrefsStore + ?Sized>(store: &S) -> SessionSnapshot {
    SessionSnapshot {
        open: load_id_list(store, OPEN_WINDOWS_KEY).await,
        minimized: load_id_list(store, MINIMIZED_WINDOWS_KEY).await,
    }
}

/// Loads settings, letting the standalone theme flag override the stored theme.
pub async fn load_settings<S: PrefsStore + ?Sized>(store: &S) -> DesktopSettings {
    let mut settings = match load_pref_with::<_, DesktopSettings>(store, SETTINGS_KEY).await {
        Ok(settings) => settings.unwrap_or_default(),
        Err(err) => {
            logging::warn!("load settings failed: {err}");
            DesktopSettings::default()
        }
    };
    match load_raw_pref_with(store, THEME_KEY).await {
        Ok(Some(raw)) => settings.theme = ThemeMode::from_flag(&raw),
        Ok(None) => {}
        Err(err) => logging::warn!("load theme failed: {err}"),
    }
    settings
}

/// Loads the wallpaper URL.
pub async fn load_wallpaper<S: PrefsStore + ?Sized>(store: &S) -> String {
    match load_raw_pref_with(store, WALLPAPER_KEY).await {
        Ok(wallpaper) => wallpaper.unwrap_or_default(),
        Err(err) => {
            logging::warn!("load wallpaper failed: {err}");
            String::new()
        }
    }
}

/// Returns `true` when the desktop was shut down and not powered back on.
pub async fn load_power_state<S: PrefsStore + ?Sized>(store: &S) -> bool {
    match load_raw_pref_with(store, SHUTDOWN_KEY).await {
        Ok(flag) => flag.is_some_and(|raw| raw.trim() == "true"),
        Err(err) => {
            logging::warn!("load shutdown flag failed: {err}");
            false
        }
    }
}

/// Loads every boot-time value.
pub async fn load_boot_state<S: PrefsStore + ?Sized>(store: &S) -> BootState {
    BootState {
        settings: load_settings(store).await,
        session: load_session(store).await,
        wallpaper: load_wallpaper(store).await,
        powered_off: load_power_state(store).await,
    }
}

/// Persists open and minimized ids.
pub async fn persist_session<S: PrefsStore + ?Sized>(
    store: &S,
    session: &SessionSnapshot,
) -> Result<(), String> {
    save_pref_with(store, OPEN_WINDOWS_KEY, &session.open).await?;
    save_pref_with(store, MINIMIZED_WINDOWS_KEY, &session.minimized).await
}

/// Persists settings and mirrors the theme into its raw flag.
pub async fn persist_settings<S: PrefsStore + ?Sized>(
    store: &S,
    settings: &DesktopSettings,
) -> Result<(), String> {
    save_pref_with(store, SETTINGS_KEY, settings).await?;
    save_raw_pref_with(store, THEME_KEY, settings.theme.as_str()).await
}

/// Persists the wallpaper URL.
pub async fn persist_wallpaper<S: PrefsStore + ?Sized>(
    store: &S,
    wallpaper: &str,
) -> Result<(), String> {
    save_raw_pref_with(store, WALLPAPER_KEY, wallpaper).await
}

/// Writes the shutdown flag, or removes it when powered on.
pub async fn persist_power_state<S: PrefsStore + ?Sized>(
    store: &S,
    powered_off: bool,
) -> Result<(), String> {
    if powered_off {
        save_raw_pref_with(store, SHUTDOWN_KEY, "true").await
    } else {
        store.delete_pref(SHUTDOWN_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(raw: &str) -> WindowKey {
        WindowKey::trusted(raw)
    }

    #[test]
    fn empty_store_boots_with_defaults() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_boot_state(&store)), BootState::default());
    }

    #[test]
    fn session_round_trips_through_win11_keys() {
        let store = MemoryPrefsStore::default();
        let session = SessionSnapshot {
            open: vec![key("about"), key("calculator")],
            minimized: vec![key("calculator")],
        };
        block_on(persist_session(&store, &session)).expect("persist");

        assert_eq!(
            store.raw(OPEN_WINDOWS_KEY),
            Some(r#"["about","calculator"]"#.to_string())
        );
        assert_eq!(
            store.raw(MINIMIZED_WINDOWS_KEY),
            Some(r#"["calculator"]"#.to_string())
        );
        assert_eq!(block_on(load_session(&store)), session);
    }

    #[test]
    fn malformed_session_lists_load_empty() {
        let store = MemoryPrefsStore::with_entries([
            (OPEN_WINDOWS_KEY, "{not json"),
            (MINIMIZED_WINDOWS_KEY, r#"["notepad"]"#),
        ]);
        let session = block_on(load_session(&store));
        assert!(session.open.is_empty());
        assert_eq!(session.minimized, vec![key("notepad")]);
    }

    #[test]
    fn session_list_with_invalid_id_loads_empty() {
        let store = MemoryPrefsStore::with_entries([
            (OPEN_WINDOWS_KEY, r#"["about","bad id"]"#),
            (MINIMIZED_WINDOWS_KEY, r#"["about"]"#),
        ]);
        let session = block_on(load_session(&store));
        assert!(session.open.is_empty());
        assert_eq!(session.minimized, vec![key("about")]);
    }

    #[test]
    fn settings_are_camel_case_and_theme_is_mirrored() {
        let store = MemoryPrefsStore::default();
        let settings = DesktopSettings {
            theme: ThemeMode::Dark,
            show_volume_control: false,
            ..DesktopSettings::default()
        };
        block_on(persist_settings(&store, &settings)).expect("persist");

        let raw = store.raw(SETTINGS_KEY).expect("settings stored");
        assert!(raw.contains("\"showVolumeControl\":false"));
        assert!(!raw.contains("wallpaperUrl"));
        assert_eq!(store.raw(THEME_KEY), Some("dark".to_string()));
        assert_eq!(block_on(load_settings(&store)), settings);
    }

    #[test]
    fn theme_flag_overrides_settings_theme() {
        let store = MemoryPrefsStore::with_entries([
            (SETTINGS_KEY, r#"{"theme":"light","showClock":false}"#),
            (THEME_KEY, "dark"),
        ]);
        let settings = block_on(load_settings(&store));
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(!settings.show_clock);
        assert!(settings.show_calculator);
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let store = MemoryPrefsStore::with_entries([(SETTINGS_KEY, "{\"theme\":")]);
        assert_eq!(block_on(load_settings(&store)), DesktopSettings::default());
    }

    #[test]
    fn power_flag_is_written_and_cleared() {
        let store = MemoryPrefsStore::default();
        block_on(persist_power_state(&store, true)).expect("shutdown");
        assert_eq!(store.raw(SHUTDOWN_KEY), Some("true".to_string()));
        assert!(block_on(load_power_state(&store)));

        block_on(persist_power_state(&store, false)).expect("power on");
        assert_eq!(store.raw(SHUTDOWN_KEY), None);
        assert!(!block_on(load_power_state(&store)));
    }

    #[test]
    fn wallpaper_is_stored_raw() {
        let store = MemoryPrefsStore::default();
        block_on(persist_wallpaper(&store, "https://example.com/a.jpg")).expect("persist");
        assert_eq!(
            store.raw(WALLPAPER_KEY),
            Some("https://example.com/a.jpg".to_string())
        );
        assert_eq!(
            block_on(load_wallpaper(&store)),
            "https://example.com/a.jpg".to_string()
        );
    }
}
