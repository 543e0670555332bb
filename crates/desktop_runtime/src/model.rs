use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use desktop_app_contract::WindowKey;

/// z-index every descriptor carries before it is first raised.
pub const INITIAL_Z_INDEX: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Full browser viewport; the taskbar is carved out by the geometry helpers, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self::new(layout.fallback_viewport_width, layout.fallback_viewport_height)
    }
}

/// Geometry constants loaded from the `[layout]` table of the window catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub default_width: i32,
    pub default_height: i32,
    /// Height reserved at the bottom when placing or re-clamping windows.
    pub taskbar_height: i32,
    /// Height subtracted from the viewport for maximized windows.
    pub maximized_chrome_height: i32,
    /// Pixels of a dragged window that must stay on-screen.
    pub drag_visible_margin: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub fallback_viewport_width: i32,
    pub fallback_viewport_height: i32,
}

impl LayoutConfig {
    pub fn default_size(&self) -> Size {
        Size::new(self.default_width, self.default_height)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_width: 700,
            default_height: 500,
            taskbar_height: 60,
            maximized_chrome_height: 48,
            drag_visible_margin: 100,
            min_width: 300,
            min_height: 200,
            fallback_viewport_width: 1920,
            fallback_viewport_height: 1080,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackingBand {
    /// Raised above everything on open/focus.
    #[default]
    App,
    /// Pinned to the folder band, beneath every app window.
    Folder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowGroup {
    Portfolio,
    Utility,
    Game,
    Folder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCapabilities {
    pub resizable: bool,
    pub maximizable: bool,
    pub closable: bool,
}

impl Default for WindowCapabilities {
    fn default() -> Self {
        Self {
            resizable: true,
            maximizable: true,
            closable: true,
        }
    }
}

/// Surrounding chrome a window appears in; both default to shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeVisibility {
    pub show_in_start_menu: bool,
    pub show_in_taskbar: bool,
}

impl Default for ChromeVisibility {
    fn default() -> Self {
        Self {
            show_in_start_menu: true,
            show_in_taskbar: true,
        }
    }
}

/// Identity, capabilities and lifecycle flags of one registered window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowKey,
    pub title: String,
    pub icon_id: String,
    /// Opaque reference to the hosted content, resolved by [`crate::apps::app_module`].
    pub content: String,
    pub group: WindowGroup,
    pub is_open: bool,
    pub is_minimized: bool,
    pub z_index: u32,
    pub default_size: Option<Size>,
    pub default_position: Option<Point>,
    pub capabilities: WindowCapabilities,
    pub chrome: ChromeVisibility,
    pub stacking: StackingBand,
}

impl WindowDescriptor {
    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreGeometry {
    pub position: Point,
    pub size: Size,
}

/// Ephemeral on-screen rectangle of a visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
    pub maximized: bool,
    /// Rectangle recorded right before maximizing.
    pub restore: Option<RestoreGeometry>,
}

impl WindowGeometry {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            maximized: false,
            restore: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses the raw theme flag; anything other than `dark` is light.
    pub fn from_flag(raw: &str) -> Self {
        if raw.trim() == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// User settings persisted as a JSON object under `win11-settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesktopSettings {
    pub theme: ThemeMode,
    pub show_clock: bool,
    pub show_calculator: bool,
    pub show_notepad: bool,
    pub show_volume_control: bool,
    pub show_music_player: bool,
    pub show_battery: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_effects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparency: Option<f64>,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            show_clock: true,
            show_calculator: true,
            show_notepad: true,
            show_volume_control: true,
            show_music_player: true,
            show_battery: true,
            wallpaper_url: None,
            sound_effects: None,
            notifications: None,
            animations: None,
            transparency: None,
        }
    }
}

impl DesktopSettings {
    /// Resolves a catalog `settings_toggle` name. Unknown names count as enabled.
    pub fn toggle_enabled(&self, toggle: &str) -> bool {
        match toggle {
            "show_clock" => self.show_clock,
            "show_calculator" => self.show_calculator,
            "show_notepad" => self.show_notepad,
            "show_volume_control" => self.show_volume_control,
            "show_music_player" => self.show_music_player,
            "show_battery" => self.show_battery,
            _ => true,
        }
    }

    /// Sets a named toggle. Returns `false` for unknown names.
    pub fn set_toggle(&mut self, toggle: &str, enabled: bool) -> bool {
        let slot = match toggle {
            "show_clock" => &mut self.show_clock,
            "show_calculator" => &mut self.show_calculator,
            "show_notepad" => &mut self.show_notepad,
            "show_volume_control" => &mut self.show_volume_control,
            "show_music_player" => &mut self.show_music_player,
            "show_battery" => &mut self.show_battery,
            _ => return false,
        };
        *slot = enabled;
        true
    }
}

/// Open and minimized ids restored on the next boot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub open: Vec<WindowKey>,
    pub minimized: Vec<WindowKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    /// Registered windows in catalog order. Membership is fixed once the registry is built.
    pub windows: Vec<WindowDescriptor>,
    /// Minimized ids in the order they were minimized (taskbar chips).
    pub minimized_order: Vec<WindowKey>,
    /// Geometry of visible windows, keyed by id. Minimized windows may keep stale geometry
    /// until they are re-placed on restore.
    pub geometry: BTreeMap<WindowKey, WindowGeometry>,
    pub viewport: Viewport,
    pub layout: LayoutConfig,
    pub settings: DesktopSettings,
    pub wallpaper: String,
    pub powered_off: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(Vec::new(), LayoutConfig::default(), DesktopSettings::default())
    }
}

impl DesktopState {
    pub fn new(
        windows: Vec<WindowDescriptor>,
        layout: LayoutConfig,
        settings: DesktopSettings,
    ) -> Self {
        Self {
            windows,
            minimized_order: Vec::new(),
            geometry: BTreeMap::new(),
            viewport: Viewport::new(
                layout.fallback_viewport_width,
                layout.fallback_viewport_height,
            ),
            layout,
            settings,
            wallpaper: String::new(),
            powered_off: false,
        }
    }

    pub fn window(&self, id: &WindowKey) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn geometry_of(&self, id: &WindowKey) -> Option<WindowGeometry> {
        self.geometry.get(id).copied()
    }

    /// Visible window with the highest z-index.
    pub fn top_window_id(&self) -> Option<WindowKey> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone())
    }

    /// Open ids ordered bottom to top, so hydrating them in order restores the stack.
    pub fn session(&self) -> SessionSnapshot {
        let mut open: Vec<_> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.z_index);
        SessionSnapshot {
            open: open.into_iter().map(|w| w.id.clone()).collect(),
            minimized: self.minimized_order.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn moves_left(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub const fn moves_right(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn moves_top(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn moves_bottom(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// CSS hook used by the resize handle elements.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::North => "edge-top",
            Self::South => "edge-bottom",
            Self::East => "edge-right",
            Self::West => "edge-left",
            Self::NorthEast => "edge-top-right",
            Self::NorthWest => "edge-top-left",
            Self::SouthEast => "edge-bottom-right",
            Self::SouthWest => "edge-bottom-left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window: WindowKey,
    pub pointer_start: PointerPosition,
    pub position_start: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window: WindowKey,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub geometry_start: WindowGeometry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn settings_json_uses_camel_case_and_tolerates_missing_fields() {
        let settings: DesktopSettings =
            serde_json::from_str(r#"{"theme":"dark","showMusicPlayer":false,"transparency":40}"#)
                .expect("parse settings");
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(!settings.show_music_player);
        assert!(settings.show_clock);
        assert_eq!(settings.transparency, Some(40.0));

        let json = serde_json::to_value(&DesktopSettings::default()).expect("serialize");
        assert_eq!(json["showVolumeControl"], serde_json::json!(true));
        assert!(json.get("soundEffects").is_none());
    }

    #[test]
    fn toggles_read_and_write_by_name() {
        let mut settings = DesktopSettings::default();
        assert!(settings.set_toggle("show_battery", false));
        assert!(!settings.toggle_enabled("show_battery"));
        assert!(!settings.set_toggle("show_dragons", false));
        assert!(settings.toggle_enabled("show_dragons"));
    }

    #[test]
    fn theme_flag_parsing_defaults_to_light() {
        assert_eq!(ThemeMode::from_flag("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_flag(" dark\n"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_flag("purple"), ThemeMode::Light);
    }

    #[test]
    fn session_lists_open_windows_bottom_to_top() {
        let mut state = DesktopState::default();
        for (id, z_index, is_open) in [("a", 1130, true), ("b", 1110, true), ("c", 1200, false)] {
            state.windows.push(WindowDescriptor {
                id: WindowKey::trusted(id),
                title: id.to_string(),
                icon_id: String::new(),
                content: String::new(),
                group: WindowGroup::Utility,
                is_open,
                is_minimized: false,
                z_index,
                default_size: None,
                default_position: None,
                capabilities: WindowCapabilities::default(),
                chrome: ChromeVisibility::default(),
                stacking: StackingBand::App,
            });
        }
        let session = state.session();
        assert_eq!(
            session.open,
            vec![WindowKey::trusted("b"), WindowKey::trusted("a")]
        );
        assert_eq!(state.top_window_id(), Some(WindowKey::trusted("a")));
    }

    #[test]
    fn resize_edges_report_moving_sides() {
        assert!(ResizeEdge::NorthWest.moves_left() && ResizeEdge::NorthWest.moves_top());
        assert!(!ResizeEdge::East.moves_left() && ResizeEdge::East.moves_right());
        assert_eq!(ResizeEdge::ALL.len(), 8);
    }
}
