//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; effect execution and viewport/pointer queries live behind this
//! boundary so tests can inject an in-memory preference store.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::PrefsStore;
use platform_host_web::{host_strategy_name, prefs_store};

use crate::{
    model::{PointerPosition, ThemeMode, Viewport, WindowKey},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use host_ui::DESKTOP_ROOT_ID;
pub(crate) use host_ui::window_dom_id;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            prefs: Rc::new(prefs_store()),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl DesktopHostContext {
    /// Builds a host bundle around an explicit preference store.
    pub fn with_prefs_store(prefs: Rc<dyn PrefsStore>, host_strategy_name: &'static str) -> Self {
        Self {
            prefs,
            host_strategy_name,
        }
    }

    /// Returns the configured preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Installs boot hydration for the desktop provider.
    ///
    /// Settings are loaded first because they decide registry membership; the persisted
    /// session, wallpaper and power flag follow.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistSession => {
                persistence_effects::persist_session(self.clone(), runtime)
            }
            RuntimeEffect::PersistSettings => {
                persistence_effects::persist_settings(self.clone(), runtime)
            }
            RuntimeEffect::PersistWallpaper => {
                persistence_effects::persist_wallpaper(self.clone(), runtime)
            }
            RuntimeEffect::PersistPowerState => {
                persistence_effects::persist_power_state(self.clone(), runtime)
            }
            RuntimeEffect::ApplyTheme(theme) => self.apply_theme(theme),
            RuntimeEffect::FocusWindow(window) => self.focus_window(&window),
        }
    }

    /// Moves keyboard focus into a raised window's frame.
    pub fn focus_window(&self, window: &WindowKey) {
        host_ui::focus_window(window);
    }

    /// Reflects the theme on the document root (`dark` class).
    pub fn apply_theme(&self, theme: ThemeMode) {
        host_ui::apply_theme(theme);
    }

    /// Measures the desktop container, or `None` when it is not mounted.
    pub fn desktop_viewport(&self) -> Option<Viewport> {
        host_ui::desktop_viewport()
    }

    /// Converts client coordinates into desktop-local coordinates.
    ///
    /// Returns `None` when the desktop container cannot be measured.
    pub fn desktop_pointer(&self, client_x: i32, client_y: i32) -> Option<PointerPosition> {
        host_ui::desktop_pointer(client_x, client_y)
    }
}
