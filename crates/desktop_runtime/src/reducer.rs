//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::AppCommand;
use thiserror::Error;

use crate::catalog;
use crate::interaction;
use crate::model::{
    DesktopSettings, DesktopState, InteractionState, PointerPosition, ResizeEdge,
    SessionSnapshot, ThemeMode, Viewport, WindowKey,
};
use crate::registry::{self, ToggleOutcome};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a closed/minimized window on top, or close a visible one.
    ToggleWindow {
        /// Target window.
        window: WindowKey,
    },
    /// Minimize an open window to the taskbar.
    MinimizeWindow {
        /// Target window.
        window: WindowKey,
    },
    /// Raise (and restore) a window; used for click-to-focus and taskbar chips.
    BringToFront {
        /// Target window.
        window: WindowKey,
    },
    /// Close a window if its descriptor allows closing.
    CloseWindow {
        /// Target window.
        window: WindowKey,
    },
    /// Maximize, or restore the pre-maximize rectangle.
    ToggleMaximize {
        /// Target window.
        window: WindowKey,
    },
    /// Close everything and power the desktop off.
    Shutdown,
    /// Leave the powered-off state.
    PowerOn,
    /// The desktop container changed size.
    ViewportResized {
        /// New viewport size.
        viewport: Viewport,
    },
    /// Pointer pressed on a title bar.
    BeginDrag {
        /// Window being dragged.
        window: WindowKey,
        /// Desktop-local pointer position.
        pointer: PointerPosition,
    },
    /// Pointer moved during a drag.
    UpdateDrag {
        /// Desktop-local pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released after a drag.
    EndDrag,
    /// Pointer pressed on a resize handle.
    BeginResize {
        /// Window being resized.
        window: WindowKey,
        /// Grabbed edge or corner.
        edge: ResizeEdge,
        /// Desktop-local pointer position.
        pointer: PointerPosition,
    },
    /// Pointer moved during a resize.
    UpdateResize {
        /// Desktop-local pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released after a resize.
    EndResize,
    /// Build the session's registry from the catalog and loaded settings.
    InitializeRegistry {
        /// Settings loaded at boot.
        settings: DesktopSettings,
    },
    /// Restore the persisted open/minimized session.
    HydrateSession {
        /// Persisted session.
        snapshot: SessionSnapshot,
    },
    /// Restore the persisted wallpaper URL.
    HydrateWallpaper {
        /// Wallpaper URL (empty for the solid background).
        wallpaper: String,
    },
    /// Restore the persisted power flag.
    HydratePowerState {
        /// Whether the desktop was shut down.
        powered_off: bool,
    },
    /// Replace user settings.
    ApplySettings {
        /// New settings.
        settings: DesktopSettings,
    },
    /// Replace the wallpaper URL.
    SetWallpaper {
        /// Wallpaper URL.
        wallpaper: String,
    },
    /// Command sent by the app hosted in `window`.
    HandleAppCommand {
        /// Window hosting the sending app.
        window: WindowKey,
        /// Requested command.
        command: AppCommand,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host runtime to execute.
pub enum RuntimeEffect {
    /// Persist open and minimized window ids.
    PersistSession,
    /// Persist settings and the theme flag.
    PersistSettings,
    /// Persist the wallpaper URL.
    PersistWallpaper,
    /// Persist or clear the powered-off flag.
    PersistPowerState,
    /// Reflect the theme on the document root.
    ApplyTheme(ThemeMode),
    /// Move keyboard focus into a window that was just raised.
    FocusWindow(WindowKey),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window id is not in the registry.
    #[error("window `{0}` is not registered")]
    WindowNotFound(WindowKey),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Any change to the open/minimized session or the stacking order emits
/// [`RuntimeEffect::PersistSession`]. Geometry is view state and never persisted.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references an unregistered window;
/// the state is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let session_before = state.session();
    let mut effects = Vec::new();
    match action {
        DesktopAction::ToggleWindow { window } => {
            if registry::toggle_window(state, &window)? == ToggleOutcome::Opened {
                effects.push(RuntimeEffect::FocusWindow(window));
            } else {
                clear_sessions_for(interaction, &window);
            }
        }
        DesktopAction::MinimizeWindow { window } => {
            if registry::minimize_window(state, &window)? {
                clear_sessions_for(interaction, &window);
            }
        }
        DesktopAction::BringToFront { window } => {
            if registry::bring_to_front(state, &window)? {
                effects.push(RuntimeEffect::FocusWindow(window));
            }
        }
        DesktopAction::CloseWindow { window } => {
            let closable = state
                .window(&window)
                .map(|w| w.capabilities.closable)
                .ok_or_else(|| ReducerError::WindowNotFound(window.clone()))?;
            if closable && registry::close_window(state, &window)? {
                clear_sessions_for(interaction, &window);
            }
        }
        DesktopAction::ToggleMaximize { window } => {
            if registry::toggle_maximize(state, &window)? {
                clear_sessions_for(interaction, &window);
            }
        }
        DesktopAction::Shutdown => {
            registry::handle_shutdown(state);
            *interaction = InteractionState::default();
            effects.push(RuntimeEffect::PersistPowerState);
        }
        DesktopAction::PowerOn => {
            if state.powered_off {
                state.powered_off = false;
                effects.push(RuntimeEffect::PersistPowerState);
            }
        }
        DesktopAction::ViewportResized { viewport } => {
            registry::apply_viewport(state, viewport);
        }
        DesktopAction::BeginDrag { window, pointer } => {
            interaction::begin_drag(state, interaction, &window, pointer)?;
        }
        DesktopAction::UpdateDrag { pointer } => {
            interaction::update_drag(state, interaction, pointer);
        }
        DesktopAction::EndDrag => {
            interaction::end_drag(interaction);
        }
        DesktopAction::BeginResize {
            window,
            edge,
            pointer,
        } => {
            interaction::begin_resize(state, interaction, &window, edge, pointer)?;
        }
        DesktopAction::UpdateResize { pointer } => {
            interaction::update_resize(state, interaction, pointer);
        }
        DesktopAction::EndResize => {
            interaction::end_resize(interaction);
        }
        DesktopAction::InitializeRegistry { settings } => {
            let theme = settings.theme;
            state.windows = catalog::build_registry(&settings);
            state.minimized_order.clear();
            state.geometry.clear();
            state.settings = settings;
            *interaction = InteractionState::default();
            effects.push(RuntimeEffect::ApplyTheme(theme));
            return Ok(effects);
        }
        DesktopAction::HydrateSession { snapshot } => {
            registry::hydrate_session(state, &snapshot);
            return Ok(effects);
        }
        DesktopAction::HydrateWallpaper { wallpaper } => {
            state.wallpaper = wallpaper;
        }
        DesktopAction::HydratePowerState { powered_off } => {
            state.powered_off = powered_off;
        }
        DesktopAction::ApplySettings { settings } => {
            let theme = settings.theme;
            state.settings = settings;
            effects.push(RuntimeEffect::PersistSettings);
            effects.push(RuntimeEffect::ApplyTheme(theme));
        }
        DesktopAction::SetWallpaper { wallpaper } => {
            if state.wallpaper != wallpaper {
                state.wallpaper = wallpaper;
                effects.push(RuntimeEffect::PersistWallpaper);
            }
        }
        DesktopAction::HandleAppCommand { window, command } => {
            let action = match command {
                AppCommand::ToggleWindow(target) => DesktopAction::ToggleWindow { window: target },
                AppCommand::MinimizeSelf => DesktopAction::MinimizeWindow { window },
                AppCommand::CloseSelf => DesktopAction::CloseWindow { window },
            };
            return reduce_desktop(state, interaction, action);
        }
    }

    if state.session() != session_before {
        effects.insert(0, RuntimeEffect::PersistSession);
    }
    Ok(effects)
}

fn clear_sessions_for(interaction: &mut InteractionState, window: &WindowKey) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| &session.window == window)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| &session.window == window)
    {
        interaction.resizing = None;
    }
}
