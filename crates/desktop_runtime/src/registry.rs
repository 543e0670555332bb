//! Window registry lifecycle operations: open/close toggling, minimize, raise, shutdown and
//! session hydration.
//!
//! Stacking uses two bands. Folder windows always sit at [`FOLDER_Z_INDEX`]; every other
//! window is raised to `max(all z-indices, APP_Z_INDEX_FLOOR) + Z_INDEX_INCREMENT`, so app
//! windows paint above folders no matter the call order.

use std::collections::BTreeSet;

use crate::model::{DesktopState, SessionSnapshot, StackingBand, WindowKey};
use crate::reducer::ReducerError;
use crate::window_manager;

/// Fixed z-index of folder-band windows.
pub const FOLDER_Z_INDEX: u32 = 1000;
/// Lowest base for raising app windows.
pub const APP_Z_INDEX_FLOOR: u32 = 1100;
/// Step added on every raise.
pub const Z_INDEX_INCREMENT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of [`toggle_window`].
pub enum ToggleOutcome {
    Opened,
    Closed,
}

fn index_of(state: &DesktopState, id: &WindowKey) -> Result<usize, ReducerError> {
    state
        .windows
        .iter()
        .position(|w| &w.id == id)
        .ok_or_else(|| ReducerError::WindowNotFound(id.clone()))
}

/// Next z-index for a window raised to the top of the app band.
pub fn next_top_z_index(state: &DesktopState) -> u32 {
    state
        .windows
        .iter()
        .map(|w| w.z_index)
        .fold(APP_Z_INDEX_FLOOR, u32::max)
        + Z_INDEX_INCREMENT
}

fn raise(state: &mut DesktopState, index: usize) {
    let z_index = match state.windows[index].stacking {
        StackingBand::Folder => FOLDER_Z_INDEX,
        StackingBand::App => next_top_z_index(state),
    };
    state.windows[index].z_index = z_index;
}

fn forget_minimized(state: &mut DesktopState, id: &WindowKey) {
    state.minimized_order.retain(|entry| entry != id);
}

/// Computes geometry for a window that just became visible.
fn place(state: &mut DesktopState, index: usize) {
    let descriptor = &state.windows[index];
    let geometry = window_manager::open_geometry(
        descriptor,
        state.geometry.get(&descriptor.id).copied(),
        state.viewport,
        &state.layout,
    );
    state.geometry.insert(descriptor.id.clone(), geometry);
}

fn close_at(state: &mut DesktopState, index: usize) {
    let window = &mut state.windows[index];
    window.is_open = false;
    window.is_minimized = false;
    let id = window.id.clone();
    forget_minimized(state, &id);
    state.geometry.remove(&id);
}

/// Opens a closed or minimized window on top, or closes a visible one.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when `id` is not registered.
pub fn toggle_window(
    state: &mut DesktopState,
    id: &WindowKey,
) -> Result<ToggleOutcome, ReducerError> {
    let index = index_of(state, id)?;
    if state.windows[index].is_visible() {
        close_at(state, index);
        return Ok(ToggleOutcome::Closed);
    }

    raise(state, index);
    let window = &mut state.windows[index];
    window.is_open = true;
    window.is_minimized = false;
    forget_minimized(state, id);
    place(state, index);
    Ok(ToggleOutcome::Opened)
}

/// Hides an open window and appends it to the taskbar's minimized list.
///
/// Returns `false` when nothing changed (already minimized, or closed).
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when `id` is not registered.
pub fn minimize_window(state: &mut DesktopState, id: &WindowKey) -> Result<bool, ReducerError> {
    let index = index_of(state, id)?;
    let window = &mut state.windows[index];
    if !window.is_open || window.is_minimized {
        return Ok(false);
    }
    window.is_minimized = true;
    if !state.minimized_order.contains(id) {
        state.minimized_order.push(id.clone());
    }
    Ok(true)
}

/// Raises `id` above every other window, opening and un-minimizing it.
///
/// Returns `false` when the window was already visible at the top of its band.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when `id` is not registered.
pub fn bring_to_front(state: &mut DesktopState, id: &WindowKey) -> Result<bool, ReducerError> {
    let index = index_of(state, id)?;
    let window = &state.windows[index];
    if window.is_visible() {
        let already_top = match window.stacking {
            StackingBand::Folder => window.z_index == FOLDER_Z_INDEX,
            StackingBand::App => state
                .windows
                .iter()
                .all(|other| &other.id == id || other.z_index < window.z_index),
        };
        if already_top {
            return Ok(false);
        }
    }

    let became_visible = !window.is_visible();
    raise(state, index);
    let window = &mut state.windows[index];
    window.is_open = true;
    window.is_minimized = false;
    forget_minimized(state, id);
    if became_visible || !state.geometry.contains_key(id) {
        place(state, index);
    }
    Ok(true)
}

/// Closes a window regardless of its minimized state. Returns `false` when it was closed.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when `id` is not registered.
pub fn close_window(state: &mut DesktopState, id: &WindowKey) -> Result<bool, ReducerError> {
    let index = index_of(state, id)?;
    if !state.windows[index].is_open {
        return Ok(false);
    }
    close_at(state, index);
    Ok(true)
}

/// Toggles maximized geometry for a visible, maximizable window.
///
/// Returns `false` when the window cannot be maximized or is not visible.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when `id` is not registered.
pub fn toggle_maximize(state: &mut DesktopState, id: &WindowKey) -> Result<bool, ReducerError> {
    let index = index_of(state, id)?;
    let window = &state.windows[index];
    if !window.is_visible() || !window.capabilities.maximizable {
        return Ok(false);
    }
    let Some(geometry) = state.geometry.get(id).copied() else {
        return Ok(false);
    };
    let next = if geometry.maximized {
        window_manager::restore(geometry)
    } else {
        window_manager::maximize(geometry, state.viewport, &state.layout)
    };
    state.geometry.insert(id.clone(), next);
    Ok(true)
}

/// Closes every window and enters the powered-off state.
pub fn handle_shutdown(state: &mut DesktopState) {
    for window in &mut state.windows {
        window.is_open = false;
        window.is_minimized = false;
    }
    state.minimized_order.clear();
    state.geometry.clear();
    state.powered_off = true;
}

/// Restores a persisted session.
///
/// Unknown and duplicate ids are skipped. Open ids are raised in list order so the last listed
/// ends on top; minimized ids are restored as open and minimized.
pub fn hydrate_session(state: &mut DesktopState, snapshot: &SessionSnapshot) {
    let mut seen = BTreeSet::new();
    for id in &snapshot.open {
        if !seen.insert(id) {
            continue;
        }
        let Ok(index) = index_of(state, id) else {
            continue;
        };
        raise(state, index);
        state.windows[index].is_open = true;
    }

    let mut seen = BTreeSet::new();
    for id in &snapshot.minimized {
        if !seen.insert(id) {
            continue;
        }
        let Ok(index) = index_of(state, id) else {
            continue;
        };
        let window = &mut state.windows[index];
        if !window.is_open {
            window.is_open = true;
            raise(state, index);
        }
        state.windows[index].is_minimized = true;
        if !state.minimized_order.contains(id) {
            state.minimized_order.push(id.clone());
        }
    }

    for index in 0..state.windows.len() {
        if state.windows[index].is_visible() {
            place(state, index);
        }
    }
}

/// Updates the viewport and re-fits visible windows. Returns `true` when any geometry moved.
pub fn apply_viewport(state: &mut DesktopState, viewport: crate::model::Viewport) -> bool {
    if state.viewport == viewport {
        return false;
    }
    state.viewport = viewport;
    let mut moved = false;
    for window in state.windows.iter().filter(|w| w.is_visible()) {
        let Some(geometry) = state.geometry.get(&window.id).copied() else {
            continue;
        };
        if let Some(next) =
            window_manager::reclamp_on_viewport_resize(geometry, viewport, &state.layout)
        {
            state.geometry.insert(window.id.clone(), next);
            moved = true;
        }
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_registry;
    use crate::model::{DesktopSettings, LayoutConfig, Point, Size, Viewport};
    use pretty_assertions::assert_eq;

    fn state() -> DesktopState {
        let settings = DesktopSettings::default();
        DesktopState::new(build_registry(&settings), LayoutConfig::default(), settings)
    }

    fn key(raw: &str) -> WindowKey {
        WindowKey::trusted(raw)
    }

    fn window<'a>(state: &'a DesktopState, raw: &str) -> &'a crate::model::WindowDescriptor {
        state.window(&key(raw)).expect("registered window")
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut state = state();
        let before = window(&state, "notepad").z_index;

        assert_eq!(
            toggle_window(&mut state, &key("notepad")),
            Ok(ToggleOutcome::Opened)
        );
        let opened = window(&state, "notepad");
        assert!(opened.is_open && !opened.is_minimized);
        assert!(opened.z_index > before);
        assert!(state.geometry.contains_key(&key("notepad")));

        assert_eq!(
            toggle_window(&mut state, &key("notepad")),
            Ok(ToggleOutcome::Closed)
        );
        let closed = window(&state, "notepad");
        assert!(!closed.is_open && !closed.is_minimized);
        assert!(!state.geometry.contains_key(&key("notepad")));
    }

    #[test]
    fn toggle_on_minimized_window_restores_it() {
        let mut state = state();
        toggle_window(&mut state, &key("music")).expect("open");
        minimize_window(&mut state, &key("music")).expect("minimize");

        assert_eq!(
            toggle_window(&mut state, &key("music")),
            Ok(ToggleOutcome::Opened)
        );
        assert!(window(&state, "music").is_visible());
        assert!(state.minimized_order.is_empty());
    }

    #[test]
    fn first_raise_starts_above_app_floor() {
        let mut state = state();
        toggle_window(&mut state, &key("calculator")).expect("open");
        assert_eq!(
            window(&state, "calculator").z_index,
            APP_Z_INDEX_FLOOR + Z_INDEX_INCREMENT
        );
    }

    #[test]
    fn unknown_ids_report_not_found_without_mutation() {
        let mut state = state();
        let before = state.clone();
        assert_eq!(
            toggle_window(&mut state, &key("nope")),
            Err(ReducerError::WindowNotFound(key("nope")))
        );
        assert!(minimize_window(&mut state, &key("nope")).is_err());
        assert!(bring_to_front(&mut state, &key("nope")).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn minimize_is_idempotent() {
        let mut state = state();
        toggle_window(&mut state, &key("calculator")).expect("open");

        assert_eq!(minimize_window(&mut state, &key("calculator")), Ok(true));
        let once = state.clone();
        assert_eq!(minimize_window(&mut state, &key("calculator")), Ok(false));
        assert_eq!(state, once);

        let calculator = window(&state, "calculator");
        assert!(calculator.is_open && calculator.is_minimized);
        assert_eq!(state.minimized_order, vec![key("calculator")]);
    }

    #[test]
    fn minimize_ignores_closed_windows() {
        let mut state = state();
        assert_eq!(minimize_window(&mut state, &key("calculator")), Ok(false));
        assert!(!window(&state, "calculator").is_minimized);
        assert!(state.minimized_order.is_empty());
    }

    #[test]
    fn bring_to_front_outranks_every_other_window() {
        let mut state = state();
        for id in ["about", "calculator", "notepad", "terminal"] {
            toggle_window(&mut state, &key(id)).expect("open");
        }
        assert_eq!(bring_to_front(&mut state, &key("about")), Ok(true));
        let about = window(&state, "about").z_index;
        for other in state.windows.iter().filter(|w| w.id.as_str() != "about") {
            assert!(about > other.z_index, "{} not below about", other.id);
        }
    }

    #[test]
    fn bring_to_front_on_current_top_is_noop() {
        let mut state = state();
        toggle_window(&mut state, &key("about")).expect("open");
        toggle_window(&mut state, &key("skills")).expect("open");
        let before = state.clone();
        assert_eq!(bring_to_front(&mut state, &key("skills")), Ok(false));
        assert_eq!(state, before);
    }

    #[test]
    fn folders_stay_in_folder_band_beneath_apps() {
        let mut state = state();
        toggle_window(&mut state, &key("calculator")).expect("open");
        toggle_window(&mut state, &key("games-folder-window")).expect("open folder");
        bring_to_front(&mut state, &key("utilities-folder-window")).expect("raise folder");
        bring_to_front(&mut state, &key("games-folder-window")).expect("raise folder");

        assert_eq!(window(&state, "games-folder-window").z_index, FOLDER_Z_INDEX);
        assert_eq!(
            window(&state, "utilities-folder-window").z_index,
            FOLDER_Z_INDEX
        );
        assert!(window(&state, "calculator").z_index > FOLDER_Z_INDEX);

        toggle_window(&mut state, &key("snake")).expect("open from folder");
        assert!(window(&state, "snake").z_index > window(&state, "calculator").z_index);
    }

    #[test]
    fn close_clears_minimized_and_geometry() {
        let mut state = state();
        toggle_window(&mut state, &key("battery")).expect("open");
        minimize_window(&mut state, &key("battery")).expect("minimize");

        assert_eq!(close_window(&mut state, &key("battery")), Ok(true));
        assert!(!window(&state, "battery").is_open);
        assert!(state.minimized_order.is_empty());
        assert!(state.geometry.is_empty());
        assert_eq!(close_window(&mut state, &key("battery")), Ok(false));
    }

    #[test]
    fn shutdown_closes_everything() {
        let mut state = state();
        toggle_window(&mut state, &key("about")).expect("open");
        toggle_window(&mut state, &key("volume")).expect("open");
        minimize_window(&mut state, &key("volume")).expect("minimize");

        handle_shutdown(&mut state);
        assert!(state.windows.iter().all(|w| !w.is_open && !w.is_minimized));
        assert!(state.minimized_order.is_empty());
        assert!(state.geometry.is_empty());
        assert!(state.powered_off);
    }

    #[test]
    fn hydrate_restores_order_and_minimized_windows() {
        let mut state = state();
        let snapshot = SessionSnapshot {
            open: vec![
                key("about"),
                key("ghost"),
                key("notepad"),
                key("about"),
                key("terminal"),
            ],
            minimized: vec![key("terminal"), key("calculator")],
        };
        hydrate_session(&mut state, &snapshot);

        assert!(window(&state, "about").is_visible());
        assert!(window(&state, "notepad").is_visible());
        assert!(window(&state, "notepad").z_index > window(&state, "about").z_index);
        let terminal = window(&state, "terminal");
        assert!(terminal.is_open && terminal.is_minimized);
        let calculator = window(&state, "calculator");
        assert!(calculator.is_open && calculator.is_minimized);
        assert_eq!(
            state.minimized_order,
            vec![key("terminal"), key("calculator")]
        );
        assert_eq!(state.top_window_id(), Some(key("notepad")));
        assert_eq!(
            state.geometry.keys().cloned().collect::<Vec<_>>(),
            vec![key("about"), key("notepad")]
        );
    }

    #[test]
    fn maximize_toggle_respects_capabilities() {
        let mut state = state();
        toggle_window(&mut state, &key("about")).expect("open");
        let start = state.geometry_of(&key("about")).expect("placed");

        assert_eq!(toggle_maximize(&mut state, &key("about")), Ok(true));
        let maximized = state.geometry_of(&key("about")).expect("maximized");
        assert!(maximized.maximized);
        assert_eq!(maximized.size, Size::new(1920, 1032));

        assert_eq!(toggle_maximize(&mut state, &key("about")), Ok(true));
        assert_eq!(state.geometry_of(&key("about")), Some(start));

        state.windows.iter_mut().for_each(|w| {
            if w.id.as_str() == "about" {
                w.capabilities.maximizable = false;
            }
        });
        assert_eq!(toggle_maximize(&mut state, &key("about")), Ok(false));
    }

    #[test]
    fn viewport_change_keeps_windows_in_work_area() {
        let mut state = state();
        toggle_window(&mut state, &key("whiteboard")).expect("open");
        state
            .geometry
            .get_mut(&key("whiteboard"))
            .expect("placed")
            .position = Point::new(1100, 400);

        let viewport = Viewport::new(1280, 720);
        assert!(apply_viewport(&mut state, viewport));
        let geometry = state.geometry_of(&key("whiteboard")).expect("placed");
        assert_eq!(geometry.position, Point::new(480, 60));
        assert!(!apply_viewport(&mut state, viewport));
    }
}
