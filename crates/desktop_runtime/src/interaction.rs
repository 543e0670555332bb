//! Drag/resize interaction controller.
//!
//! Gestures record where the pointer and window started; every move recomputes geometry from
//! those starting values through [`crate::window_manager`].

use crate::model::{
    DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession,
    WindowKey,
};
use crate::reducer::ReducerError;
use crate::registry;
use crate::window_manager;

/// Focuses `id` and starts a drag session when the window may move.
///
/// Maximized windows and windows under an active resize are focused but not dragged. Returns
/// `true` when a session started.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when `id` is not registered.
pub fn begin_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    id: &WindowKey,
    pointer: PointerPosition,
) -> Result<bool, ReducerError> {
    registry::bring_to_front(state, id)?;
    if interaction.resizing.is_some() {
        return Ok(false);
    }
    let Some(geometry) = state.geometry_of(id) else {
        return Ok(false);
    };
    if geometry.maximized {
        return Ok(false);
    }
    interaction.dragging = Some(DragSession {
        window: id.clone(),
        pointer_start: pointer,
        position_start: geometry.position,
    });
    Ok(true)
}

/// Moves the dragged window to follow `pointer`. Returns `true` when its position changed.
pub fn update_drag(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> bool {
    let Some(session) = interaction.dragging.as_ref() else {
        return false;
    };
    let Some(geometry) = state.geometry.get_mut(&session.window) else {
        return false;
    };
    if geometry.maximized {
        return false;
    }
    let next = window_manager::drag_position(
        session.position_start,
        geometry.size,
        pointer.x - session.pointer_start.x,
        pointer.y - session.pointer_start.y,
        state.viewport,
        &state.layout,
    );
    if next == geometry.position {
        return false;
    }
    geometry.position = next;
    true
}

/// Clears the drag session. Returns `true` when one was active.
pub fn end_drag(interaction: &mut InteractionState) -> bool {
    interaction.dragging.take().is_some()
}

/// Focuses `id` and starts resizing from `edge`.
///
/// Non-resizable and maximized windows are focused but not resized. Any drag in progress is
/// cancelled. Returns `true` when a session started.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when `id` is not registered.
pub fn begin_resize(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    id: &WindowKey,
    edge: ResizeEdge,
    pointer: PointerPosition,
) -> Result<bool, ReducerError> {
    registry::bring_to_front(state, id)?;
    let resizable = state
        .window(id)
        .map(|w| w.capabilities.resizable)
        .unwrap_or(false);
    let Some(geometry) = state.geometry_of(id) else {
        return Ok(false);
    };
    if !resizable || geometry.maximized {
        return Ok(false);
    }
    interaction.dragging = None;
    interaction.resizing = Some(ResizeSession {
        window: id.clone(),
        edge,
        pointer_start: pointer,
        geometry_start: geometry,
    });
    Ok(true)
}

/// Recomputes the resized rectangle for `pointer`. Returns `true` when geometry changed.
pub fn update_resize(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> bool {
    let Some(session) = interaction.resizing.as_ref() else {
        return false;
    };
    let next = window_manager::resize_geometry(
        session.geometry_start,
        session.edge,
        pointer.x - session.pointer_start.x,
        pointer.y - session.pointer_start.y,
        &state.layout,
    );
    let Some(geometry) = state.geometry.get_mut(&session.window) else {
        return false;
    };
    if *geometry == next {
        return false;
    }
    *geometry = next;
    true
}

/// Clears the resize session. Returns `true` when one was active.
pub fn end_resize(interaction: &mut InteractionState) -> bool {
    interaction.resizing.take().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_registry;
    use crate::model::{DesktopSettings, LayoutConfig, Point, Size};
    use pretty_assertions::assert_eq;

    fn open_state(id: &str) -> (DesktopState, InteractionState, WindowKey) {
        let settings = DesktopSettings::default();
        let mut state =
            DesktopState::new(build_registry(&settings), LayoutConfig::default(), settings);
        let key = WindowKey::trusted(id);
        registry::toggle_window(&mut state, &key).expect("open");
        (state, InteractionState::default(), key)
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn drag_moves_by_pointer_delta_from_start() {
        let (mut state, mut interaction, key) = open_state("about");
        let start = state.geometry_of(&key).expect("placed").position;

        assert_eq!(
            begin_drag(&mut state, &mut interaction, &key, at(700, 300)),
            Ok(true)
        );
        assert!(update_drag(&mut state, &interaction, at(720, 310)));
        assert!(update_drag(&mut state, &interaction, at(740, 330)));
        assert_eq!(
            state.geometry_of(&key).expect("placed").position,
            start.offset(40, 30)
        );
        assert!(end_drag(&mut interaction));
        assert!(!update_drag(&mut state, &interaction, at(0, 0)));
    }

    #[test]
    fn drag_left_from_origin_stops_at_margin() {
        let (mut state, mut interaction, key) = open_state("about");
        state.geometry.get_mut(&key).expect("placed").position = Point::new(0, 200);

        begin_drag(&mut state, &mut interaction, &key, at(50, 210)).expect("begin");
        update_drag(&mut state, &interaction, at(-4_000, 210));
        let geometry = state.geometry_of(&key).expect("placed");
        assert_eq!(geometry.position.x, -geometry.size.width + 100);
    }

    #[test]
    fn begin_drag_focuses_before_moving() {
        let (mut state, mut interaction, about) = open_state("about");
        let skills = WindowKey::trusted("skills");
        registry::toggle_window(&mut state, &skills).expect("open");
        assert_eq!(state.top_window_id(), Some(skills));

        begin_drag(&mut state, &mut interaction, &about, at(1, 1)).expect("begin");
        assert_eq!(state.top_window_id(), Some(about));
    }

    #[test]
    fn maximized_windows_focus_but_do_not_drag() {
        let (mut state, mut interaction, key) = open_state("about");
        registry::toggle_maximize(&mut state, &key).expect("maximize");

        assert_eq!(
            begin_drag(&mut state, &mut interaction, &key, at(10, 10)),
            Ok(false)
        );
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_is_refused_while_resizing() {
        let (mut state, mut interaction, key) = open_state("about");
        begin_resize(&mut state, &mut interaction, &key, ResizeEdge::East, at(0, 0))
            .expect("resize");
        assert_eq!(
            begin_drag(&mut state, &mut interaction, &key, at(0, 0)),
            Ok(false)
        );
        assert!(interaction.resizing.is_some());
    }

    #[test]
    fn resize_recomputes_from_gesture_start() {
        let (mut state, mut interaction, key) = open_state("about");
        let start = state.geometry_of(&key).expect("placed");

        begin_resize(
            &mut state,
            &mut interaction,
            &key,
            ResizeEdge::West,
            at(500, 500),
        )
        .expect("resize");
        update_resize(&mut state, &interaction, at(450, 500));
        update_resize(&mut state, &interaction, at(480, 520));
        let geometry = state.geometry_of(&key).expect("placed");
        assert_eq!(geometry.size, Size::new(start.size.width + 20, start.size.height));
        assert_eq!(
            geometry.position.x + geometry.size.width,
            start.position.x + start.size.width
        );
        assert!(end_resize(&mut interaction));
        assert!(!end_resize(&mut interaction));
    }

    #[test]
    fn non_resizable_windows_ignore_resize() {
        let (mut state, mut interaction, key) = open_state("about");
        for window in &mut state.windows {
            window.capabilities.resizable = false;
        }
        assert_eq!(
            begin_resize(&mut state, &mut interaction, &key, ResizeEdge::South, at(0, 0)),
            Ok(false)
        );
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn unknown_window_gestures_error() {
        let (mut state, mut interaction, _) = open_state("about");
        let ghost = WindowKey::trusted("ghost");
        assert!(begin_drag(&mut state, &mut interaction, &ghost, at(0, 0)).is_err());
        assert!(
            begin_resize(&mut state, &mut interaction, &ghost, ResizeEdge::North, at(0, 0))
                .is_err()
        );
    }
}
