//! Position/size resolver: pure geometry helpers used by the desktop reducer.
//!
//! Every function takes the viewport and [`LayoutConfig`] explicitly so the same rules apply to
//! boot placement, viewport resizes and pointer gestures.

use crate::model::{
    LayoutConfig, Point, ResizeEdge, RestoreGeometry, Size, Viewport, WindowDescriptor,
    WindowGeometry,
};

fn clamp_axis(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// Height available to windows above the taskbar.
pub fn work_area_height(viewport: Viewport, layout: &LayoutConfig) -> i32 {
    viewport.height - layout.taskbar_height
}

/// Clamps `position` so a window of `size` stays fully inside the work area.
///
/// Windows larger than the work area are pinned to `0` on that axis.
pub fn clamp_into_viewport(
    position: Point,
    size: Size,
    viewport: Viewport,
    layout: &LayoutConfig,
) -> Point {
    let max_x = (viewport.width - size.width).max(0);
    let max_y = (work_area_height(viewport, layout) - size.height).max(0);
    Point::new(
        clamp_axis(position.x, 0, max_x),
        clamp_axis(position.y, 0, max_y),
    )
}

/// Centers a window of `size` in the work area.
pub fn centered_position(size: Size, viewport: Viewport, layout: &LayoutConfig) -> Point {
    let candidate = Point::new(
        (viewport.width - size.width) / 2,
        (work_area_height(viewport, layout) - size.height) / 2,
    );
    clamp_into_viewport(candidate, size, viewport, layout)
}

/// Size a window opens with when it has no geometry yet.
pub fn initial_size(descriptor: &WindowDescriptor, layout: &LayoutConfig) -> Size {
    descriptor.default_size.unwrap_or_else(|| layout.default_size())
}

/// Placement for a window becoming visible: its default position clamped, else centered.
pub fn initial_position(
    descriptor: &WindowDescriptor,
    size: Size,
    viewport: Viewport,
    layout: &LayoutConfig,
) -> Point {
    match descriptor.default_position {
        Some(position) => clamp_into_viewport(position, size, viewport, layout),
        None => centered_position(size, viewport, layout),
    }
}

/// Full-viewport rectangle used while maximized.
pub fn maximized_rect(viewport: Viewport, layout: &LayoutConfig) -> (Point, Size) {
    (
        Point::new(0, 0),
        Size::new(
            viewport.width,
            viewport.height - layout.maximized_chrome_height,
        ),
    )
}

/// Geometry for a transition into visibility.
///
/// A maximized window keeps its maximized state (refitted to the viewport); anything else is
/// re-placed with its current size.
pub fn open_geometry(
    descriptor: &WindowDescriptor,
    previous: Option<WindowGeometry>,
    viewport: Viewport,
    layout: &LayoutConfig,
) -> WindowGeometry {
    match previous {
        Some(geometry) if geometry.maximized => {
            let (position, size) = maximized_rect(viewport, layout);
            WindowGeometry {
                position,
                size,
                ..geometry
            }
        }
        Some(geometry) => WindowGeometry {
            position: initial_position(descriptor, geometry.size, viewport, layout),
            ..geometry
        },
        None => {
            let size = initial_size(descriptor, layout);
            WindowGeometry::new(
                initial_position(descriptor, size, viewport, layout),
                size,
            )
        }
    }
}

/// Re-fits a window after the viewport changed. Returns `None` when nothing moved.
pub fn reclamp_on_viewport_resize(
    geometry: WindowGeometry,
    viewport: Viewport,
    layout: &LayoutConfig,
) -> Option<WindowGeometry> {
    let next = if geometry.maximized {
        let (position, size) = maximized_rect(viewport, layout);
        WindowGeometry {
            position,
            size,
            ..geometry
        }
    } else {
        WindowGeometry {
            position: clamp_into_viewport(geometry.position, geometry.size, viewport, layout),
            ..geometry
        }
    };
    (next != geometry).then_some(next)
}

/// Records the current rectangle and switches to the maximized rectangle.
pub fn maximize(
    geometry: WindowGeometry,
    viewport: Viewport,
    layout: &LayoutConfig,
) -> WindowGeometry {
    if geometry.maximized {
        return geometry;
    }
    let (position, size) = maximized_rect(viewport, layout);
    WindowGeometry {
        position,
        size,
        maximized: true,
        restore: Some(RestoreGeometry {
            position: geometry.position,
            size: geometry.size,
        }),
    }
}

/// Returns to the rectangle recorded by [`maximize`].
pub fn restore(geometry: WindowGeometry) -> WindowGeometry {
    match geometry.restore {
        Some(saved) => WindowGeometry::new(saved.position, saved.size),
        None => WindowGeometry {
            maximized: false,
            ..geometry
        },
    }
}

/// Candidate position for a drag moved by `(dx, dy)` from `start`.
///
/// At least `drag_visible_margin` pixels of the window stay reachable horizontally, and the
/// title bar never leaves the top or bottom of the viewport.
pub fn drag_position(
    start: Point,
    size: Size,
    dx: i32,
    dy: i32,
    viewport: Viewport,
    layout: &LayoutConfig,
) -> Point {
    let margin = layout.drag_visible_margin;
    let min_x = -size.width + margin;
    let max_x = (viewport.width - margin).max(min_x);
    let max_y = (viewport.height - margin).max(0);
    let candidate = start.offset(dx, dy);
    Point::new(
        clamp_axis(candidate.x, min_x, max_x),
        clamp_axis(candidate.y, 0, max_y),
    )
}

/// Rectangle for a resize gesture from `edge` moved by `(dx, dy)` since `start`.
///
/// Left and top edges move the origin so the opposite edge stays fixed; both dimensions are
/// floored at the layout minimum.
pub fn resize_geometry(
    start: WindowGeometry,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    layout: &LayoutConfig,
) -> WindowGeometry {
    let mut position = start.position;
    let mut size = start.size;

    if edge.moves_right() {
        size.width = (start.size.width + dx).max(layout.min_width);
    }
    if edge.moves_left() {
        let right = start.position.x + start.size.width;
        size.width = (start.size.width - dx).max(layout.min_width);
        position.x = right - size.width;
    }
    if edge.moves_bottom() {
        size.height = (start.size.height + dy).max(layout.min_height);
    }
    if edge.moves_top() {
        let bottom = start.position.y + start.size.height;
        size.height = (start.size.height - dy).max(layout.min_height);
        position.y = (bottom - size.height).max(0);
        size.height = bottom - position.y;
    }

    WindowGeometry {
        position,
        size,
        ..start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ChromeVisibility, StackingBand, WindowCapabilities, WindowGroup, WindowKey,
    };
    use pretty_assertions::assert_eq;

    fn layout() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn viewport() -> Viewport {
        Viewport::new(1920, 1080)
    }

    fn descriptor(default_position: Option<Point>) -> WindowDescriptor {
        WindowDescriptor {
            id: WindowKey::trusted("calculator"),
            title: "Calculator".to_string(),
            icon_id: "calculator".to_string(),
            content: "utility.calculator".to_string(),
            group: WindowGroup::Utility,
            is_open: false,
            is_minimized: false,
            z_index: 100,
            default_size: None,
            default_position,
            capabilities: WindowCapabilities::default(),
            chrome: ChromeVisibility::default(),
            stacking: StackingBand::App,
        }
    }

    #[test]
    fn new_windows_center_above_the_taskbar() {
        let geometry = open_geometry(&descriptor(None), None, viewport(), &layout());
        assert_eq!(geometry.size, Size::new(700, 500));
        assert_eq!(geometry.position, Point::new(610, 260));
        assert!(!geometry.maximized);
    }

    #[test]
    fn default_position_is_clamped_into_work_area() {
        let geometry = open_geometry(
            &descriptor(Some(Point::new(1800, 900))),
            None,
            viewport(),
            &layout(),
        );
        assert_eq!(geometry.position, Point::new(1220, 520));
    }

    #[test]
    fn oversized_windows_pin_to_origin() {
        let small = Viewport::new(500, 400);
        let position = clamp_into_viewport(
            Point::new(-40, 90),
            Size::new(700, 500),
            small,
            &layout(),
        );
        assert_eq!(position, Point::new(0, 0));
    }

    #[test]
    fn reopening_keeps_size_but_replaces_position() {
        let previous = WindowGeometry::new(Point::new(3, 4), Size::new(900, 640));
        let geometry = open_geometry(&descriptor(None), Some(previous), viewport(), &layout());
        assert_eq!(geometry.size, Size::new(900, 640));
        assert_eq!(geometry.position, Point::new(510, 190));
    }

    #[test]
    fn reopening_maximized_window_stays_maximized() {
        let start = WindowGeometry::new(Point::new(10, 10), Size::new(700, 500));
        let maximized = maximize(start, viewport(), &layout());
        let geometry = open_geometry(
            &descriptor(None),
            Some(maximized),
            Viewport::new(1280, 720),
            &layout(),
        );
        assert!(geometry.maximized);
        assert_eq!(geometry.size, Size::new(1280, 672));
        assert_eq!(geometry.restore, maximized.restore);
    }

    #[test]
    fn maximize_restore_round_trip_is_exact() {
        let start = WindowGeometry::new(Point::new(123, 45), Size::new(640, 480));
        let maximized = maximize(start, viewport(), &layout());
        assert_eq!(maximized.position, Point::new(0, 0));
        assert_eq!(maximized.size, Size::new(1920, 1032));
        assert!(maximized.maximized);
        assert_eq!(restore(maximized), start);
    }

    #[test]
    fn maximize_twice_keeps_first_restore_rect() {
        let start = WindowGeometry::new(Point::new(5, 6), Size::new(400, 300));
        let once = maximize(start, viewport(), &layout());
        let twice = maximize(once, viewport(), &layout());
        assert_eq!(once, twice);
        assert_eq!(restore(twice), start);
    }

    #[test]
    fn viewport_resize_reclamps_and_skips_noops() {
        let geometry = WindowGeometry::new(Point::new(1200, 500), Size::new(700, 500));
        assert_eq!(
            reclamp_on_viewport_resize(geometry, viewport(), &layout()),
            None
        );

        let shrunk = Viewport::new(1280, 720);
        let next = reclamp_on_viewport_resize(geometry, shrunk, &layout()).expect("moved");
        assert_eq!(next.position, Point::new(580, 160));
        assert!(next.position.x <= shrunk.width - next.size.width);
        assert!(next.position.y <= shrunk.height - next.size.height - layout().taskbar_height);
    }

    #[test]
    fn viewport_resize_refits_maximized_windows() {
        let start = WindowGeometry::new(Point::new(20, 20), Size::new(700, 500));
        let maximized = maximize(start, viewport(), &layout());
        let next = reclamp_on_viewport_resize(maximized, Viewport::new(1024, 768), &layout())
            .expect("refit");
        assert_eq!(next.size, Size::new(1024, 720));
        assert_eq!(restore(next), start);
    }

    #[test]
    fn drag_left_clamps_to_visible_margin() {
        let size = Size::new(700, 500);
        let position = drag_position(
            Point::new(0, 100),
            size,
            -5_000,
            0,
            viewport(),
            &layout(),
        );
        assert_eq!(position, Point::new(-700 + 100, 100));
    }

    #[test]
    fn drag_clamps_right_top_and_bottom() {
        let size = Size::new(700, 500);
        let start = Point::new(100, 100);
        assert_eq!(
            drag_position(start, size, 9_000, 9_000, viewport(), &layout()),
            Point::new(1820, 980)
        );
        assert_eq!(
            drag_position(start, size, 0, -500, viewport(), &layout()),
            Point::new(100, 0)
        );
        assert_eq!(
            drag_position(start, size, 30, 40, viewport(), &layout()),
            Point::new(130, 140)
        );
    }

    #[test]
    fn resize_right_and_bottom_change_size_only() {
        let start = WindowGeometry::new(Point::new(100, 100), Size::new(700, 500));
        let next = resize_geometry(start, ResizeEdge::SouthEast, 50, 60, &layout());
        assert_eq!(next.position, Point::new(100, 100));
        assert_eq!(next.size, Size::new(750, 560));
    }

    #[test]
    fn resize_left_and_top_keep_opposite_edges_fixed() {
        let start = WindowGeometry::new(Point::new(100, 100), Size::new(700, 500));
        let next = resize_geometry(start, ResizeEdge::NorthWest, -40, 30, &layout());
        assert_eq!(next.position, Point::new(60, 130));
        assert_eq!(next.size, Size::new(740, 470));
        assert_eq!(next.position.x + next.size.width, 800);
        assert_eq!(next.position.y + next.size.height, 600);
    }

    #[test]
    fn resize_floors_at_minimum_size() {
        let start = WindowGeometry::new(Point::new(100, 100), Size::new(700, 500));
        let shrunk = resize_geometry(start, ResizeEdge::SouthEast, -2_000, -2_000, &layout());
        assert_eq!(shrunk.size, Size::new(300, 200));

        let from_left = resize_geometry(start, ResizeEdge::West, 2_000, 0, &layout());
        assert_eq!(from_left.size.width, 300);
        assert_eq!(from_left.position.x, 500);
    }

    #[test]
    fn resize_from_top_never_crosses_viewport_top() {
        let start = WindowGeometry::new(Point::new(100, 50), Size::new(700, 500));
        let next = resize_geometry(start, ResizeEdge::North, 0, -400, &layout());
        assert_eq!(next.position.y, 0);
        assert_eq!(next.size.height, 550);
    }
}
