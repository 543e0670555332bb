#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{PointerPosition, ThemeMode, Viewport, WindowKey};

/// DOM id of the desktop container every window is positioned in.
pub const DESKTOP_ROOT_ID: &str = "desktop-shell-root";

/// DOM id of a window frame.
pub(crate) fn window_dom_id(window: &WindowKey) -> String {
    format!("desktop-window-{window}")
}

#[cfg(target_arch = "wasm32")]
fn desktop_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let root = document.get_element_by_id(DESKTOP_ROOT_ID)?;
    let rect = root.get_bounding_client_rect();
    (rect.width() > 0.0 && rect.height() > 0.0).then_some(rect)
}

pub(super) fn desktop_viewport() -> Option<Viewport> {
    #[cfg(target_arch = "wasm32")]
    {
        let rect = desktop_rect()?;
        Some(Viewport::new(rect.width() as i32, rect.height() as i32))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub(super) fn desktop_pointer(client_x: i32, client_y: i32) -> Option<PointerPosition> {
    #[cfg(target_arch = "wasm32")]
    {
        let rect = desktop_rect()?;
        Some(PointerPosition {
            x: client_x - rect.left() as i32,
            y: client_y - rect.top() as i32,
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (client_x, client_y);
        None
    }
}

pub(super) fn focus_window(window: &WindowKey) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(browser) = web_sys::window() else {
            return;
        };
        let Some(document) = browser.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&window_dom_id(window)) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = browser
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window;
}

pub(super) fn apply_theme(theme: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root
            .class_list()
            .toggle_with_force("dark", theme == ThemeMode::Dark);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}
