//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{taskbar::Taskbar, window::WindowShell};

use crate::{
    apps,
    host::DESKTOP_ROOT_ID,
    icons::{Icon, IconName, IconSize},
    model::{
        DesktopState, PointerPosition, ResizeEdge, ThemeMode, WindowCapabilities, WindowGeometry,
        WindowDescriptor, WindowGroup, WindowKey,
    },
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

/// Ids of windows that currently render, in registry order.
fn visible_window_ids(state: &DesktopState) -> Vec<WindowKey> {
    state
        .windows
        .iter()
        .filter(|w| w.is_visible())
        .map(|w| w.id.clone())
        .collect()
}

/// Portfolio windows are launched from desktop icons.
fn desktop_icon_windows(state: &DesktopState) -> Vec<(WindowKey, String, IconName)> {
    state
        .windows
        .iter()
        .filter(|w| w.group == WindowGroup::Portfolio)
        .map(|w| (w.id.clone(), w.title.clone(), IconName::from_id(&w.icon_id)))
        .collect()
}

fn wallpaper_style(wallpaper: &str) -> String {
    let url = wallpaper.trim();
    if url.is_empty() {
        String::new()
    } else {
        format!(
            "background-image:url(\"{}\");background-size:cover;background-position:center;",
            url.replace('"', "%22")
        )
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn stop_pointer_event(ev: web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn desktop_pointer(
    runtime: DesktopRuntimeContext,
    ev: &web_sys::PointerEvent,
) -> Option<PointerPosition> {
    runtime
        .host
        .with_value(|host| host.desktop_pointer(ev.client_x(), ev.client_y()))
}

fn measure_viewport(runtime: DesktopRuntimeContext) {
    if let Some(viewport) = runtime.host.with_value(|host| host.desktop_viewport()) {
        runtime.dispatch_action(DesktopAction::ViewportResized { viewport });
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

#[component]
/// Renders the desktop: wallpaper, window layer, taskbar and the powered-off overlay.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_ids = create_memo(move |_| state.with(visible_window_ids));

    let pointer_move_listener = window_event_listener(ev::pointermove, move |ev| {
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_none() && interaction.resizing.is_none() {
            return;
        }
        let Some(pointer) = desktop_pointer(runtime, &ev) else {
            return;
        };
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateDrag { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    on_cleanup(move || pointer_move_listener.remove());

    let pointer_up_listener =
        window_event_listener(ev::pointerup, move |_| end_active_pointer_interaction(runtime));
    on_cleanup(move || pointer_up_listener.remove());
    let pointer_cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        end_active_pointer_interaction(runtime)
    });
    on_cleanup(move || pointer_cancel_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| measure_viewport(runtime));
    on_cleanup(move || resize_listener.remove());
    request_animation_frame(move || measure_viewport(runtime));

    view! {
        <div
            id=DESKTOP_ROOT_ID
            class="desktop-shell"
            class:dark=move || state.with(|s| s.settings.theme == ThemeMode::Dark)
            tabindex="-1"
            style=move || state.with(|s| wallpaper_style(&s.wallpaper))
        >
            <ul class="desktop-icons" role="list">
                <For
                    each=move || state.with(desktop_icon_windows)
                    key=|(id, _, _)| id.clone()
                    let:icon
                >
                    {
                        let (id, title, icon) = icon;
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="desktop-icon"
                                    on:dblclick=move |_| {
                                        runtime.dispatch_action(DesktopAction::ToggleWindow {
                                            window: id.clone(),
                                        })
                                    }
                                >
                                    <Icon icon=icon size=IconSize::Lg />
                                    <span>{title}</span>
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>

            <div class="desktop-window-layer">
                <For each=move || window_ids.get() key=|id| id.clone() let:id>
                    <WindowShell window=id />
                </For>
            </div>

            <Taskbar />

            <Show when=move || state.with(|s| s.powered_off) fallback=|| ()>
                <div class="power-overlay" role="dialog" aria-label="Powered off">
                    <button
                        type="button"
                        class="power-on"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::PowerOn)
                    >
                        <Icon icon=IconName::Power size=IconSize::Xl />
                        <span>"Power on"</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}
