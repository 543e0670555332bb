use super::*;
use desktop_app_contract::{AppHost, AppMountContext};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::host::window_dom_id;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Inline style for a window's rectangle and stacking order.
pub(super) fn window_style(geometry: WindowGeometry, z_index: u32) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        geometry.position.x,
        geometry.position.y,
        geometry.size.width,
        geometry.size.height,
        z_index
    )
}

#[component]
pub(super) fn WindowShell(window: WindowKey) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let descriptor = {
        let window = window.clone();
        create_memo(move |_| runtime.state.with(|s| s.window(&window).cloned()))
    };
    let geometry = {
        let window = window.clone();
        create_memo(move |_| runtime.state.with(|s| s.geometry_of(&window)))
    };
    let is_top = {
        let window = window.clone();
        create_memo(move |_| runtime.state.with(|s| s.top_window_id().as_ref() == Some(&window)))
    };
    let dispatch = move |action: DesktopAction| runtime.dispatch_action(action);

    let focus = {
        let window = window.clone();
        move |_: web_sys::PointerEvent| {
            if !is_top.get_untracked() {
                dispatch(DesktopAction::BringToFront {
                    window: window.clone(),
                });
            }
        }
    };
    let begin_drag = {
        let window = window.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            let Some(pointer) = desktop_pointer(runtime, &ev) else {
                return;
            };
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            ev.stop_propagation();
            dispatch(DesktopAction::BeginDrag {
                window: window.clone(),
                pointer,
            });
        }
    };
    let toggle_maximize = {
        let window = window.clone();
        move || {
            dispatch(DesktopAction::ToggleMaximize {
                window: window.clone(),
            })
        }
    };
    let minimize = {
        let window = window.clone();
        move || {
            dispatch(DesktopAction::MinimizeWindow {
                window: window.clone(),
            })
        }
    };
    let close = {
        let window = window.clone();
        move || {
            dispatch(DesktopAction::CloseWindow {
                window: window.clone(),
            })
        }
    };

    let dom_id = window_dom_id(&window);
    let body_window = window.clone();
    let handle_window = window.clone();

    view! {
        <Show when=move || descriptor.with(|d| d.as_ref().is_some_and(|d| d.is_visible())) fallback=|| ()>
            {
                let toggle_maximize = toggle_maximize.clone();
                let toggle_maximize_dbl = toggle_maximize.clone();
                let minimize = minimize.clone();
                let close = close.clone();
                let begin_drag = begin_drag.clone();
                let focus = focus.clone();
                let body_window = body_window.clone();
                let handle_window = handle_window.clone();
                let title = move || descriptor.with(|d| d.as_ref().map(|d| d.title.clone()).unwrap_or_default());
                let icon = move || {
                    descriptor.with(|d| {
                        d.as_ref()
                            .map(|d| IconName::from_id(&d.icon_id))
                            .unwrap_or(IconName::AppWindow)
                    })
                };
                let maximized = move || geometry.with(|g| g.is_some_and(|g| g.maximized));
                let capability = move |pick: fn(&WindowCapabilities) -> bool| {
                    descriptor.with(|d| d.as_ref().is_some_and(|d| pick(&d.capabilities)))
                };

                view! {
                    <section
                        id=dom_id.clone()
                        class="desktop-window"
                        class:focused=move || is_top.get()
                        class:maximized=maximized
                        tabindex="-1"
                        role="dialog"
                        aria-label=title
                        style=move || {
                            let z_index = descriptor.with(|d| d.as_ref().map_or(0, |d| d.z_index));
                            geometry
                                .get()
                                .map(|g| window_style(g, z_index))
                                .unwrap_or_default()
                        }
                        on:pointerdown=focus
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_drag
                            on:dblclick=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                if capability(|c| c.maximizable) {
                                    toggle_maximize_dbl();
                                }
                            }
                        >
                            <div class="titlebar-title">
                                <span class="titlebar-app-icon" aria-hidden="true">
                                    {move || view! { <Icon icon=icon() size=IconSize::Sm /> }}
                                </span>
                                <span>{title}</span>
                            </div>
                            <div class="titlebar-controls">
                                <button
                                    type="button"
                                    aria-label="Minimize window"
                                    on:pointerdown=stop_pointer_event
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize();
                                    }
                                >
                                    <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </button>
                                <button
                                    type="button"
                                    disabled=move || !capability(|c| c.maximizable)
                                    aria-label=move || if maximized() { "Restore window" } else { "Maximize window" }
                                    on:pointerdown=stop_pointer_event
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_maximize();
                                    }
                                >
                                    {move || {
                                        let icon = if maximized() {
                                            IconName::WindowRestore
                                        } else {
                                            IconName::WindowMaximize
                                        };
                                        view! { <Icon icon=icon size=IconSize::Xs /> }
                                    }}
                                </button>
                                <button
                                    type="button"
                                    class="close"
                                    disabled=move || !capability(|c| c.closable)
                                    aria-label="Close window"
                                    on:pointerdown=stop_pointer_event
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close();
                                    }
                                >
                                    <Icon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                            </div>
                        </header>
                        <div class="window-body">
                            <WindowBody window=body_window.clone() />
                        </div>
                        <Show
                            when=move || capability(|c| c.resizable) && !maximized()
                            fallback=|| ()
                        >
                            {
                                let handle_window = handle_window.clone();
                                ResizeEdge::ALL
                                    .into_iter()
                                    .map(|edge| {
                                        view! { <WindowResizeHandle window=handle_window.clone() edge=edge /> }
                                    })
                                    .collect_view()
                            }
                        </Show>
                    </section>
                }
            }
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window: WindowKey, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", edge.css_class());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let Some(pointer) = desktop_pointer(runtime, &ev) else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window: window.clone(),
            edge,
            pointer,
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
fn WindowBody(window: WindowKey) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let command_window = window.clone();
    let command_sender = Callback::new(move |command| {
        runtime.dispatch_action(DesktopAction::HandleAppCommand {
            window: command_window.clone(),
            command,
        });
    });
    let host = AppHost::new(command_sender);
    let content = runtime
        .state
        .with_untracked(|s| s.window(&window).map(|w| w.content.clone()));

    let contents = match content {
        Some(content) => apps::app_module(&content).mount(AppMountContext {
            window,
            content,
            host,
        }),
        None => view! { <p>"Closed"</p> }.into_view(),
    };

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
