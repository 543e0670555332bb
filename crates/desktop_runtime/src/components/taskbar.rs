use super::*;

/// Settings has a fixed taskbar button and never shows as a running entry.
const SETTINGS_WINDOW: &str = "settings";

#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskbarEntry {
    id: WindowKey,
    title: String,
    icon: IconName,
    minimized: bool,
}

impl TaskbarEntry {
    fn from_descriptor(window: &WindowDescriptor) -> Self {
        Self {
            id: window.id.clone(),
            title: window.title.clone(),
            icon: IconName::from_id(&window.icon_id),
            minimized: window.is_minimized,
        }
    }
}

fn entries_where(
    state: &DesktopState,
    keep: impl Fn(&WindowDescriptor) -> bool,
) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .filter(|w| keep(w))
        .map(TaskbarEntry::from_descriptor)
        .collect()
}

/// Folder launchers stay on the taskbar while their folder is closed.
fn folder_launchers(state: &DesktopState) -> Vec<TaskbarEntry> {
    entries_where(state, |w| {
        w.group == WindowGroup::Folder && w.chrome.show_in_taskbar && !w.is_open
    })
}

/// Open windows (minimized included) that opt into the taskbar.
fn running_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    entries_where(state, |w| {
        w.is_open && w.chrome.show_in_taskbar && w.id.as_str() != SETTINGS_WINDOW
    })
}

fn portfolio_start_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    entries_where(state, |w| w.group == WindowGroup::Portfolio)
}

fn app_start_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    entries_where(state, |w| {
        w.group != WindowGroup::Portfolio && w.chrome.show_in_start_menu
    })
}

/// Minimized windows in the order they were minimized.
fn minimized_chips(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .minimized_order
        .iter()
        .filter_map(|id| state.window(id))
        .map(TaskbarEntry::from_descriptor)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

fn format_clock(snapshot: ClockSnapshot) -> String {
    let suffix = if snapshot.hour < 12 { "AM" } else { "PM" };
    let hour = match snapshot.hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{:02} {suffix}", snapshot.minute)
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <time class="taskbar-clock" aria-live="off">
            {move || format_clock(now.get())}
        </time>
    }
}

#[component]
fn StartMenuSection(
    title: &'static str,
    entries: Memo<Vec<TaskbarEntry>>,
    on_pick: Callback<WindowKey>,
) -> impl IntoView {
    view! {
        <section class="start-menu-section">
            <h3>{title}</h3>
            <ul role="list">
                <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                    {
                        let id = entry.id.clone();
                        view! {
                            <li>
                                <button type="button" on:click=move |_| on_pick.call(id.clone())>
                                    <Icon icon=entry.icon size=IconSize::Sm />
                                    <span>{entry.title.clone()}</span>
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </section>
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_menu_open = create_rw_signal(false);

    let launchers = create_memo(move |_| state.with(folder_launchers));
    let running = create_memo(move |_| state.with(running_entries));
    let portfolio = create_memo(move |_| state.with(portfolio_start_entries));
    let app_entries = create_memo(move |_| state.with(app_start_entries));
    let chips = create_memo(move |_| state.with(minimized_chips));
    let show_clock = create_memo(move |_| state.with(|s| s.settings.show_clock));
    let settings_open = create_memo(move |_| {
        state.with(|s| {
            s.window(&WindowKey::trusted(SETTINGS_WINDOW))
                .is_some_and(|w| w.is_open)
        })
    });

    let toggle = move |id: WindowKey| {
        start_menu_open.set(false);
        runtime.dispatch_action(DesktopAction::ToggleWindow { window: id });
    };
    let pick = Callback::new(toggle);

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <div class="taskbar-left">
                <button
                    type="button"
                    class="taskbar-start"
                    aria-label="Start"
                    aria-expanded=move || start_menu_open.get().to_string()
                    on:click=move |_| start_menu_open.update(|open| *open = !*open)
                >
                    <Icon icon=IconName::AppWindow size=IconSize::Md />
                </button>
                <button
                    type="button"
                    class="taskbar-app"
                    class:running=move || settings_open.get()
                    aria-label="Settings"
                    on:click=move |_| toggle(WindowKey::trusted(SETTINGS_WINDOW))
                >
                    <Icon icon=IconName::Settings size=IconSize::Md />
                </button>
                <For each=move || launchers.get() key=|entry| entry.id.clone() let:entry>
                    {
                        let id = entry.id.clone();
                        view! {
                            <button
                                type="button"
                                class="taskbar-app"
                                title=entry.title.clone()
                                aria-label=entry.title.clone()
                                on:click=move |_| toggle(id.clone())
                            >
                                <Icon icon=entry.icon size=IconSize::Md />
                            </button>
                        }
                    }
                </For>
                <For
                    each=move || running.get()
                    key=|entry| (entry.id.clone(), entry.minimized)
                    let:entry
                >
                    {
                        let id = entry.id.clone();
                        view! {
                            <button
                                type="button"
                                class="taskbar-app running"
                                class:minimized=entry.minimized
                                title=entry.title.clone()
                                aria-label=entry.title.clone()
                                on:click=move |_| toggle(id.clone())
                            >
                                <Icon icon=entry.icon size=IconSize::Md />
                            </button>
                        }
                    }
                </For>
            </div>

            <div class="taskbar-minimized" aria-label="Minimized windows">
                <For each=move || chips.get() key=|entry| entry.id.clone() let:entry>
                    {
                        let id = entry.id.clone();
                        view! {
                            <button
                                type="button"
                                class="taskbar-chip"
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::BringToFront {
                                        window: id.clone(),
                                    })
                                }
                            >
                                <Icon icon=entry.icon size=IconSize::Xs />
                                <span>{entry.title.clone()}</span>
                            </button>
                        }
                    }
                </For>
            </div>

            <div class="taskbar-tray">
                <Show when=move || show_clock.get() fallback=|| ()>
                    <TaskbarClock />
                </Show>
                <button
                    type="button"
                    class="taskbar-power"
                    aria-label="Shut down"
                    on:click=move |_| {
                        start_menu_open.set(false);
                        runtime.dispatch_action(DesktopAction::Shutdown);
                    }
                >
                    <Icon icon=IconName::Power size=IconSize::Sm />
                </button>
            </div>

            <Show when=move || start_menu_open.get() fallback=|| ()>
                <nav class="start-menu" aria-label="Start menu">
                    <StartMenuSection title="Portfolio" entries=portfolio on_pick=pick />
                    <StartMenuSection title="Apps" entries=app_entries on_pick=pick />
                </nav>
            </Show>
        </footer>
    }
}
