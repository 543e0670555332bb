//! Settings application: theme, taskbar/app toggles and wallpaper.
//!
//! App toggles change which windows are registered, so they apply on the next start.

use desktop_app_contract::AppMountContext;
use leptos::*;

use crate::model::{DesktopSettings, ThemeMode};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

const TOGGLES: [(&str, &str); 6] = [
    ("show_clock", "Show clock"),
    ("show_calculator", "Show Calculator"),
    ("show_notepad", "Show Notepad"),
    ("show_volume_control", "Show Volume Control"),
    ("show_music_player", "Show Music Player"),
    ("show_battery", "Show Battery"),
];

/// Actions the Apply button dispatches for a draft.
fn apply_actions(draft: &DesktopSettings, wallpaper: &str) -> Vec<DesktopAction> {
    let mut settings = draft.clone();
    let wallpaper = wallpaper.trim().to_string();
    settings.wallpaper_url = (!wallpaper.is_empty()).then(|| wallpaper.clone());
    vec![
        DesktopAction::ApplySettings { settings },
        DesktopAction::SetWallpaper { wallpaper },
    ]
}

pub(super) fn mount_settings_app(_: AppMountContext) -> View {
    view! { <SettingsApp /> }.into_view()
}

#[component]
fn SettingsApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let draft = create_rw_signal(runtime.state.get_untracked().settings);
    let wallpaper = create_rw_signal(runtime.state.get_untracked().wallpaper);

    let apply = move |_| {
        for action in apply_actions(&draft.get_untracked(), &wallpaper.get_untracked()) {
            runtime.dispatch_action(action);
        }
    };

    view! {
        <div class="app-shell settings-app">
            <section>
                <h3>"Theme"</h3>
                <div class="settings-theme" role="radiogroup">
                    <button
                        type="button"
                        class:selected=move || draft.with(|s| s.theme == ThemeMode::Light)
                        on:click=move |_| draft.update(|s| s.theme = ThemeMode::Light)
                    >
                        "Light"
                    </button>
                    <button
                        type="button"
                        class:selected=move || draft.with(|s| s.theme == ThemeMode::Dark)
                        on:click=move |_| draft.update(|s| s.theme = ThemeMode::Dark)
                    >
                        "Dark"
                    </button>
                </div>
            </section>
            <section>
                <h3>"System"</h3>
                {TOGGLES
                    .into_iter()
                    .map(|(name, label)| {
                        view! {
                            <label class="settings-toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|s| s.toggle_enabled(name))
                                    on:change=move |ev| {
                                        let enabled = event_target_checked(&ev);
                                        draft.update(|s| {
                                            s.set_toggle(name, enabled);
                                        });
                                    }
                                />
                                <span>{label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
                <p class="settings-note">"App visibility changes take effect after a restart."</p>
            </section>
            <section>
                <h3>"Wallpaper"</h3>
                <input
                    type="url"
                    placeholder="https://..."
                    prop:value=move || wallpaper.get()
                    on:input=move |ev| wallpaper.set(event_target_value(&ev))
                />
            </section>
            <button type="button" class="app-action" on:click=apply>
                "Apply"
            </button>
        </div>
    }
}
