//! Content registry: resolves a window's opaque `content` reference to a mountable module.
//!
//! Leaf applications are outside the window manager; the built-ins here are the portfolio
//! panels, folder listings, settings, and a generic placeholder for the toy apps.

mod placeholders;
mod settings;

use desktop_app_contract::{AppModule, AppMountContext};
use leptos::*;

use crate::catalog::folder_listing_group;
use crate::icons::{Icon, IconName, IconSize};
use crate::model::{DesktopState, WindowKey};
use crate::runtime_context::use_desktop_runtime;

/// Returns the module that renders `content`.
pub fn app_module(content: &str) -> AppModule {
    if content == "utility.settings" {
        return AppModule::new(settings::mount_settings_app);
    }
    match content.split_once('.').map(|(kind, _)| kind) {
        Some("portfolio") => AppModule::new(placeholders::mount_portfolio_panel),
        Some("folder") => AppModule::new(mount_folder_app),
        _ => AppModule::new(placeholders::mount_app_placeholder),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One launchable entry shown inside a folder window.
pub struct FolderEntry {
    pub id: WindowKey,
    pub title: String,
    pub icon_id: String,
    pub is_open: bool,
}

/// Registered windows listed by a folder's content reference, in catalog order.
pub fn folder_entries(state: &DesktopState, content: &str) -> Vec<FolderEntry> {
    let Some(group) = folder_listing_group(content) else {
        return Vec::new();
    };
    state
        .windows
        .iter()
        .filter(|w| w.group == group)
        .map(|w| FolderEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            icon_id: w.icon_id.clone(),
            is_open: w.is_open,
        })
        .collect()
}

fn mount_folder_app(context: AppMountContext) -> View {
    view! { <FolderApp context=context /> }.into_view()
}

#[component]
fn FolderApp(context: AppMountContext) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let host = context.host;
    let content = context.content.clone();
    let entries = create_memo(move |_| runtime.state.with(|s| folder_entries(s, &content)));

    view! {
        <div class="app-shell folder-app">
            <ul class="folder-grid" role="list">
                <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                    {
                        let id = entry.id.clone();
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="folder-entry"
                                    class:open=entry.is_open
                                    on:dblclick=move |_| host.toggle_window(id.clone())
                                >
                                    <Icon icon=IconName::from_id(&entry.icon_id) size=IconSize::Lg />
                                    <span>{entry.title.clone()}</span>
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::build_registry;
    use crate::model::{DesktopSettings, LayoutConfig};

    fn state(settings: DesktopSettings) -> DesktopState {
        DesktopState::new(build_registry(&settings), LayoutConfig::default(), settings)
    }

    #[test]
    fn games_folder_lists_games() {
        let entries = folder_entries(&state(DesktopSettings::default()), "folder.games");
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["tictactoe", "snake", "minesweeper"]);
    }

    #[test]
    fn utilities_folder_skips_disabled_toggles() {
        let settings = DesktopSettings {
            show_music_player: false,
            ..DesktopSettings::default()
        };
        let entries = folder_entries(&state(settings), "folder.utilities");
        assert!(entries.iter().all(|e| e.id.as_str() != "music"));
        assert!(entries.iter().any(|e| e.id.as_str() == "calculator"));
    }

    #[test]
    fn non_folder_content_lists_nothing() {
        assert!(folder_entries(&state(DesktopSettings::default()), "portfolio.about").is_empty());
    }
}
