use leptos::{create_effect, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let boot = persistence::load_boot_state(prefs.as_ref()).await;

            dispatch.call(DesktopAction::InitializeRegistry {
                settings: boot.settings,
            });
            dispatch.call(DesktopAction::HydrateSession {
                snapshot: boot.session,
            });
            if !boot.wallpaper.is_empty() {
                dispatch.call(DesktopAction::HydrateWallpaper {
                    wallpaper: boot.wallpaper,
                });
            }
            dispatch.call(DesktopAction::HydratePowerState {
                powered_off: boot.powered_off,
            });
        });
    });
}
