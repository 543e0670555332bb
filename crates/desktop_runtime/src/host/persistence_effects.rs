use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_session(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let session = runtime.state.get_untracked().session();
    spawn_local(async move {
        if let Err(err) = persistence::persist_session(host.prefs_store().as_ref(), &session).await
        {
            logging::warn!("persist session failed: {err}");
        }
    });
}

pub(super) fn persist_settings(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let settings = runtime.state.get_untracked().settings;
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_settings(host.prefs_store().as_ref(), &settings).await
        {
            logging::warn!("persist settings failed: {err}");
        }
    });
}

pub(super) fn persist_wallpaper(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let wallpaper = runtime.state.get_untracked().wallpaper;
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_wallpaper(host.prefs_store().as_ref(), &wallpaper).await
        {
            logging::warn!("persist wallpaper failed: {err}");
        }
    });
}

pub(super) fn persist_power_state(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let powered_off = runtime.state.get_untracked().powered_off;
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_power_state(host.prefs_store().as_ref(), powered_off).await
        {
            logging::warn!("persist power state failed: {err}");
        }
    });
}
