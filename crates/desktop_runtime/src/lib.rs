//! Desktop window manager runtime: window registry, geometry resolver, drag/resize controller,
//! persistence and the Leptos shell that renders them.

pub mod apps;
pub mod catalog;
pub mod components;
mod effect_executor;
pub mod host;
pub mod icons;
pub mod interaction;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod window_manager;

pub use components::DesktopShell;
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_boot_state, BootState};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
