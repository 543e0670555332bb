//! Window-hosting contract between the desktop window manager and the applications it hosts.
//!
//! Hosted applications render freely inside a window's content area. The only runtime access
//! they get is an [`AppHost`] handle that can toggle another window by id or ask the manager to
//! minimize/close the hosting window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};

/// Stable identifier for one registered desktop window (`calculator`, `games-folder-window`).
///
/// Serializes as a plain string; deserializing validates through [`WindowKey::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WindowKey(String);

impl WindowKey {
    /// Returns a key when `raw` is a non-empty ASCII identifier (letters, digits, `-`, `_`).
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_window_key(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid window id `{raw}`; expected ascii letters, digits, `-` or `_`"
            ))
        }
    }

    /// Creates a key without validation for trusted catalog constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WindowKey {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<WindowKey> for String {
    fn from(key: WindowKey) -> Self {
        key.0
    }
}

impl From<&str> for WindowKey {
    fn from(raw: &str) -> Self {
        Self::trusted(raw)
    }
}

fn is_valid_window_key(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= 64
        && raw.as_bytes()[0].is_ascii_alphabetic()
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Requests a hosted application can send to the window manager.
pub enum AppCommand {
    /// Open (or close, when already visible) another registered window.
    ToggleWindow(WindowKey),
    /// Minimize the hosting window.
    MinimizeSelf,
    /// Close the hosting window.
    CloseSelf,
}

#[derive(Clone, Copy)]
/// Handle given to hosted applications for talking back to the window manager.
pub struct AppHost {
    sender: Callback<AppCommand>,
}

impl AppHost {
    /// Creates a host handle that forwards commands to `sender`.
    pub fn new(sender: Callback<AppCommand>) -> Self {
        Self { sender }
    }

    /// Toggles the window registered under `window`.
    pub fn toggle_window(&self, window: WindowKey) {
        self.sender.call(AppCommand::ToggleWindow(window));
    }

    /// Minimizes the hosting window.
    pub fn minimize(&self) {
        self.sender.call(AppCommand::MinimizeSelf);
    }

    /// Closes the hosting window.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseSelf);
    }
}

#[derive(Clone)]
/// Everything a hosted application receives when it is mounted into a window.
pub struct AppMountContext {
    /// Id of the hosting window.
    pub window: WindowKey,
    /// Opaque content reference from the window catalog (`portfolio.about`, `folder.games`).
    pub content: String,
    /// Manager callbacks.
    pub host: AppHost,
}

/// Static app mount function used by the runtime content registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable application module.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
