//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! The desktop only persists small key/value preferences (open window ids, settings, theme,
//! wallpaper and power flags), so this crate exposes a single storage contract. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, load_raw_pref_with, save_pref_with, save_raw_pref_with, MemoryPrefsStore,
    NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
