//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The desktop persists everything through `window.localStorage`; [`WebPrefsStore`] is the
//! adapter and [`prefs_store`] picks the compile-time selected backend.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time storage selection for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{
    host_strategy_name, prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
