//! Key/value preference storage contracts and adapters.
//!
//! Values are stored as raw text per key. Most keys hold JSON; a few (theme, wallpaper URL,
//! power flags) hold plain strings, so both typed JSON helpers and raw helpers are provided.

use std::{cell::RefCell, collections::BTreeMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for preference values stored as text per key.
pub trait PrefsStore {
    /// Loads the raw stored text for `key`.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Replaces the raw stored text for `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key` from the store.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that never holds anything; used off-browser and as a baseline in tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store; clones share the same backing map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::default();
        store.inner.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    /// Returns the raw text currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Returns every stored key in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads `key` and parses it as JSON into `T`.
///
/// # Errors
///
/// Returns an error when the store read fails or the stored text is not valid JSON for `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("malformed `{key}`: {e}"))
}

/// Serializes `value` as JSON and stores it under `key`.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

/// Loads the plain-text value stored under `key`.
///
/// # Errors
///
/// Returns an error when the store read fails.
pub async fn load_raw_pref_with<S: PrefsStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<String>, String> {
    store.load_pref(key).await
}

/// Stores `value` under `key` without JSON encoding.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn save_raw_pref_with<S: PrefsStore + ?Sized>(
    store: &S,
    key: &str,
    value: &str,
) -> Result<(), String> {
    store.save_pref(key, value).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Flags {
        show_clock: bool,
    }

    #[test]
    fn memory_store_shares_state_between_clones() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("win11-theme", "dark")).expect("save");
        assert_eq!(other.raw("win11-theme"), Some("dark".to_string()));

        block_on(store_obj.delete_pref("win11-theme")).expect("delete");
        assert_eq!(other.raw("win11-theme"), None);
    }

    #[test]
    fn typed_helpers_encode_json() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(&store, "ids", &["about", "notepad"])).expect("save ids");
        assert_eq!(store.raw("ids"), Some(r#"["about","notepad"]"#.to_string()));

        let loaded: Option<Vec<String>> = block_on(load_pref_with(&store, "ids")).expect("load");
        assert_eq!(
            loaded,
            Some(vec!["about".to_string(), "notepad".to_string()])
        );
    }

    #[test]
    fn typed_load_reports_malformed_json_with_key() {
        let store = MemoryPrefsStore::with_entries([("flags", "{not json")]);
        let err = block_on(load_pref_with::<_, Flags>(&store, "flags")).unwrap_err();
        assert!(err.starts_with("malformed `flags`"), "{err}");
    }

    #[test]
    fn raw_helpers_skip_json_encoding() {
        let store = MemoryPrefsStore::default();
        block_on(save_raw_pref_with(&store, "win11-wallpaper", "https://img/a.png"))
            .expect("save");
        assert_eq!(
            block_on(load_raw_pref_with(&store, "win11-wallpaper")).expect("load"),
            Some("https://img/a.png".to_string())
        );
        assert_eq!(store.keys(), vec!["win11-wallpaper".to_string()]);
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "{}")).expect("save");
        block_on(store_obj.delete_pref("k")).expect("delete");
        assert_eq!(
            block_on(load_pref_with::<_, Flags>(&store, "k")).expect("load typed"),
            None
        );
    }
}
