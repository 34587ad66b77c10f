//! Key/value persistence used to mirror the session across page reloads.

/// A string key/value store.
///
/// Implementations are best-effort: a failed write or an unavailable backend is
/// logged and swallowed, so callers see at worst "no data". The in-memory
/// [`crate::SessionStore`] stays authoritative either way.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`. Returns `false` if the write was dropped.
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}
