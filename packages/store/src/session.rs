//! # Session store — authoritative session with a durable mirror
//!
//! [`SessionStore`] owns the one [`Session`] value for the lifetime of the
//! page. A [`KeyValueStore`] (browser `localStorage` on the web) mirrors it
//! under two keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | raw bearer token |
//! | [`USER_KEY`] (`"user"`) | JSON-serialised [`Profile`] |
//!
//! The mirror is read once, in [`SessionStore::initialize`], and written on
//! every mutation. Both keys are set together and cleared together; if the
//! mirror is found in any other state it is wiped and the session starts out
//! signed-out.

use crate::models::{Profile, UserPayload};
use crate::storage::KeyValueStore;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialised profile.
pub const USER_KEY: &str = "user";

/// Whether someone is signed in, and who.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<Profile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }
}

/// Single writer of the session state.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore the session from `storage`.
    ///
    /// Returns a signed-out store (and erases both keys) unless a token and a
    /// valid profile are both persisted.
    pub fn initialize(storage: S) -> Self {
        let session = match (storage.get(TOKEN_KEY), storage.get(USER_KEY)) {
            (Some(token), Some(user)) => match restore_profile(&user) {
                Some(profile) if !token.is_empty() => Session {
                    token: Some(token),
                    user: Some(profile),
                },
                _ => {
                    tracing::warn!("Discarding invalid persisted session");
                    Session::default()
                }
            },
            _ => Session::default(),
        };

        let store = Self { storage, session };
        if !store.session.is_authenticated() {
            store.clear_persisted();
        }
        store
    }

    /// Sign in with a token and the user object returned by the backend.
    ///
    /// An incomplete user (no role, or failing [`UserPayload::into_profile`])
    /// or an empty token is logged and ignored: nothing changes in memory or
    /// in storage, and `false` is returned.
    pub fn login(&mut self, token: impl Into<String>, user: UserPayload) -> bool {
        let token = token.into();
        if !user.has_role() {
            tracing::error!("Login rejected: user data has no role");
            return false;
        }
        let Some(profile) = user.into_profile() else {
            tracing::error!("Login rejected: user data is incomplete");
            return false;
        };
        if token.is_empty() {
            tracing::error!("Login rejected: empty access token");
            return false;
        }
        let serialized = match serde_json::to_string(&profile) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Login rejected: failed to serialize profile: {e}");
                return false;
            }
        };

        if !(self.storage.set(USER_KEY, &serialized) && self.storage.set(TOKEN_KEY, &token)) {
            tracing::warn!("Session not persisted, it will not survive a reload");
            self.clear_persisted();
        }
        tracing::info!("Signed in as {} ({})", profile.username, profile.role);
        self.session = Session {
            token: Some(token),
            user: Some(profile),
        };
        true
    }

    /// Sign out. Always succeeds and may be called repeatedly.
    pub fn logout(&mut self) {
        self.clear_persisted();
        if let Some(user) = self.session.user.take() {
            tracing::info!("Signed out {}", user.username);
        }
        self.session = Session::default();
    }

    /// Current bearer token, for attaching to outbound requests.
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&Profile> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn clear_persisted(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

fn restore_profile(json: &str) -> Option<Profile> {
    match serde_json::from_str::<UserPayload>(json) {
        Ok(payload) => payload.into_profile(),
        Err(e) => {
            tracing::warn!("Failed to parse persisted user: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::models::Role;

    /// Accepts every write except the token, like a full browser quota.
    #[derive(Clone, Default)]
    struct TokenRejectingStorage(MemoryStorage);

    impl KeyValueStore for TokenRejectingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> bool {
            key != TOKEN_KEY && self.0.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.0.remove(key)
        }
    }

    fn admin() -> UserPayload {
        UserPayload {
            id: Some(1),
            username: Some("u".to_string()),
            email: Some("e".to_string()),
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_initialize_empty_storage() {
        let storage = MemoryStorage::new();
        let store = SessionStore::initialize(storage.clone());

        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn test_initialize_restores_valid_session() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc");
        storage.set(
            USER_KEY,
            r#"{"id":1,"username":"u","email":"e","role":"user"}"#,
        );

        let store = SessionStore::initialize(storage.clone());
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("abc"));
        assert_eq!(store.user().unwrap().role, Role::User);
        // Mirror untouched
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn test_initialize_missing_role_clears_storage() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, r#"{"id":1,"username":"u","email":"e"}"#);

        let store = SessionStore::initialize(storage.clone());
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());

        // Idempotent
        let again = SessionStore::initialize(storage.clone());
        assert_eq!(again.session(), store.session());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_initialize_corrupt_json_clears_storage() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, "{not json");

        let store = SessionStore::initialize(storage.clone());
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_initialize_half_persisted_clears_storage() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, r#"{"id":1,"username":"u","email":"e","role":"admin"}"#);

        let store = SessionStore::initialize(storage.clone());
        assert!(!store.is_authenticated());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn test_login_without_role_is_ignored() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::initialize(storage.clone());

        let mut user = admin();
        user.role = None;
        assert!(!store.login("abc", user));

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_login_without_role_keeps_previous_session() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::initialize(storage.clone());
        assert!(store.login("first", admin()));
        let before = store.session().clone();

        let mut user = admin();
        user.role = None;
        assert!(!store.login("second", user));

        assert_eq!(store.session(), &before);
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("first"));
    }

    #[test]
    fn test_login_persists_token_and_user() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::initialize(storage.clone());

        assert!(store.login("abc", admin()));
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("abc"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));

        let persisted: Profile = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(
            persisted,
            Profile {
                id: 1,
                username: "u".to_string(),
                email: "e".to_string(),
                role: Role::Admin,
            }
        );
        assert_eq!(Some(&persisted), store.user());
    }

    #[test]
    fn test_login_with_empty_token_is_ignored() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::initialize(storage.clone());
        assert!(!store.login("", admin()));
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_logout_then_reload_is_signed_out() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::initialize(storage.clone());
        store.login("abc", admin());

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());

        // Idempotent
        store.logout();

        let reloaded = SessionStore::initialize(storage.clone());
        assert!(!reloaded.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_login_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::initialize(storage.clone());
        store.login("abc", admin());

        let reloaded = SessionStore::initialize(storage);
        assert_eq!(reloaded.session(), store.session());
    }

    #[test]
    fn test_dropped_token_write_leaves_no_user_behind() {
        let storage = TokenRejectingStorage::default();
        let mut store = SessionStore::initialize(storage.clone());

        assert!(store.login("abc", admin()));
        // Memory stays authoritative for this page.
        assert!(store.is_authenticated());
        assert!(storage.0.get(USER_KEY).is_none());
        assert!(storage.0.get(TOKEN_KEY).is_none());

        let reloaded = SessionStore::initialize(storage.0.clone());
        assert!(!reloaded.is_authenticated());
    }
}
