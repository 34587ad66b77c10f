//! Platform storage selection for the session mirror.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Everything else**: [`store::MemoryStorage`], so a session lasts only as long as the process

/// Storage backend for the current build target.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

/// Session store type held in the [`crate::AuthProvider`] context.
pub type AppSession = store::SessionStore<PlatformStorage>;

pub fn platform_storage() -> PlatformStorage {
    PlatformStorage::new()
}
