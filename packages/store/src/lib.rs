pub mod config;
pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::PortalConfig;
pub use models::{Profile, Role, UserPayload};
pub use session::{Session, SessionStore, TOKEN_KEY, USER_KEY};
pub use storage::KeyValueStore;
