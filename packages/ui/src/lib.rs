//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{platform_storage, AppSession, PlatformStorage};

pub mod auth;
pub use auth::{authenticate, use_api, use_auth, AuthProvider, LogoutButton, SignInError};

pub mod guard;
pub use guard::{check_private, check_public, post_login_destination, required_role, Access};

mod navbar;
pub use navbar::Navbar;

pub mod forms;
pub use forms::{FieldMessage, TextAreaField, TextField};

pub mod markdown;
pub use markdown::{render_markdown, MarkdownView};

pub mod views;
