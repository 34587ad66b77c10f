//! Third-party primitives used across views.

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
