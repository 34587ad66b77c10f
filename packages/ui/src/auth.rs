//! Authentication context and hooks for the UI.

use api::{ApiClient, ApiError, AuthGateway, LoginRequest, PortalConfig, UserPayload};
use dioxus::prelude::*;
use thiserror::Error;

use crate::components::{use_toast, ToastOptions};
use crate::storage::{platform_storage, AppSession};

/// Shown when a login fails without a server message.
pub const LOGIN_FALLBACK: &str = "Invalid username or password.";
/// Shown when a registration fails without a server message.
pub const REGISTER_FALLBACK: &str = "Registration failed. Please check your data.";

/// Why a sign-in attempt did not produce a session.
#[derive(Debug, Error)]
pub enum SignInError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The server answered 2xx but left out the token or the user's role.
    #[error("Incomplete response from server.")]
    IncompleteResponse,
}

impl SignInError {
    /// Text for the error toast.
    pub fn user_message(&self) -> String {
        match self {
            SignInError::Api(e) => e.user_message(LOGIN_FALLBACK),
            SignInError::IncompleteResponse => self.to_string(),
        }
    }
}

/// Log in through `gateway` and return the token and user to start a session with.
///
/// Rejects a response that lacks a token or a role before it ever reaches the
/// session store.
pub async fn authenticate<G: AuthGateway>(
    gateway: &G,
    request: &LoginRequest,
) -> Result<(String, UserPayload), SignInError> {
    let response = gateway.login(request).await?;
    response
        .into_credentials()
        .ok_or(SignInError::IncompleteResponse)
}

/// Get the session store.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// API client authenticated as the current user, if any.
pub fn use_api() -> ApiClient {
    let client = use_context::<ApiClient>();
    let session = use_auth();
    let token = session.read().token().map(str::to_string);
    client.with_token(token.as_deref())
}

/// Provider component that owns the session and the API client.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: PortalConfig, children: Element) -> Element {
    // Persisted state is read once, here; afterwards the signal is authoritative.
    let session = use_signal(|| AppSession::initialize(platform_storage()));
    use_context_provider(|| session);
    use_context_provider(|| ApiClient::from_config(&config));

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_auth();
    let toast = use_toast();

    let onclick = move |_| {
        session.write().logout();
        toast.info("Signed out".to_string(), ToastOptions::new());
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            crate::Icon {
                icon: crate::icons::FaRightFromBracket,
                width: 14,
                height: 14,
            }
            span { class: "ml-1.5", "{label}" }
        }
    }
}
