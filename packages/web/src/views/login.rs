//! Login page: email or username plus password.

use api::{FieldErrors, LoginRequest, Validate};
use dioxus::prelude::*;
use ui::components::{use_toast, ToastOptions};
use ui::{authenticate, use_api, use_auth, SignInError, TextField};

use crate::Route;

pub const LOGIN_SUCCESS: &str = "Login successful!";

/// Login page component.
///
/// On success the session is started and the public layout moves the user on
/// to `redirect` (or home).
#[component]
pub fn Login(redirect: String) -> Element {
    let mut session = use_auth();
    let api = use_api();
    let toast = use_toast();
    let mut form = use_signal(LoginRequest::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let request = form();
        if let Err(e) = request.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        loading.set(true);

        let api = api.clone();
        spawn(async move {
            let result = authenticate(&api, &request).await;
            loading.set(false);
            match result {
                Ok((token, user)) => {
                    if session.write().login(token, user) {
                        toast.success(LOGIN_SUCCESS.to_string(), ToastOptions::new());
                    } else {
                        toast.error(
                            SignInError::IncompleteResponse.user_message(),
                            ToastOptions::new(),
                        );
                    }
                }
                Err(e) => {
                    tracing::error!("Login failed: {e}");
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
        });
    };

    let error = |field: &str| errors.read().get(field).map(str::to_string);

    rsx! {
        div {
            class: "hidden md:flex md:w-1/2 lg:w-3/5 flex-col justify-center items-center p-16 bg-gradient-to-br from-blue-600 to-blue-800 text-white",
            h1 { class: "text-5xl font-bold mb-4 text-center", "Welcome back!" }
            p {
                class: "text-xl text-center mb-8 max-w-md opacity-90",
                "Sign in to the Student Portal to manage student data, recipes, postings and notes."
            }
            Link {
                class: "bg-white text-blue-700 font-semibold rounded-lg py-3 px-8 hover:bg-blue-50 shadow-md",
                to: Route::Register {},
                "No account yet? Register"
            }
        }

        div {
            class: "w-full md:w-1/2 lg:w-2/5 bg-white flex items-center justify-center p-8 md:p-12",
            div {
                class: "w-full max-w-sm",
                h2 { class: "text-3xl font-bold text-center text-gray-800 mb-8", "Sign in" }

                if !redirect.is_empty() {
                    p {
                        class: "mb-4 px-3 py-2 bg-blue-50 border border-blue-200 rounded text-blue-700 text-sm",
                        "Please sign in to continue."
                    }
                }

                form {
                    class: "space-y-5",
                    onsubmit: handle_login,

                    TextField {
                        id: "email",
                        label: "Email or username",
                        value: form.read().email.clone(),
                        placeholder: "email@example.com",
                        disabled: loading(),
                        error: error("email"),
                        oninput: move |v: String| form.write().email = v,
                    }
                    TextField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        value: form.read().password.clone(),
                        placeholder: "••••••••",
                        disabled: loading(),
                        error: error("password"),
                        oninput: move |v: String| form.write().password = v,
                    }

                    button {
                        class: "w-full bg-blue-600 text-white py-3 rounded-md font-semibold hover:bg-blue-700 disabled:opacity-70 disabled:cursor-not-allowed",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "mt-8 text-center text-sm text-gray-600",
                    "Don't have an account? "
                    Link {
                        class: "text-blue-600 font-semibold hover:underline",
                        to: Route::Register {},
                        "Register here"
                    }
                }
            }
        }
    }
}
