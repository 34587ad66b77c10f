//! Registration page view with username, email, password and role.

use api::{AuthGateway, FieldErrors, RegisterRequest, Role, Validate};
use dioxus::prelude::*;
use ui::auth::REGISTER_FALLBACK;
use ui::components::{use_toast, ToastOptions};
use ui::{use_api, FieldMessage, TextField};

use crate::Route;

pub const REGISTER_SUCCESS: &str = "Registration successful! Please log in.";

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();
    let mut form = use_signal(RegisterRequest::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
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
            let result = api.register(&request).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Registered {}", request.username);
                    toast.success(REGISTER_SUCCESS.to_string(), ToastOptions::new());
                    nav.push(Route::Login { redirect: String::new() });
                }
                Err(e) => {
                    tracing::error!("Registration failed: {e}");
                    toast.error(e.user_message(REGISTER_FALLBACK), ToastOptions::new());
                }
            }
        });
    };

    let error = |field: &str| errors.read().get(field).map(str::to_string);
    let role = form.read().role;

    rsx! {
        div {
            class: "hidden md:flex md:w-1/2 lg:w-3/5 flex-col justify-center items-center p-16 bg-gradient-to-br from-blue-600 to-blue-800 text-white",
            h1 { class: "text-5xl font-bold mb-4 text-center", "Welcome!" }
            p {
                class: "text-xl text-center mb-8 max-w-md opacity-90",
                "Create an account to access the Student Portal."
            }
            Link {
                class: "bg-white text-blue-700 font-semibold rounded-lg py-3 px-8 hover:bg-blue-50 shadow-md",
                to: Route::Login { redirect: String::new() },
                "Already have an account? Log in"
            }
        }

        div {
            class: "w-full md:w-1/2 lg:w-2/5 bg-white flex items-center justify-center p-8 md:p-12",
            div {
                class: "w-full max-w-sm",
                h2 { class: "text-3xl font-bold text-center text-gray-800 mb-8", "Create a new account" }

                form {
                    class: "space-y-5",
                    onsubmit: handle_register,

                    TextField {
                        id: "username",
                        label: "Username",
                        value: form.read().username.clone(),
                        placeholder: "e.g. budi.sanjaya",
                        disabled: loading(),
                        error: error("username"),
                        oninput: move |v: String| form.write().username = v,
                    }
                    TextField {
                        id: "email",
                        label: "Email",
                        input_type: "email",
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
                        placeholder: "At least 8 characters",
                        disabled: loading(),
                        error: error("password"),
                        oninput: move |v: String| form.write().password = v,
                    }

                    div {
                        label {
                            r#for: "role",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Register as"
                        }
                        select {
                            id: "role",
                            class: "w-full p-3 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            disabled: loading(),
                            value: "{role}",
                            onchange: move |evt: FormEvent| {
                                match evt.value().parse::<Role>() {
                                    Ok(role) => form.write().role = role,
                                    Err(e) => tracing::warn!("{e}"),
                                }
                            },
                            option { value: "user", "User" }
                            option { value: "admin", "Admin" }
                        }
                        FieldMessage { message: error("role") }
                    }

                    button {
                        class: "w-full bg-blue-600 text-white py-3 rounded-md font-semibold hover:bg-blue-700 disabled:opacity-70 disabled:cursor-not-allowed",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Create account" }
                    }
                }

                p {
                    class: "mt-8 text-center text-sm text-gray-600",
                    "Already have an account? "
                    Link {
                        class: "text-blue-600 font-semibold hover:underline",
                        to: Route::Login { redirect: String::new() },
                        "Log in here"
                    }
                }
            }
        }
    }
}
