//! Router layouts that apply the session guards on every navigation.

use dioxus::prelude::*;
use ui::views::AlertDialog;
use ui::{check_private, check_public, post_login_destination, use_auth, Access};

use crate::Route;

pub const DENIED_TITLE: &str = "Access denied";
pub const DENIED_MESSAGE: &str = "You do not have permission to access this page.";

/// What a layout does with a guard decision.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum GuardStep {
    Render,
    Redirect(Route),
    /// Hold the user on a blocking notice; dismissing it goes home.
    Deny,
}

pub(crate) fn private_step(access: Access) -> GuardStep {
    match access {
        Access::Render => GuardStep::Render,
        Access::Login { from } => GuardStep::Redirect(Route::Login { redirect: from }),
        Access::Denied => GuardStep::Deny,
        Access::Home => GuardStep::Redirect(Route::Home {}),
    }
}

/// Where a signed-in user on a public page is sent: the location carried to
/// the login page when it is safe, otherwise home.
pub(crate) fn login_destination(route: &Route) -> Route {
    match route {
        Route::Login { redirect } => Route::from_path(post_login_destination(redirect)),
        _ => Route::Home {},
    }
}

/// Wraps every page that needs a signed-in user.
///
/// Signed-out visitors go to the login page with the requested path carried
/// along. Signed-in users without the route's role get a blocking notice and
/// are sent home once they dismiss it.
#[component]
pub fn Protected() -> Element {
    let session = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let requested = route.to_string();
    let access = check_private(session.read().session(), route.required_role(), &requested);
    let step = private_step(access);

    use_effect(use_reactive!(|step| {
        if let GuardStep::Redirect(target) = step {
            nav.replace(target);
        }
    }));

    match step {
        GuardStep::Render => rsx! { Outlet::<Route> {} },
        GuardStep::Deny => rsx! {
            AlertDialog {
                title: DENIED_TITLE,
                message: DENIED_MESSAGE,
                on_dismiss: move |_| {
                    nav.replace(Route::Home {});
                },
            }
        },
        GuardStep::Redirect(_) => rsx! {},
    }
}

/// Wraps the login and register pages. A signed-in user is moved on, to the
/// carried location when arriving from a login redirect.
#[component]
pub fn PublicOnly() -> Element {
    let session = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let access = check_public(session.read().session());
    let destination = login_destination(&route);

    use_effect(use_reactive!(|access, destination| {
        if access == Access::Home {
            nav.replace(destination);
        }
    }));

    rsx! {
        div {
            class: "flex min-h-screen bg-gray-100",
            if access == Access::Render {
                Outlet::<Route> {}
            }
        }
    }
}
